use thiserror::Error;

/// Errors raised by column resolution and header merging.
///
/// All of these are deterministic validation failures: they name the offending
/// value or header category and are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Column spec must be string or integer, got: {0}")]
    InvalidColumnSpec(String),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column index {index} out of range (valid range: -{len}..{len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Incompatible pairs format versions: '{expected}' vs '{found}'")]
    IncompatibleFormatVersion { expected: String, found: String },

    #[error("Cannot merge headers: '{category}' lines differ between inputs (use force to union them)")]
    HeaderMergeConflict { category: String },

    #[error("Incompatible SAM headers: '{expected}' vs '{found}'")]
    IncompatibleAlignmentHeader { expected: String, found: String },

    #[error("No headers to merge")]
    EmptyMerge,
}
