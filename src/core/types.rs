use serde::{Deserialize, Serialize};

use crate::core::error::HeaderError;

/// Prefix of the line declaring the pairs format version
pub const VERSION_PREFIX: &str = "## pairs format v";

/// Version of the pairs format declared in the first header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FormatVersion {
    pub major: u32,
    pub minor: u32,
}

impl FormatVersion {
    /// Version written by [`crate::core::header::make_standard_pairsheader`]
    pub const CURRENT: FormatVersion = FormatVersion { major: 1, minor: 0 };

    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a version declaration line such as `## pairs format v1.0`.
    ///
    /// Returns `None` if the line is not a version declaration.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.strip_prefix(VERSION_PREFIX)?.trim_end();
        let (major, minor) = rest.split_once('.')?;
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }

    /// Render the version as a header line
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{VERSION_PREFIX}{}.{}", self.major, self.minor)
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Reserved `#key: value` fields of the pairs format.
///
/// Lines with these keys are checked for consistency when headers are merged;
/// any other `#` line is treated as a free-form comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairsFormatKey {
    Columns,
    Chromsize,
    Shape,
    Sorted,
    Chromosomes,
    GenomeAssembly,
}

impl PairsFormatKey {
    /// All keys, in the order merge conflicts are checked
    pub const ALL: [PairsFormatKey; 6] = [
        Self::Shape,
        Self::GenomeAssembly,
        Self::Sorted,
        Self::Chromosomes,
        Self::Chromsize,
        Self::Columns,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::Chromsize => "chromsize",
            Self::Shape => "shape",
            Self::Sorted => "sorted",
            Self::Chromosomes => "chromosomes",
            Self::GenomeAssembly => "genome_assembly",
        }
    }

    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "columns" => Some(Self::Columns),
            "chromsize" => Some(Self::Chromsize),
            "shape" => Some(Self::Shape),
            "sorted" => Some(Self::Sorted),
            "chromosomes" => Some(Self::Chromosomes),
            "genome_assembly" => Some(Self::GenomeAssembly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PairsFormatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reference to a column, either by position or by name.
///
/// Positions follow Python-style indexing: `-1` is the last column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    Index(i64),
    Name(String),
}

impl From<i64> for ColumnSpec {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for ColumnSpec {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&ColumnSpec> for ColumnSpec {
    fn from(spec: &ColumnSpec) -> Self {
        spec.clone()
    }
}

impl TryFrom<&serde_json::Value> for ColumnSpec {
    type Error = HeaderError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(name) => Ok(Self::Name(name.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Index)
                .ok_or_else(|| HeaderError::InvalidColumnSpec(n.to_string())),
            other => Err(HeaderError::InvalidColumnSpec(other.to_string())),
        }
    }
}

impl std::str::FromStr for ColumnSpec {
    type Err = HeaderError;

    /// Integer literals are positions, any other non-empty text is a name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HeaderError::InvalidColumnSpec("empty string".to_string()));
        }
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Name(s.to_string()), Self::Index))
    }
}

impl std::fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}
