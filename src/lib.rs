//! # pairs-header
//!
//! A library for building, extending and merging the headers of `.pairs` files.
//!
//! A pairs file starts with a block of `#` lines: the format version, the
//! column names, chromosome sizes, and often the SAM header of the aligner
//! that produced the reads, embedded as `#samheader:` lines. Tools that
//! combine or rewrite pairs files have to carry these headers along without
//! losing information.
//!
//! ## Features
//!
//! - **Column lookup**: resolve column names (including aliases such as `chr1`
//!   for `chrom1`) or Python-style positions to column indices
//! - **Header construction**: build a well-formed default header
//! - **Provenance**: embed SAM headers and extend their `@PG` chain
//! - **Merging**: combine headers of several files, detecting incompatible
//!   inputs and renaming colliding `@PG` IDs
//!
//! ## Example
//!
//! ```rust
//! use pairs_header::{get_column_index, merge_headers, HeaderBuilder};
//!
//! let header = HeaderBuilder::new()
//!     .chromsizes([("chr1", 1000), ("chr2", 800)])
//!     .build();
//!
//! let columns = header.column_names().unwrap();
//! assert_eq!(get_column_index(&columns, "chr1").unwrap(), 1);
//!
//! let merged = merge_headers(&[header.clone(), header.clone()], false).unwrap();
//! assert_eq!(merged, header);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Header types, column resolution and header construction
//! - [`provenance`]: Embedding SAM headers and appending `@PG` records
//! - [`merging`]: Merging pairs and SAM headers
//! - [`parsing`]: Reading headers from pairs files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod merging;
pub mod parsing;
pub mod provenance;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::columns::{get_column_index, standardize_column};
pub use core::error::HeaderError;
pub use core::header::{make_standard_pairsheader, HeaderBuilder, HeaderLine, PairsHeader};
pub use core::samheader::ProgramRecord;
pub use core::types::*;
pub use merging::{merge_headers, merge_pairs_headers, merge_sam_headers};
pub use provenance::{append_program_record, insert_samheader};
