//! Core data types for pairs headers.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`PairsHeader`](header::PairsHeader): the ordered `#` lines of a pairs file
//! - [`HeaderLine`](header::HeaderLine): classification of a single header line
//! - [`ColumnSpec`](types::ColumnSpec): a column reference by position or name
//! - [`ProgramRecord`](samheader::ProgramRecord): an embedded `@PG` record
//! - [`HeaderError`](error::HeaderError): validation and merge failures
//!
//! ## Header Layout
//!
//! ```text
//! ## pairs format v1.0
//! #shape: upper triangle
//! #genome_assembly: hg38
//! #chromsize: chr1 248956422
//! #samheader: @SQ	SN:chr1	LN:248956422
//! #samheader: @PG	ID:bwa	PN:bwa
//! #columns: readID chrom1 pos1 chrom2 pos2 strand1 strand2 pair_type
//! ```

pub mod columns;
pub mod error;
pub mod header;
pub mod samheader;
pub mod types;
