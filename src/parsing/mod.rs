//! Reading pairs headers from files and streams.
//!
//! A pairs header is the leading block of `#`-prefixed lines; reading stops at
//! the first data line. Plain text and gzip (`.gz`) files are supported, and
//! `-` reads from stdin.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pairs_header::parsing::pairs::read_header_file;
//! use std::path::Path;
//!
//! let header = read_header_file(Path::new("sample.pairs.gz")).unwrap();
//! println!("{:?}", header.column_names());
//! ```

pub mod pairs;

pub use pairs::ParseError;
