use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::header::PairsHeader;
use crate::utils::validation::{check_header_line_limit, MAX_HEADER_LINES};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pairs header: {0}")]
    InvalidFormat(String),

    #[error("Too many header lines: {0} exceeds maximum allowed ({MAX_HEADER_LINES})")]
    TooManyHeaderLines(usize),
}

/// Read the header of a pairs file.
///
/// `-` reads from stdin. Gzip input is detected from its magic bytes, so
/// `.pairs.gz` files and compressed stdin both work.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::InvalidFormat` if the input has no header lines, or
/// `ParseError::TooManyHeaderLines` if the header exceeds the limit.
pub fn read_header_file(path: &Path) -> Result<PairsHeader, ParseError> {
    let header = if path.as_os_str() == "-" {
        read_header(open_maybe_gzip(std::io::stdin().lock())?)?
    } else {
        read_header(open_maybe_gzip(File::open(path)?)?)?
    };

    if header.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "no header lines found in {}",
            path.display()
        )));
    }
    debug!(path = %path.display(), lines = header.len(), "Read pairs header");
    Ok(header)
}

fn open_maybe_gzip<'a, R: Read + 'a>(inner: R) -> Result<Box<dyn BufRead + 'a>, ParseError> {
    let mut reader = BufReader::new(inner);
    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Read `#` lines from the start of `reader`, stopping at the first data line
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure or
/// `ParseError::TooManyHeaderLines` if the header exceeds the limit.
pub fn read_header<R: BufRead>(mut reader: R) -> Result<PairsHeader, ParseError> {
    let mut lines = Vec::new();
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim_end_matches(&['\n', '\r'][..]);
        if !line.starts_with('#') {
            break;
        }
        if check_header_line_limit(lines.len()).is_some() {
            return Err(ParseError::TooManyHeaderLines(lines.len()));
        }
        lines.push(line.to_string());
    }

    Ok(PairsHeader::new(lines))
}

/// Parse header text (e.g. pasted or piped), ignoring anything after the header
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has no header lines.
pub fn parse_header_text(text: &str) -> Result<PairsHeader, ParseError> {
    let header = read_header(text.as_bytes())?;
    if header.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No '#' header lines found".to_string(),
        ));
    }
    Ok(header)
}
