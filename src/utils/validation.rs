//! Centralized input limits and small parsing helpers.

/// Maximum number of header lines read from a single file (DOS protection)
pub const MAX_HEADER_LINES: usize = 1_000_000;

/// Check if reading another header line would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new line.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_header_line_limit(count: usize) -> Option<String> {
    if count >= MAX_HEADER_LINES {
        Some(format!(
            "Too many header lines: adding another would exceed maximum of {MAX_HEADER_LINES}"
        ))
    } else {
        None
    }
}

/// Input validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid chromsizes line {line}: '{text}'")]
    InvalidChromsizes { line: usize, text: String },
}

/// Parse a chromosome sizes table (`name<TAB>length` per line).
///
/// Blank lines and `#` comments are skipped; extra columns are ignored.
///
/// # Errors
///
/// Returns `ValidationError::InvalidChromsizes` naming the offending line if a
/// length is missing or not an integer.
pub fn parse_chromsizes(text: &str) -> Result<Vec<(String, u64)>, ValidationError> {
    let mut chromsizes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let name = fields.next().unwrap_or_default();
        let length = fields
            .next()
            .and_then(|l| l.parse::<u64>().ok())
            .ok_or_else(|| ValidationError::InvalidChromsizes {
                line: i + 1,
                text: line.to_string(),
            })?;
        chromsizes.push((name.to_string(), length));
    }
    Ok(chromsizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_header_line_limit() {
        assert!(check_header_line_limit(0).is_none());
        assert!(check_header_line_limit(MAX_HEADER_LINES - 1).is_none());
        assert!(check_header_line_limit(MAX_HEADER_LINES).is_some());
    }

    #[test]
    fn test_parse_chromsizes() {
        let text = "# comment\nchr1\t1000\n\nchr2 800\textra\n";
        assert_eq!(
            parse_chromsizes(text).unwrap(),
            vec![("chr1".to_string(), 1000), ("chr2".to_string(), 800)]
        );
    }

    #[test]
    fn test_parse_chromsizes_invalid() {
        let err = parse_chromsizes("chr1\t1000\nchr2\tabc\n").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidChromsizes {
                line: 2,
                text: "chr2\tabc".to_string()
            }
        );
        assert!(err.to_string().contains("line 2"));
        assert!(matches!(
            parse_chromsizes("chr1\n"),
            Err(ValidationError::InvalidChromsizes { line: 1, .. })
        ));
    }
}
