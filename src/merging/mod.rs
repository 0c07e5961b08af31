//! Merging headers of several pairs files into one.
//!
//! Used when concatenating or combining pairs files. The pairs-level lines
//! and the embedded SAM header are merged separately:
//!
//! - [`pairs::merge_pairs_headers`]: version gate, reserved-key consistency
//!   checks (overridable with `force`), union of free-form comments
//! - [`sam::merge_sam_headers`]: `@HD` gate, `@SQ` union, `@PG` chain renaming
//!
//! [`merge_headers`] combines both.
//!
//! ## Example
//!
//! ```
//! use pairs_header::core::header::PairsHeader;
//! use pairs_header::merging::merge_headers;
//!
//! let a = PairsHeader::from(vec!["## pairs format v1.0", "#samheader: @PG\tID:bwa\tPN:bwa"]);
//! let b = a.clone();
//!
//! let merged = merge_headers(&[a, b], false).unwrap();
//! assert_eq!(
//!     merged.samheader_lines(),
//!     vec!["@PG\tID:bwa-1\tPN:bwa", "@PG\tID:bwa-2\tPN:bwa"]
//! );
//! ```

pub mod pairs;
pub mod sam;

use crate::core::error::HeaderError;
use crate::core::header::{strip_samheader_prefix, PairsHeader};
use crate::provenance::insert_samheader;

pub use pairs::merge_pairs_headers;
pub use sam::merge_sam_headers;

/// Merge complete pairs headers, including their embedded SAM headers.
///
/// A single header is returned unchanged.
///
/// # Errors
///
/// Propagates errors from [`merge_pairs_headers`] and [`merge_sam_headers`].
pub fn merge_headers(headers: &[PairsHeader], force: bool) -> Result<PairsHeader, HeaderError> {
    if let [single] = headers {
        return Ok(single.clone());
    }

    let pairs_parts: Vec<PairsHeader> = headers
        .iter()
        .map(|h| {
            PairsHeader::new(
                h.lines()
                    .iter()
                    .filter(|l| strip_samheader_prefix(l).is_none())
                    .cloned()
                    .collect(),
            )
        })
        .collect();
    let sam_parts: Vec<Vec<&str>> = headers.iter().map(PairsHeader::samheader_lines).collect();

    let merged = merge_pairs_headers(&pairs_parts, force)?;
    if sam_parts.iter().all(Vec::is_empty) {
        return Ok(merged);
    }

    let merged_sam = merge_sam_headers(&sam_parts)?;
    Ok(insert_samheader(&merged, &merged_sam))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_headers_identical() {
        let header = PairsHeader::from(vec![
            "## pairs format v1.0",
            "#samheader: @HD\tVN:1",
            "#samheader: @SQ\tSN:chr1\tLN:100",
            "#samheader: @SQ\tSN:chr2\tLN:100",
        ]);
        let merged = merge_headers(&[header.clone(), header.clone()], false).unwrap();
        assert_eq!(merged, header);
    }

    #[test]
    fn test_merge_headers_keeps_columns_last() {
        let a = PairsHeader::from(vec![
            "## pairs format v1.0",
            "#shape: upper triangle",
            "#samheader: @PG\tID:bwa\tPN:bwa",
            "#columns: readID chrom1 pos1 chrom2 pos2",
        ]);
        let merged = merge_headers(&[a.clone(), a], false).unwrap();
        assert_eq!(
            merged.lines(),
            &[
                "## pairs format v1.0",
                "#shape: upper triangle",
                "#samheader: @PG\tID:bwa-1\tPN:bwa",
                "#samheader: @PG\tID:bwa-2\tPN:bwa",
                "#columns: readID chrom1 pos1 chrom2 pos2",
            ]
        );
    }

    #[test]
    fn test_merge_headers_single_unchanged() {
        let header = PairsHeader::from(vec![
            "## pairs format v1.0",
            "#samheader: @PG\tID:bwa\tPN:bwa",
            "#samheader: @SQ\tSN:chr1\tLN:100",
            "#columns: readID chrom1",
        ]);
        assert_eq!(merge_headers(&[header.clone()], false).unwrap(), header);
        assert_eq!(merge_headers(&[], false), Err(HeaderError::EmptyMerge));
    }

    #[test]
    fn test_merge_headers_forced_columns_last() {
        let a = PairsHeader::from(vec![
            "## pairs format v1.0",
            "#a",
            "#chromsize: chr1 100",
            "#samheader: @HD\tVN:1",
            "#columns: readID chrom1",
        ]);
        let b = PairsHeader::from(vec![
            "## pairs format v1.0",
            "#b",
            "#chromsize: chr2 200",
            "#samheader: @HD\tVN:1",
            "#columns: readID chrom1",
        ]);
        let merged = merge_headers(&[a, b], true).unwrap();
        assert_eq!(
            merged.lines(),
            &[
                "## pairs format v1.0",
                "#a",
                "#chromsize: chr1 100",
                "#b",
                "#chromsize: chr2 200",
                "#samheader: @HD\tVN:1",
                "#columns: readID chrom1",
            ]
        );
    }

    #[test]
    fn test_merge_headers_without_samheader() {
        let a = PairsHeader::from(vec!["## pairs format v1.0", "#a"]);
        let b = PairsHeader::from(vec!["## pairs format v1.0", "#b"]);
        let merged = merge_headers(&[a, b], false).unwrap();
        assert_eq!(merged.lines(), &["## pairs format v1.0", "#a", "#b"]);
    }

    #[test]
    fn test_merge_headers_incompatible_samheaders() {
        let a = PairsHeader::from(vec!["## pairs format v1.0", "#samheader: @HD\tVN:1.5"]);
        let b = PairsHeader::from(vec!["## pairs format v1.0", "#samheader: @HD\tVN:1.6"]);
        assert!(matches!(
            merge_headers(&[a, b], true),
            Err(HeaderError::IncompatibleAlignmentHeader { .. })
        ));
    }
}
