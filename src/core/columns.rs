//! Column name resolution.
//!
//! Column names in `#columns:` lines vary between tools and format revisions;
//! a small alias table maps the common short or legacy forms onto the
//! canonical names used by the pairs format.
//!
//! | Alias | Canonical |
//! |-------|-----------|
//! | chr1  | chrom1    |
//! | chr2  | chrom2    |
//! | pt    | pair_type |

use crate::core::error::HeaderError;
use crate::core::types::ColumnSpec;

/// Columns written by default into a new pairs header
pub const DEFAULT_COLUMNS: [&str; 8] = [
    "readID",
    "chrom1",
    "pos1",
    "chrom2",
    "pos2",
    "strand1",
    "strand2",
    "pair_type",
];

/// Known aliases and the canonical column names they stand for
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("chr1", "chrom1"),
    ("chr2", "chrom2"),
    ("pt", "pair_type"),
    ("str1", "strand1"),
    ("str2", "strand2"),
    ("mq1", "mapq1"),
    ("mq2", "mapq2"),
    ("read_id", "readID"),
];

/// Map an alias onto its canonical column name; other names pass through.
///
/// # Examples
///
/// ```
/// use pairs_header::core::columns::standardize_column;
///
/// assert_eq!(standardize_column("chr1"), "chrom1");
/// assert_eq!(standardize_column("pos1"), "pos1");
/// ```
#[must_use]
pub fn standardize_column(name: &str) -> &str {
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical)
}

/// Resolve a column spec to a non-negative position within `columns`.
///
/// Names are matched exactly first, then via their standardized form. The
/// column list itself is never standardized, so callers wanting alias-tolerant
/// lookups should pass a list that already uses canonical names.
///
/// # Errors
///
/// Returns `HeaderError::IndexOutOfRange` for positions outside
/// `-len..len` and `HeaderError::ColumnNotFound` for unknown names.
pub fn get_column_index<S: AsRef<str>>(
    columns: &[S],
    spec: impl Into<ColumnSpec>,
) -> Result<usize, HeaderError> {
    match spec.into() {
        ColumnSpec::Index(index) => resolve_position(columns.len(), index),
        ColumnSpec::Name(name) => find_column(columns, &name)
            .or_else(|| find_column(columns, standardize_column(&name)))
            .ok_or(HeaderError::ColumnNotFound(name)),
    }
}

fn find_column<S: AsRef<str>>(columns: &[S], name: &str) -> Option<usize> {
    columns.iter().position(|c| c.as_ref() == name)
}

fn resolve_position(len: usize, index: i64) -> Result<usize, HeaderError> {
    let out_of_range = || HeaderError::IndexOutOfRange { index, len };
    let signed_len = i64::try_from(len).map_err(|_| out_of_range())?;

    let resolved = if index < 0 { index + signed_len } else { index };
    if (0..signed_len).contains(&resolved) {
        usize::try_from(resolved).map_err(|_| out_of_range())
    } else {
        Err(out_of_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_columns() -> Vec<&'static str> {
        vec![
            "readID",
            "chr1",
            "pos1",
            "chr2",
            "pos2",
            "strand1",
            "strand2",
            "pair_type",
        ]
    }

    #[test]
    fn test_standardize_column() {
        assert_eq!(standardize_column("chr1"), "chrom1");
        assert_eq!(standardize_column("chr2"), "chrom2");
        assert_eq!(standardize_column("pt"), "pair_type");

        assert_eq!(standardize_column("chrom1"), "chrom1");
        assert_eq!(standardize_column("readID"), "readID");
        assert_eq!(standardize_column("unknown"), "unknown");
    }

    #[test]
    fn test_every_alias_maps_to_canonical() {
        for (alias, canonical) in COLUMN_ALIASES {
            assert_eq!(standardize_column(alias), *canonical);
            // Canonical names are fixed points
            assert_eq!(standardize_column(canonical), *canonical);
        }
    }

    #[test]
    fn test_get_column_index_by_name() {
        let columns = raw_columns();
        assert_eq!(get_column_index(&columns, "chr1").unwrap(), 1);
        assert_eq!(get_column_index(&columns, "pos2").unwrap(), 4);
        assert_eq!(get_column_index(&columns, "pair_type").unwrap(), 7);
    }

    #[test]
    fn test_get_column_index_does_not_standardize_columns() {
        // "chrom1" is canonical but the list only has the alias
        let columns = raw_columns();
        assert_eq!(
            get_column_index(&columns, "chrom1"),
            Err(HeaderError::ColumnNotFound("chrom1".to_string()))
        );
    }

    #[test]
    fn test_get_column_index_via_alias() {
        let columns: Vec<&str> = raw_columns()
            .into_iter()
            .map(standardize_column)
            .collect();
        assert_eq!(get_column_index(&columns, "chrom1").unwrap(), 1);
        assert_eq!(get_column_index(&columns, "chr1").unwrap(), 1);
        assert_eq!(get_column_index(&columns, "pt").unwrap(), 7);
        assert_eq!(get_column_index(&columns, "pair_type").unwrap(), 7);
    }

    #[test]
    fn test_get_column_index_by_position() {
        let columns = raw_columns();
        assert_eq!(get_column_index(&columns, 0).unwrap(), 0);
        assert_eq!(get_column_index(&columns, 3).unwrap(), 3);
        assert_eq!(get_column_index(&columns, 7).unwrap(), 7);
    }

    #[test]
    fn test_get_column_index_negative() {
        assert_eq!(get_column_index(&["a", "b", "c"], -1).unwrap(), 2);
        assert_eq!(get_column_index(&["a", "b", "c"], -3).unwrap(), 0);

        let columns = raw_columns();
        let len = i64::try_from(columns.len()).unwrap();
        for i in -len..len {
            let expected = if i < 0 { i + len } else { i };
            assert_eq!(
                get_column_index(&columns, i).unwrap(),
                usize::try_from(expected).unwrap()
            );
        }
    }

    #[test]
    fn test_get_column_index_out_of_range() {
        let columns = raw_columns();
        let err = get_column_index(&columns, 100).unwrap_err();
        assert_eq!(err, HeaderError::IndexOutOfRange { index: 100, len: 8 });
        assert!(err.to_string().contains("Column index 100 out of range"));

        assert!(get_column_index(&columns, 8).is_err());
        assert!(get_column_index(&columns, -9).is_err());
    }

    #[test]
    fn test_get_column_index_not_found() {
        let err = get_column_index(&raw_columns(), "nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "Column 'nonexistent' not found");
    }

    #[test]
    fn test_get_column_index_empty_columns() {
        let empty: Vec<String> = Vec::new();
        assert!(get_column_index(&empty, "chrom1").is_err());
        assert!(get_column_index(&empty, 0).is_err());
        assert!(get_column_index(&empty, -1).is_err());
    }

    #[test]
    fn test_get_column_index_invalid_spec() {
        let spec = ColumnSpec::try_from(&serde_json::json!(2.5));
        assert!(matches!(spec, Err(HeaderError::InvalidColumnSpec(_))));
    }
}
