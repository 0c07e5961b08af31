use std::collections::HashSet;

use tracing::{debug, warn};

use crate::core::error::HeaderError;
use crate::core::header::PairsHeader;
use crate::core::types::PairsFormatKey;

/// Merge the headers of several pairs files into one.
///
/// - The version line must be identical across inputs, even with `force`.
/// - Lines of each reserved key (`#chromsize:`, `#columns:`, `#shape:`, ...)
///   must agree across inputs as sets, so declaration order does not matter. With `force`, disagreeing keys are unioned in
///   first-seen order instead; `#columns:` keeps the first declaration since a
///   header may carry only one.
/// - Everything else is always unioned: the first header's lines in order,
///   then lines from later headers not yet present. These are placed ahead of
///   the first header's `#columns:` line, which stays last.
///
/// # Errors
///
/// Returns `HeaderError::IncompatibleFormatVersion` when versions differ,
/// `HeaderError::HeaderMergeConflict` when a reserved key differs and `force`
/// is off, or `HeaderError::EmptyMerge` for no input.
pub fn merge_pairs_headers(
    headers: &[PairsHeader],
    force: bool,
) -> Result<PairsHeader, HeaderError> {
    let (first, rest) = headers.split_first().ok_or(HeaderError::EmptyMerge)?;
    if rest.is_empty() {
        return Ok(first.clone());
    }
    debug!(headers = headers.len(), force, "Merging pairs headers");

    let expected = first.version_line();
    for header in rest {
        let found = header.version_line();
        if found != expected {
            return Err(HeaderError::IncompatibleFormatVersion {
                expected: expected.unwrap_or("(none)").to_string(),
                found: found.unwrap_or("(none)").to_string(),
            });
        }
    }

    let mut skipped_columns = false;
    for key in PairsFormatKey::ALL {
        let first_fields: HashSet<&str> = first.fields(key).into_iter().collect();
        if rest
            .iter()
            .all(|h| h.fields(key).into_iter().collect::<HashSet<_>>() == first_fields)
        {
            continue;
        }
        if !force {
            return Err(HeaderError::HeaderMergeConflict {
                category: key.to_string(),
            });
        }
        warn!(category = %key, "Header lines differ between inputs, merging them anyway");
        skipped_columns |= key == PairsFormatKey::Columns;
    }

    let mut seen: HashSet<&str> = first.lines().iter().map(String::as_str).collect();
    let mut has_columns = !first.fields(PairsFormatKey::Columns).is_empty();
    let mut added = Vec::new();
    let mut added_columns = Vec::new();

    for header in rest {
        for (line, kind) in header.classified() {
            if seen.contains(line) {
                continue;
            }
            let is_columns = kind.key() == Some(PairsFormatKey::Columns);
            if is_columns && skipped_columns {
                if has_columns {
                    continue;
                }
                has_columns = true;
            }
            seen.insert(line);
            if is_columns {
                added_columns.push(line.to_string());
            } else {
                added.push(line.to_string());
            }
        }
    }

    // New lines go before the first header's #columns: line so it stays last
    let cut = first
        .classified()
        .position(|(_, kind)| kind.key() == Some(PairsFormatKey::Columns))
        .unwrap_or(first.len());
    let mut merged: Vec<String> = first.lines()[..cut].to_vec();
    merged.extend(added);
    merged.extend_from_slice(&first.lines()[cut..]);
    merged.extend(added_columns);

    Ok(PairsHeader::new(merged))
}
