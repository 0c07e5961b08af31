use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::core::error::HeaderError;
use crate::core::samheader::{get_tag, rewrite_tags, SamLineKind};

/// Merge several SAM headers into one.
///
/// - `@HD` lines must be identical across inputs.
/// - `@SQ` lines are unioned in first-seen order.
/// - `@PG` lines are kept in input order. When an `ID` occurs in more than one
///   input, every input holding a shared `ID` has all of its `ID` and `PP`
///   values suffixed with its 1-based input position (`bwa` in the second
///   input becomes `bwa-2`), so each input's chain keeps its shape. Inputs
///   without shared IDs are left as they are.
/// - Remaining lines (`@RG`, `@CO`, ...) are unioned in first-seen order.
///
/// # Errors
///
/// Returns `HeaderError::IncompatibleAlignmentHeader` when `@HD` lines
/// differ, or `HeaderError::EmptyMerge` for no input.
pub fn merge_sam_headers<S: AsRef<str>>(sets: &[Vec<S>]) -> Result<Vec<String>, HeaderError> {
    let sets: Vec<Vec<&str>> = sets
        .iter()
        .map(|set| set.iter().map(|s| s.as_ref()).collect())
        .collect();
    let first = sets.first().ok_or(HeaderError::EmptyMerge)?;
    debug!(headers = sets.len(), "Merging SAM headers");

    let expected = lines_of(first, SamLineKind::Metadata);
    for set in &sets[1..] {
        let found = lines_of(set, SamLineKind::Metadata);
        if found != expected {
            return Err(HeaderError::IncompatibleAlignmentHeader {
                expected: describe(&expected),
                found: describe(&found),
            });
        }
    }

    let mut merged: Vec<String> = expected.iter().map(|l| (*l).to_string()).collect();
    merged.extend(merge_sequences(&sets));
    merged.extend(merge_programs(&sets));
    merged.extend(union(
        sets.iter()
            .map(|set| lines_of(set, SamLineKind::Other)),
    ));

    Ok(merged)
}

fn lines_of<'a>(set: &[&'a str], kind: SamLineKind) -> Vec<&'a str> {
    set.iter().copied().filter(|l| SamLineKind::of(l) == kind).collect()
}

fn describe(lines: &[&str]) -> String {
    if lines.is_empty() {
        "(none)".to_string()
    } else {
        lines.join(" | ")
    }
}

/// Exact-text union of line groups, keeping first-seen order
fn union<'a>(groups: impl Iterator<Item = Vec<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for line in groups.flatten() {
        if seen.insert(line) {
            out.push(line.to_string());
        }
    }
    out
}

fn merge_sequences(sets: &[Vec<&str>]) -> Vec<String> {
    let mut lengths: HashMap<&str, &str> = HashMap::new();
    for line in sets.iter().flat_map(|set| lines_of(set, SamLineKind::Sequence)) {
        let Some(name) = get_tag(line, "SN") else {
            continue;
        };
        match lengths.get(name) {
            Some(previous) if *previous != line => {
                warn!(sequence = %name, "Conflicting @SQ lines for the same sequence, keeping both");
            }
            Some(_) => {}
            None => {
                lengths.insert(name, line);
            }
        }
    }

    union(sets.iter().map(|set| lines_of(set, SamLineKind::Sequence)))
}

fn merge_programs(sets: &[Vec<&str>]) -> Vec<String> {
    let ids: Vec<HashSet<&str>> = sets
        .iter()
        .map(|set| {
            lines_of(set, SamLineKind::Program)
                .into_iter()
                .filter_map(|l| get_tag(l, "ID"))
                .collect()
        })
        .collect();

    let mut owners: HashMap<&str, usize> = HashMap::new();
    for set_ids in &ids {
        for id in set_ids {
            *owners.entry(*id).or_default() += 1;
        }
    }

    let mut merged = Vec::new();
    for (i, set) in sets.iter().enumerate() {
        let collides = ids[i].iter().any(|id| owners[id] > 1);
        let suffix = i + 1;
        if collides {
            debug!(header = suffix, "Renaming @PG IDs to avoid collisions");
        }

        for line in lines_of(set, SamLineKind::Program) {
            if collides {
                merged.push(rewrite_tags(line, |tag, value| match tag {
                    "ID" | "PP" => Some(format!("{value}-{suffix}")),
                    _ => None,
                }));
            } else {
                merged.push(line.to_string());
            }
        }
    }
    merged
}
