//! Editing the SAM header embedded in a pairs header.
//!
//! SAM headers are stored inside pairs headers as `#samheader: ` lines. Every
//! tool that touches a pairs file appends an `@PG` record whose `PP` tag
//! points at the previous program, forming a provenance chain:
//!
//! ```text
//! #samheader: @PG  ID:bwa         PN:bwa
//! #samheader: @PG  ID:pairtools   PN:pairtools  PP:bwa
//! ```
//!
//! The chain is rebuilt from the flat line list on every call; no graph
//! outlives a single operation.

use std::collections::HashSet;

use tracing::debug;

use crate::core::header::{to_samheader_line, HeaderLine, PairsHeader, SAMHEADER_PREFIX};
use crate::core::samheader::{ProgramRecord, SamLineKind};

/// Insert SAM header lines into a pairs header.
///
/// Each SAM line is wrapped as `#samheader: <line>`. The wrapped lines go
/// directly before the `#columns:` line so that the column declaration stays
/// last; without a columns line they are appended. Existing lines keep their
/// order.
#[must_use]
pub fn insert_samheader<S: AsRef<str>>(header: &PairsHeader, sam_lines: &[S]) -> PairsHeader {
    let wrapped = sam_lines.iter().map(|l| to_samheader_line(l.as_ref()));
    let position = columns_position(header).unwrap_or(header.len());
    insert_at(header, position, wrapped)
}

/// The `@PG` record that ends the chain, if any program records exist.
///
/// A tip is a record whose `ID` no other record names as its `PP`. With
/// exactly one tip that record is returned. With several tips (disconnected
/// chains) the last one in line order wins; with none (a cycle) the last
/// record in line order is used.
#[must_use]
pub fn find_chain_tip(records: &[ProgramRecord]) -> Option<&ProgramRecord> {
    let referenced: HashSet<&str> = records
        .iter()
        .filter_map(|r| r.previous.as_deref())
        .collect();

    let tips: Vec<&ProgramRecord> = records
        .iter()
        .filter(|r| !referenced.contains(r.id.as_str()))
        .collect();

    if tips.len() > 1 {
        debug!(tips = tips.len(), "Multiple @PG chain tips, using the last one");
    }

    tips.last().copied().or_else(|| records.last())
}

/// Append a new `@PG` record to the SAM header embedded in `header`.
///
/// The new record's `PP` is set to the current chain tip (see
/// [`find_chain_tip`]); with no prior records it gets no `PP`. If the `ID` is
/// already taken, `-2`, `-3`, ... is appended until it is unique. The record
/// is placed after the last embedded `@PG` line, or after the last embedded
/// SAM line, or where [`insert_samheader`] would put it.
#[must_use]
pub fn append_program_record(header: &PairsHeader, mut record: ProgramRecord) -> PairsHeader {
    let sam_lines = header.samheader_lines();
    let records: Vec<ProgramRecord> = sam_lines
        .iter()
        .filter_map(|line| ProgramRecord::parse(line))
        .collect();

    record.previous = find_chain_tip(&records).map(|tip| tip.id.clone());
    record.id = unique_id(&record.id, &records);
    debug!(id = %record.id, previous = ?record.previous, "Appending @PG record");

    let position = last_position(header, |sam| SamLineKind::of(sam) == SamLineKind::Program)
        .or_else(|| last_position(header, |_| true))
        .map(|i| i + 1)
        .or_else(|| columns_position(header))
        .unwrap_or(header.len());

    insert_at(header, position, std::iter::once(to_samheader_line(&record.to_line())))
}

fn unique_id(id: &str, records: &[ProgramRecord]) -> String {
    let taken: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let mut candidate = id.to_string();
    let mut n = 1;
    while taken.contains(candidate.as_str()) {
        n += 1;
        candidate = format!("{id}-{n}");
    }
    candidate
}

fn columns_position(header: &PairsHeader) -> Option<usize> {
    header
        .classified()
        .position(|(_, kind)| matches!(kind, HeaderLine::Columns(_)))
}

/// Index of the last embedded SAM line matching `pred`
fn last_position(header: &PairsHeader, pred: impl Fn(&str) -> bool) -> Option<usize> {
    header.lines().iter().rposition(|line| {
        line.strip_prefix(SAMHEADER_PREFIX)
            .or_else(|| line.strip_prefix("#samheader:"))
            .is_some_and(&pred)
    })
}

fn insert_at(
    header: &PairsHeader,
    position: usize,
    new_lines: impl Iterator<Item = String>,
) -> PairsHeader {
    let (before, after) = header.lines().split_at(position);
    PairsHeader::new(
        before
            .iter()
            .cloned()
            .chain(new_lines)
            .chain(after.iter().cloned())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::make_standard_pairsheader;
    use crate::core::samheader::get_tag;

    fn samheader() -> Vec<&'static str> {
        vec![
            "@SQ\tSN:chr1\tLN:100",
            "@SQ\tSN:chr2\tLN:100",
            "@SQ\tSN:chr3\tLN:100",
            "@PG\tID:bwa\tPN:bwa\tCL:bwa",
            "@PG\tID:bwa-2\tPN:bwa\tCL:bwa\tPP:bwa",
        ]
    }

    fn records(lines: &[&str]) -> Vec<ProgramRecord> {
        lines.iter().filter_map(|l| ProgramRecord::parse(l)).collect()
    }

    #[test]
    fn test_insert_samheader() {
        let header = make_standard_pairsheader();
        let sam = samheader();
        let with_sam = insert_samheader(&header, &sam);

        assert_eq!(with_sam.len(), header.len() + sam.len());
        for line in &sam {
            assert!(with_sam
                .lines()
                .iter()
                .any(|l| l.starts_with("#samheader") && l.contains(line)));
        }
        for line in header.lines() {
            assert!(with_sam.lines().contains(line));
        }
        // Columns line stays last
        assert!(with_sam.lines().last().unwrap().starts_with("#columns"));
    }

    #[test]
    fn test_insert_samheader_without_columns() {
        let header = PairsHeader::from(vec!["## pairs format v1.0", "#a"]);
        let with_sam = insert_samheader(&header, &["@HD\tVN:1.6"]);
        assert_eq!(
            with_sam.lines(),
            &["## pairs format v1.0", "#a", "#samheader: @HD\tVN:1.6"]
        );
    }

    #[test]
    fn test_find_chain_tip_linear() {
        let recs = records(&samheader());
        assert_eq!(find_chain_tip(&recs).unwrap().id, "bwa-2");
    }

    #[test]
    fn test_find_chain_tip_empty() {
        assert!(find_chain_tip(&[]).is_none());
    }

    #[test]
    fn test_find_chain_tip_multiple_tips() {
        let recs = records(&["@PG\tID:a\tPN:a", "@PG\tID:b\tPN:b"]);
        assert_eq!(find_chain_tip(&recs).unwrap().id, "b");
    }

    #[test]
    fn test_find_chain_tip_cycle() {
        let recs = records(&["@PG\tID:a\tPP:b", "@PG\tID:b\tPP:a"]);
        assert_eq!(find_chain_tip(&recs).unwrap().id, "b");
    }

    #[test]
    fn test_append_program_record() {
        let header = insert_samheader(&make_standard_pairsheader(), &samheader());
        let extended = append_program_record(&header, ProgramRecord::new("test", "test"));

        assert_eq!(extended.len(), header.len() + 1);
        assert!(header.lines().iter().all(|l| extended.lines().contains(l)));

        let new_line = extended
            .lines()
            .iter()
            .find(|l| !header.lines().contains(l))
            .unwrap();
        let sam = new_line.strip_prefix(SAMHEADER_PREFIX).unwrap();
        let pp = get_tag(sam, "PP").unwrap();
        assert_eq!(pp, "bwa-2");

        let needle = format!("\tID:{pp}\t");
        let parents = extended
            .lines()
            .iter()
            .filter(|l| l.starts_with("#samheader") && l.contains(&needle))
            .count();
        assert_eq!(parents, 1);
    }

    #[test]
    fn test_append_program_record_placed_after_last_pg() {
        let header = insert_samheader(&make_standard_pairsheader(), &samheader());
        let extended = append_program_record(&header, ProgramRecord::new("test", "test"));
        let lines = extended.lines();
        let n = lines.len();
        assert_eq!(lines[n - 2], "#samheader: @PG\tID:test\tPN:test\tPP:bwa-2");
        assert!(lines[n - 1].starts_with("#columns"));
    }

    #[test]
    fn test_append_program_record_first_record() {
        let header = make_standard_pairsheader();
        let extended = append_program_record(
            &header,
            ProgramRecord::new("pairtools_parse", "pairtools_parse").with_version("1.1.0"),
        );
        assert_eq!(extended.len(), header.len() + 1);
        let sam = extended.samheader_lines();
        assert_eq!(
            sam,
            vec!["@PG\tID:pairtools_parse\tPN:pairtools_parse\tVN:1.1.0"]
        );
    }

    #[test]
    fn test_append_program_record_unique_id() {
        let header = insert_samheader(&make_standard_pairsheader(), &samheader());
        let extended = append_program_record(&header, ProgramRecord::new("bwa", "bwa"));
        let sam = extended.samheader_lines();
        // "bwa" and "bwa-2" are taken
        assert!(sam.contains(&"@PG\tID:bwa-3\tPN:bwa\tPP:bwa-2"));
    }

    #[test]
    fn test_unique_id() {
        let taken = records(&["@PG\tID:dedup", "@PG\tID:dedup-2", "@PG\tID:sort-3"]);
        assert_eq!(unique_id("parse", &taken), "parse");
        assert_eq!(unique_id("dedup", &taken), "dedup-3");
        assert_eq!(unique_id("sort", &taken), "sort");
        assert_eq!(unique_id("dedup", &[]), "dedup");
    }
}
