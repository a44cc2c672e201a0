//! Report parser - the imperative shell around the pure handlers.
//!
//! Walks the text once with a [`LineCursor`], classifies each line under
//! the current [`ParseContext`](super::classify::ParseContext) and hands
//! it to the matching handler. Parsing never fails: anything the
//! classifier does not recognize is skipped.
//!
//! # Hit-count lookahead
//!
//! A bin or cross-tuple declaration takes its hit count from the *next*
//! line. That line is consumed whether or not it carries `hits: N`, so a
//! section header in that position is swallowed and never acts as a
//! header.

use super::classify::{classify, parse_hits, ReportLine};
use super::cursor::LineCursor;
use super::handlers::{
    handle_bin, handle_coverage, handle_covergroup, handle_coverpoint, handle_cross_coverage,
    handle_cross_tuple, handle_design, handle_overall_coverage, ReportParserState,
};
use super::types::CoverageReport;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Parse report text into a [`CoverageReport`].
///
/// ```
/// use covgap::report::parse_report;
///
/// let report = parse_report("Design: fifo\nCovergroup: cg\nCoverpoint: cp\nbin full\nhits: 0");
/// assert_eq!(report.design, "fifo");
/// assert_eq!(report.uncovered_bins.len(), 1);
/// ```
pub fn parse_report(text: &str) -> CoverageReport {
    let mut cursor = LineCursor::new(text);
    let mut state = ReportParserState::new();

    while let Some(line) = cursor.next_line() {
        match classify(line, state.context()) {
            ReportLine::Design(name) => handle_design(&mut state, name),
            ReportLine::OverallCoverage(pct) => handle_overall_coverage(&mut state, pct),
            ReportLine::Covergroup(name) => handle_covergroup(&mut state, name),
            ReportLine::Coverage(pct) => handle_coverage(&mut state, pct),
            ReportLine::Coverpoint(name) => handle_coverpoint(&mut state, name),
            ReportLine::CrossCoverage(name) => handle_cross_coverage(&mut state, name),
            ReportLine::Bin { name, range } => {
                let hits = read_hits(&mut cursor);
                handle_bin(&mut state, name, range, hits);
            }
            ReportLine::CrossTuple { label } => {
                let hits = read_hits(&mut cursor);
                handle_cross_tuple(&mut state, label, hits);
            }
            ReportLine::Unrecognized => {}
        }
    }

    let report = state.report;
    debug!(
        design = %report.design,
        covergroups = report.covergroups.len(),
        uncovered = report.uncovered_bins.len(),
        cross_groups = report.cross_coverage.len(),
        lines = cursor.position(),
        "Parsed coverage report"
    );
    report
}

/// Read and parse a report file.
///
/// # Errors
///
/// Returns an error only if the file cannot be read as UTF-8 text.
pub fn parse_report_file(path: &Path) -> Result<CoverageReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read coverage report: {}", path.display()))?;
    Ok(parse_report(&text))
}

/// Consume exactly one line and extract its hit count.
///
/// Returns `None` at end of input or when the line has no hit count.
fn read_hits(cursor: &mut LineCursor<'_>) -> Option<u64> {
    cursor.next_line().and_then(parse_hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bin_followed_by_zero_hits_is_uncovered() {
        let report = parse_report("Covergroup: cg\nCoverpoint: cp\nbin a\nhits: 0");
        let bin = &report.covergroups[0].coverpoints[0].bins[0];
        assert_eq!(bin.hits, 0);
        assert!(!bin.covered);
        assert_eq!(report.uncovered_bins.len(), 1);
    }

    #[test]
    fn test_bin_followed_by_hits_is_covered() {
        let report = parse_report("Covergroup: cg\nCoverpoint: cp\nbin a\nhits: 7");
        let bin = &report.covergroups[0].coverpoints[0].bins[0];
        assert_eq!(bin.hits, 7);
        assert!(bin.covered);
        assert!(report.uncovered_bins.is_empty());
    }

    #[test]
    fn test_bin_at_end_of_input() {
        let report = parse_report("Covergroup: cg\nCoverpoint: cp\nbin last");
        let bin = &report.covergroups[0].coverpoints[0].bins[0];
        assert_eq!(bin.hits, 0);
        assert!(!bin.covered);
        assert_eq!(report.uncovered_bins[0].bin, "last");
    }

    #[test]
    fn test_lookahead_line_is_consumed_without_match() {
        // `bin b` is eaten as the lookahead line of `bin a`.
        let report = parse_report("Covergroup: cg\nCoverpoint: cp\nbin a\nbin b\nhits: 4");
        let bins = &report.covergroups[0].coverpoints[0].bins;
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].name, "a");
        assert!(!bins[0].covered);
    }

    #[test]
    fn test_lookahead_swallows_section_header() {
        let text = "Covergroup: cg1\nCoverpoint: cp\nbin a\nCovergroup: cg2\nCoverage: 33.33%";
        let report = parse_report(text);

        assert_eq!(report.covergroups.len(), 1);
        assert_eq!(report.covergroups[0].name, "cg1");
        assert_eq!(report.covergroups[0].coverage, 33.33);
    }

    #[test]
    fn test_same_line_hits_are_not_read() {
        // Hit counts come from the following line only.
        let report = parse_report(
            "Covergroup: cg\nCoverpoint: cp\nbin one hits: 5 covered\nbin two hits: 0 UNCOVERED",
        );
        let bins = &report.covergroups[0].coverpoints[0].bins;
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].hits, 0);
        assert!(!bins[0].covered);
    }

    #[test]
    fn test_lines_outside_sections_are_skipped() {
        let report = parse_report("Coverpoint: cp\nbin a\nhits: 0\n<x, y>\nhits: 0");
        assert!(report.covergroups.is_empty());
        assert!(report.uncovered_bins.is_empty());
        assert!(report.cross_coverage.is_empty());
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let report = parse_report("");
        assert_eq!(report, CoverageReport::default());
    }

    #[test]
    fn test_parse_report_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"Design: fifo\nOverall Coverage: 12.5%\n").unwrap();

        let report = parse_report_file(temp.path()).unwrap();
        assert_eq!(report.design, "fifo");
        assert_eq!(report.overall_coverage, 12.5);
    }

    #[test]
    fn test_parse_report_file_missing() {
        let err = parse_report_file(Path::new("/nonexistent/report.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read coverage report"));
    }
}
