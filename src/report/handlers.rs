//! Pure handler functions for classified report lines.
//!
//! Each handler applies one [`ReportLine`](super::classify::ReportLine)
//! kind to the parser state. Handlers do no I/O and never fail; the
//! parser loop in [`parser`](super::parser) only dispatches to them.
//!
//! Open sections are tracked as indices into the report being built, so
//! the report owns all of its nested records while parsing.

use super::classify::ParseContext;
use super::types::{Bin, CoverageReport, Covergroup, Coverpoint, CrossCoverageGroup, UncoveredBinRef};

/// Mutable state while parsing one report.
#[derive(Debug, Default)]
pub(crate) struct ReportParserState {
    /// The report being built
    pub report: CoverageReport,
    /// Index into `report.covergroups`
    pub current_covergroup: Option<usize>,
    /// Index into the current covergroup's coverpoints
    pub current_coverpoint: Option<usize>,
    /// Index into `report.cross_coverage`
    pub current_cross: Option<usize>,
}

impl ReportParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the open sections, for the classifier.
    pub fn context(&self) -> ParseContext {
        ParseContext {
            covergroup_open: self.current_covergroup.is_some(),
            coverpoint_open: self.current_coverpoint.is_some(),
            cross_open: self.current_cross.is_some(),
        }
    }

    fn covergroup_mut(&mut self) -> Option<&mut Covergroup> {
        self.current_covergroup
            .and_then(|idx| self.report.covergroups.get_mut(idx))
    }

    fn cross_mut(&mut self) -> Option<&mut CrossCoverageGroup> {
        self.current_cross
            .and_then(|idx| self.report.cross_coverage.get_mut(idx))
    }
}

pub(crate) fn handle_design(state: &mut ReportParserState, name: &str) {
    state.report.design = name.to_string();
}

pub(crate) fn handle_overall_coverage(state: &mut ReportParserState, pct: f64) {
    state.report.overall_coverage = pct;
}

/// Open a covergroup and close any coverpoint or cross group.
pub(crate) fn handle_covergroup(state: &mut ReportParserState, name: &str) {
    state.report.covergroups.push(Covergroup::new(name));
    state.current_covergroup = Some(state.report.covergroups.len() - 1);
    state.current_coverpoint = None;
    state.current_cross = None;
}

/// Apply a `Coverage:` percentage to the innermost open section.
///
/// An active cross group takes the value; otherwise the covergroup does.
pub(crate) fn handle_coverage(state: &mut ReportParserState, pct: f64) {
    if let Some(cross) = state.cross_mut() {
        cross.coverage = pct;
    } else if let Some(group) = state.covergroup_mut() {
        group.coverage = pct;
    }
}

/// Open a coverpoint in the current covergroup; closes the cross group.
pub(crate) fn handle_coverpoint(state: &mut ReportParserState, name: &str) {
    let Some(group) = state.covergroup_mut() else {
        return;
    };
    group.coverpoints.push(Coverpoint::new(name));
    let idx = group.coverpoints.len() - 1;
    state.current_coverpoint = Some(idx);
    state.current_cross = None;
}

/// Open a top-level cross group; closes the coverpoint.
pub(crate) fn handle_cross_coverage(state: &mut ReportParserState, name: &str) {
    if state.current_covergroup.is_none() {
        return;
    }
    state
        .report
        .cross_coverage
        .push(CrossCoverageGroup::new(name));
    state.current_cross = Some(state.report.cross_coverage.len() - 1);
    state.current_coverpoint = None;
}

/// Append a bin to the current coverpoint.
///
/// `hits` is whatever the lookahead line yielded; `None` leaves the bin
/// uncovered. Uncovered bins are also recorded in `uncovered_bins`.
pub(crate) fn handle_bin(
    state: &mut ReportParserState,
    name: &str,
    range: &str,
    hits: Option<u64>,
) {
    let (Some(cg_idx), Some(cp_idx)) = (state.current_covergroup, state.current_coverpoint) else {
        return;
    };
    let Some(group) = state.report.covergroups.get_mut(cg_idx) else {
        return;
    };
    let Some(point) = group.coverpoints.get_mut(cp_idx) else {
        return;
    };

    let bin = Bin::new(name, range).with_hits(hits.unwrap_or(0));
    let uncovered = (!bin.covered).then(|| UncoveredBinRef {
        covergroup: group.name.clone(),
        coverpoint: point.name.clone(),
        bin: bin.label(),
    });
    point.bins.push(bin);

    if let Some(hole) = uncovered {
        state.report.uncovered_bins.push(hole);
    }
}

/// Record a cross tuple; only uncovered tuples are kept.
pub(crate) fn handle_cross_tuple(state: &mut ReportParserState, label: &str, hits: Option<u64>) {
    let covered = hits.is_some_and(|h| h > 0);
    if covered {
        return;
    }
    if let Some(cross) = state.cross_mut() {
        cross.uncovered.push(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_coverpoint() -> ReportParserState {
        let mut state = ReportParserState::new();
        handle_covergroup(&mut state, "cg");
        handle_coverpoint(&mut state, "cp");
        state
    }

    #[test]
    fn test_covergroup_resets_nested_context() {
        let mut state = state_with_coverpoint();
        handle_covergroup(&mut state, "cg2");
        assert_eq!(state.current_covergroup, Some(1));
        assert_eq!(state.current_coverpoint, None);
        assert_eq!(state.current_cross, None);
    }

    #[test]
    fn test_coverpoint_and_cross_are_exclusive() {
        let mut state = state_with_coverpoint();
        handle_cross_coverage(&mut state, "x");
        assert_eq!(state.current_coverpoint, None);
        assert_eq!(state.current_cross, Some(0));

        handle_coverpoint(&mut state, "cp2");
        assert_eq!(state.current_cross, None);
        assert_eq!(state.current_coverpoint, Some(1));
    }

    #[test]
    fn test_coverage_targets_cross_when_active() {
        let mut state = state_with_coverpoint();
        handle_coverage(&mut state, 40.0);
        handle_cross_coverage(&mut state, "x");
        handle_coverage(&mut state, 50.0);

        assert_eq!(state.report.covergroups[0].coverage, 40.0);
        assert_eq!(state.report.cross_coverage[0].coverage, 50.0);
    }

    #[test]
    fn test_coverage_without_covergroup_is_ignored() {
        let mut state = ReportParserState::new();
        handle_coverage(&mut state, 10.0);
        assert!(state.report.covergroups.is_empty());
    }

    #[test]
    fn test_handle_bin_records_uncovered() {
        let mut state = state_with_coverpoint();
        handle_bin(&mut state, "small", "[0:255]", Some(3));
        handle_bin(&mut state, "max", "[4096]", Some(0));
        handle_bin(&mut state, "none", "", None);

        let bins = &state.report.covergroups[0].coverpoints[0].bins;
        assert_eq!(bins.len(), 3);
        assert!(bins[0].covered);
        assert!(!bins[1].covered);
        assert_eq!(bins[2].hits, 0);

        let holes: Vec<_> = state.report.uncovered_bins.iter().map(|h| h.bin.as_str()).collect();
        assert_eq!(holes, vec!["max[4096]", "none"]);
        assert_eq!(state.report.uncovered_bins[0].covergroup, "cg");
        assert_eq!(state.report.uncovered_bins[0].coverpoint, "cp");
    }

    #[test]
    fn test_cross_tuple_stays_out_of_uncovered_bins() {
        let mut state = state_with_coverpoint();
        handle_cross_coverage(&mut state, "x");
        handle_cross_tuple(&mut state, "<a, b>", Some(0));
        handle_cross_tuple(&mut state, "<a, c>", Some(5));
        handle_cross_tuple(&mut state, "<a, d>", None);

        assert_eq!(state.report.cross_coverage[0].uncovered, vec!["<a, b>", "<a, d>"]);
        assert!(state.report.uncovered_bins.is_empty());
    }
}
