//! Read-only queries over a parsed [`CoverageReport`].

use super::types::{CoverageReport, Covergroup, UncoveredBinRef};

impl CoverageReport {
    /// Total number of coverpoint bins across all covergroups.
    pub fn total_bins(&self) -> usize {
        self.covergroups
            .iter()
            .flat_map(|g| &g.coverpoints)
            .map(|p| p.bins.len())
            .sum()
    }

    /// Number of uncovered cross tuples across all cross groups.
    pub fn cross_holes(&self) -> usize {
        self.cross_coverage.iter().map(|c| c.uncovered.len()).sum()
    }

    pub fn find_covergroup(&self, name: &str) -> Option<&Covergroup> {
        self.covergroups.iter().find(|g| g.name == name)
    }

    /// Covered bin labels near an uncovered bin, for provider context.
    ///
    /// Bins from the hole's own coverpoint come first, then the rest of its
    /// covergroup, capped at `limit`.
    pub fn covered_context_for(&self, hole: &UncoveredBinRef, limit: usize) -> Vec<String> {
        let Some(group) = self.find_covergroup(&hole.covergroup) else {
            return Vec::new();
        };

        let (same_point, others): (Vec<_>, Vec<_>) = group
            .coverpoints
            .iter()
            .partition(|p| p.name == hole.coverpoint);

        same_point
            .into_iter()
            .chain(others)
            .flat_map(|p| p.bins.iter().filter(|b| b.covered).map(|b| b.label()))
            .take(limit)
            .collect()
    }
}
