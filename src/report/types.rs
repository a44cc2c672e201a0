//! Core data types for parsed functional-coverage reports.
//!
//! All types here are plain data with serde support. The JSON shape
//! (field names and nesting) is consumed by downstream tooling and must
//! stay stable.
//!
//! # Types
//!
//! - [`CoverageReport`] - The whole parsed report
//! - [`Covergroup`] - A named group of coverpoints
//! - [`Coverpoint`] - A sampled expression partitioned into bins
//! - [`Bin`] - One partition with its hit count
//! - [`CrossCoverageGroup`] - Cross coverage with its uncovered tuples
//! - [`UncoveredBinRef`] - Pointer to an uncovered bin

use serde::{Deserialize, Serialize};
use std::fmt;

/// Design name used when the report carries no `Design:` line.
pub const UNKNOWN_DESIGN: &str = "unknown";

/// Parsed functional-coverage report.
///
/// `uncovered_bins` lists exactly the bins under `covergroups` whose
/// `covered` flag is false, in the order they were encountered. Uncovered
/// cross tuples live on their [`CrossCoverageGroup`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub design: String,
    pub overall_coverage: f64,
    pub covergroups: Vec<Covergroup>,
    pub uncovered_bins: Vec<UncoveredBinRef>,
    pub cross_coverage: Vec<CrossCoverageGroup>,
}

impl Default for CoverageReport {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageReport {
    /// Create an empty report with default field values.
    pub fn new() -> Self {
        Self {
            design: UNKNOWN_DESIGN.to_string(),
            overall_coverage: 0.0,
            covergroups: Vec::new(),
            uncovered_bins: Vec::new(),
            cross_coverage: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Covergroup {
    pub name: String,
    pub coverage: f64,
    pub coverpoints: Vec<Coverpoint>,
}

impl Covergroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coverage: 0.0,
            coverpoints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverpoint {
    pub name: String,
    pub bins: Vec<Bin>,
}

impl Coverpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bins: Vec::new(),
        }
    }
}

/// A single coverpoint bin.
///
/// `covered` is always `hits > 0`; construct through [`Bin::new`] and
/// [`Bin::with_hits`] to keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    pub name: String,
    /// Bracketed value range such as `[0:255]`, or empty.
    pub range: String,
    pub hits: u64,
    pub covered: bool,
}

impl Bin {
    /// Create a bin with no recorded hits.
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
            hits: 0,
            covered: false,
        }
    }

    /// Record the hit count read for this bin.
    pub fn with_hits(mut self, hits: u64) -> Self {
        self.hits = hits;
        self.covered = hits > 0;
        self
    }

    /// Name and range concatenated with no separator, e.g. `max[4096]`.
    pub fn label(&self) -> String {
        format!("{}{}", self.name, self.range)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCoverageGroup {
    pub name: String,
    pub coverage: f64,
    /// Uncovered tuple labels including the angle brackets, e.g. `<small, wrap>`.
    pub uncovered: Vec<String>,
}

impl CrossCoverageGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coverage: 0.0,
            uncovered: Vec::new(),
        }
    }
}

/// Reference to an uncovered coverpoint bin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UncoveredBinRef {
    pub covergroup: String,
    pub coverpoint: String,
    /// Bin label (name followed by range).
    pub bin: String,
}

impl UncoveredBinRef {
    /// Dotted identifier handed to suggestion providers:
    /// `covergroup.coverpoint.bin`.
    pub fn target_id(&self) -> String {
        format!("{}.{}.{}", self.covergroup, self.coverpoint, self.bin)
    }
}

impl fmt::Display for UncoveredBinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.covergroup, self.coverpoint, self.bin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let report = CoverageReport::default();
        assert_eq!(report.design, "unknown");
        assert_eq!(report.overall_coverage, 0.0);
        assert!(report.covergroups.is_empty());
        assert!(report.uncovered_bins.is_empty());
        assert!(report.cross_coverage.is_empty());
    }

    #[test]
    fn test_bin_with_hits_tracks_covered() {
        let bin = Bin::new("small", "[0:255]");
        assert!(!bin.covered);

        let hit = bin.clone().with_hits(7);
        assert_eq!(hit.hits, 7);
        assert!(hit.covered);

        let zero = bin.with_hits(0);
        assert!(!zero.covered);
    }

    #[test]
    fn test_bin_label_concatenates_without_separator() {
        assert_eq!(Bin::new("max", "[4096]").label(), "max[4096]");
        assert_eq!(Bin::new("wrap", "").label(), "wrap");
    }

    #[test]
    fn test_target_id_is_dotted() {
        let hole = UncoveredBinRef {
            covergroup: "cg_transfer_size".into(),
            coverpoint: "cp_size".into(),
            bin: "max[4096]".into(),
        };
        assert_eq!(hole.target_id(), "cg_transfer_size.cp_size.max[4096]");
        assert_eq!(hole.to_string(), hole.target_id());
    }

    #[test]
    fn test_json_field_names() {
        let report = CoverageReport {
            design: "dma".into(),
            overall_coverage: 50.0,
            covergroups: vec![Covergroup {
                name: "cg".into(),
                coverage: 25.0,
                coverpoints: vec![Coverpoint {
                    name: "cp".into(),
                    bins: vec![Bin::new("b", "")],
                }],
            }],
            uncovered_bins: vec![UncoveredBinRef {
                covergroup: "cg".into(),
                coverpoint: "cp".into(),
                bin: "b".into(),
            }],
            cross_coverage: vec![CrossCoverageGroup::new("x")],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["design"], "dma");
        assert_eq!(value["covergroups"][0]["coverpoints"][0]["bins"][0]["range"], "");
        assert_eq!(value["covergroups"][0]["coverpoints"][0]["bins"][0]["covered"], false);
        assert_eq!(value["uncovered_bins"][0]["bin"], "b");
        assert_eq!(value["cross_coverage"][0]["uncovered"], serde_json::json!([]));
    }
}
