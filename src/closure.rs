//! Coverage-closure effort estimation.
//!
//! A coarse model: every uncovered bin costs one unit, every uncovered
//! cross tuple costs two, and a unit is half a day of engineering.

use crate::report::CoverageReport;
use serde::{Deserialize, Serialize};

/// Hours of effort per complexity unit.
pub const HOURS_PER_UNIT: f64 = 4.0;
/// Working hours per day.
pub const HOURS_PER_DAY: f64 = 8.0;
/// Cross-coverage holes count this many times a plain bin.
pub const CROSS_HOLE_WEIGHT: usize = 2;
/// Below this many hours closure is considered certain.
pub const CONFIDENT_HOURS: f64 = 40.0;

/// Closure probability when the estimate is under [`CONFIDENT_HOURS`].
pub const HIGH_PROBABILITY: f64 = 100.0;
/// Closure probability otherwise.
pub const REDUCED_PROBABILITY: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosureEstimate {
    pub days: f64,
    pub hours: f64,
    pub probability_pct: f64,
    /// Uncovered coverpoint bins
    pub blocking_bins: usize,
    /// Uncovered cross-coverage tuples
    pub cross_holes: usize,
}

impl ClosureEstimate {
    /// Weighted hole count the estimate is derived from.
    pub fn total_complexity(&self) -> usize {
        self.blocking_bins + CROSS_HOLE_WEIGHT * self.cross_holes
    }
}

/// Estimate the effort to close every hole in the report.
pub fn predict_closure(report: &CoverageReport) -> ClosureEstimate {
    estimate(report.uncovered_bins.len(), report.cross_holes())
}

/// Estimate from raw hole counts.
pub fn estimate(blocking_bins: usize, cross_holes: usize) -> ClosureEstimate {
    let total_complexity = blocking_bins + CROSS_HOLE_WEIGHT * cross_holes;
    let hours = total_complexity as f64 * HOURS_PER_UNIT;
    let days = hours / HOURS_PER_DAY;
    let probability_pct = if hours < CONFIDENT_HOURS {
        HIGH_PROBABILITY
    } else {
        REDUCED_PROBABILITY
    };

    ClosureEstimate {
        days,
        hours,
        probability_pct,
        blocking_bins,
        cross_holes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;

    #[test]
    fn test_three_bins_one_cross_hole() {
        let est = estimate(3, 1);
        assert_eq!(est.total_complexity(), 5);
        assert_eq!(est.hours, 20.0);
        assert_eq!(est.days, 2.5);
        assert_eq!(est.probability_pct, 100.0);
    }

    #[test]
    fn test_probability_threshold_is_exclusive() {
        // 9 units = 36h, 10 units = 40h
        assert_eq!(estimate(9, 0).probability_pct, 100.0);
        assert_eq!(estimate(10, 0).probability_pct, 60.0);
        assert_eq!(estimate(0, 5).probability_pct, 60.0);
    }

    #[test]
    fn test_empty_report() {
        let est = predict_closure(&CoverageReport::default());
        assert_eq!(est.hours, 0.0);
        assert_eq!(est.days, 0.0);
        assert_eq!(est.probability_pct, 100.0);
        assert_eq!(est.blocking_bins, 0);
        assert_eq!(est.cross_holes, 0);
    }

    #[test]
    fn test_predict_from_parsed_report() {
        let report = parse_report(
            "Covergroup: cg\nCoverpoint: cp\nbin a\nhits: 0\nbin b\nhits: 0\n\
             Cross Coverage: x\n<a, b>\nhits: 0\n<a, c>\nhits: 0",
        );
        let est = predict_closure(&report);
        assert_eq!(est.blocking_bins, 2);
        assert_eq!(est.cross_holes, 2);
        assert_eq!(est.hours, 24.0);
        assert_eq!(est.days, 3.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(estimate(1, 0)).unwrap();
        for key in ["days", "hours", "probability_pct", "blocking_bins", "cross_holes"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
