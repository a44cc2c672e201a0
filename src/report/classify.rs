//! Tagged-line classifier for the report grammar.
//!
//! Every trimmed line is mapped to exactly one [`ReportLine`] variant. The
//! patterns are tried in a fixed priority order and the first match wins;
//! several variants are only recognized while the matching section is open,
//! which is what [`ParseContext`] carries.
//!
//! Priority order:
//!
//! 1. `Design: <name>`
//! 2. `Overall Coverage: <pct>%`
//! 3. `Covergroup: <name>`
//! 4. `Coverage: <pct>%` (covergroup open)
//! 5. `Coverpoint: <name>` (covergroup open)
//! 6. `Cross Coverage: <name>` (covergroup open)
//! 7. `bin <name> [range]` (coverpoint open)
//! 8. `<tuple>` (cross group open)
//!
//! Patterns are searched anywhere in the line, not anchored.

use once_cell::sync::Lazy;
use regex::Regex;

static DESIGN: Lazy<Regex> = Lazy::new(|| Regex::new(r"Design:\s+(.+)").unwrap());
static OVERALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"Overall Coverage:\s+([\d.]+)%").unwrap());
static COVERGROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"Covergroup:\s+(\w+)").unwrap());
static COVERAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Coverage:\s+([\d.]+)%").unwrap());
static COVERPOINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Coverpoint:\s+(\w+)").unwrap());
static CROSS: Lazy<Regex> = Lazy::new(|| Regex::new(r"Cross Coverage:\s+(\w+)").unwrap());
static BIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"bin\s+(\w+)(?:\s+(\[.*?\]))?").unwrap());
static TUPLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(.+)>").unwrap());
static HITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"hits:\s+(\d+)").unwrap());

/// Which sections are open when a line is classified.
///
/// `coverpoint_open` and `cross_open` are never both true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub covergroup_open: bool,
    pub coverpoint_open: bool,
    pub cross_open: bool,
}

/// One classified report line, borrowing from the input text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportLine<'a> {
    Design(&'a str),
    OverallCoverage(f64),
    Covergroup(&'a str),
    Coverage(f64),
    Coverpoint(&'a str),
    CrossCoverage(&'a str),
    /// Bin declaration; `range` is empty when the line has none.
    Bin { name: &'a str, range: &'a str },
    /// Cross tuple; `label` keeps the angle brackets.
    CrossTuple { label: &'a str },
    Unrecognized,
}

/// Classify a trimmed line under the given context.
pub fn classify(line: &str, ctx: ParseContext) -> ReportLine<'_> {
    if let Some(caps) = DESIGN.captures(line) {
        if let Some(m) = caps.get(1) {
            return ReportLine::Design(m.as_str());
        }
    }

    if let Some(pct) = capture_percentage(&OVERALL, line) {
        return ReportLine::OverallCoverage(pct);
    }

    if let Some(name) = capture_name(&COVERGROUP, line) {
        return ReportLine::Covergroup(name);
    }

    if ctx.covergroup_open {
        if let Some(pct) = capture_percentage(&COVERAGE, line) {
            return ReportLine::Coverage(pct);
        }
        if let Some(name) = capture_name(&COVERPOINT, line) {
            return ReportLine::Coverpoint(name);
        }
        if let Some(name) = capture_name(&CROSS, line) {
            return ReportLine::CrossCoverage(name);
        }
    }

    if ctx.coverpoint_open {
        if let Some(caps) = BIN.captures(line) {
            if let Some(name) = caps.get(1) {
                let range = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                return ReportLine::Bin {
                    name: name.as_str(),
                    range,
                };
            }
        }
    }

    if ctx.cross_open {
        if let Some(m) = TUPLE.find(line) {
            return ReportLine::CrossTuple { label: m.as_str() };
        }
    }

    ReportLine::Unrecognized
}

/// Extract a hit count from anywhere in the line.
///
/// Returns `None` when the line has no `hits: N` token or `N` does not
/// fit in a `u64`.
pub fn parse_hits(line: &str) -> Option<u64> {
    HITS.captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn capture_name<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// A capture like `1.2.3` is not a number; the line then falls through
// to the lower-priority patterns.
fn capture_percentage(re: &Regex, line: &str) -> Option<f64> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: ParseContext = ParseContext {
        covergroup_open: false,
        coverpoint_open: false,
        cross_open: false,
    };
    const IN_GROUP: ParseContext = ParseContext {
        covergroup_open: true,
        coverpoint_open: false,
        cross_open: false,
    };
    const IN_POINT: ParseContext = ParseContext {
        covergroup_open: true,
        coverpoint_open: true,
        cross_open: false,
    };
    const IN_CROSS: ParseContext = ParseContext {
        covergroup_open: true,
        coverpoint_open: false,
        cross_open: true,
    };

    #[test]
    fn test_header_lines_ignore_context() {
        assert_eq!(
            classify("Design: dma_controller", NONE),
            ReportLine::Design("dma_controller")
        );
        assert_eq!(
            classify("Overall Coverage: 54.84%", NONE),
            ReportLine::OverallCoverage(54.84)
        );
        assert_eq!(
            classify("Covergroup: cg_transfer_size", IN_CROSS),
            ReportLine::Covergroup("cg_transfer_size")
        );
    }

    #[test]
    fn test_overall_wins_over_plain_coverage() {
        assert_eq!(
            classify("Overall Coverage: 10.5%", IN_GROUP),
            ReportLine::OverallCoverage(10.5)
        );
    }

    #[test]
    fn test_coverage_requires_open_covergroup() {
        assert_eq!(classify("Coverage: 75.00%", NONE), ReportLine::Unrecognized);
        assert_eq!(
            classify("Coverage: 60.00% (3/5 bins)", IN_GROUP),
            ReportLine::Coverage(60.0)
        );
    }

    #[test]
    fn test_cross_header_is_not_a_coverage_line() {
        assert_eq!(
            classify("Cross Coverage: cross_size_burst", IN_POINT),
            ReportLine::CrossCoverage("cross_size_burst")
        );
    }

    #[test]
    fn test_coverpoint_requires_open_covergroup() {
        assert_eq!(classify("Coverpoint: cp_size", NONE), ReportLine::Unrecognized);
        assert_eq!(
            classify("Coverpoint: cp_size", IN_GROUP),
            ReportLine::Coverpoint("cp_size")
        );
    }

    #[test]
    fn test_bin_with_and_without_range() {
        assert_eq!(
            classify("bin small [0:255]", IN_POINT),
            ReportLine::Bin {
                name: "small",
                range: "[0:255]"
            }
        );
        assert_eq!(
            classify("bin wrap", IN_POINT),
            ReportLine::Bin {
                name: "wrap",
                range: ""
            }
        );
        assert_eq!(
            classify("bin four_channels hits: 0 UNCOVERED", IN_POINT),
            ReportLine::Bin {
                name: "four_channels",
                range: ""
            }
        );
    }

    #[test]
    fn test_bin_requires_open_coverpoint() {
        assert_eq!(classify("bin wrap", IN_GROUP), ReportLine::Unrecognized);
        assert_eq!(classify("bin wrap", IN_CROSS), ReportLine::Unrecognized);
    }

    #[test]
    fn test_coverage_line_beats_bin_line() {
        // Degenerate input satisfying both patterns resolves to the
        // higher-priority coverage kind.
        assert_eq!(
            classify("bin odd Coverage: 12.5%", IN_POINT),
            ReportLine::Coverage(12.5)
        );
    }

    #[test]
    fn test_cross_tuple_keeps_brackets() {
        assert_eq!(
            classify("<small, wrap> hits: 0 UNCOVERED", IN_CROSS),
            ReportLine::CrossTuple {
                label: "<small, wrap>"
            }
        );
        assert_eq!(classify("<small, wrap>", IN_POINT), ReportLine::Unrecognized);
    }

    #[test]
    fn test_malformed_percentage_falls_through() {
        assert_eq!(classify("Coverage: 1.2.3%", IN_GROUP), ReportLine::Unrecognized);
        assert_eq!(classify("Overall Coverage: ..%", NONE), ReportLine::Unrecognized);
    }

    #[test]
    fn test_parse_hits() {
        assert_eq!(parse_hits("hits: 1523"), Some(1523));
        assert_eq!(parse_hits("bin one_channel hits: 5000 covered"), Some(5000));
        assert_eq!(parse_hits("hits: 0"), Some(0));
        assert_eq!(parse_hits("covered"), None);
        assert_eq!(parse_hits("hits:"), None);
        assert_eq!(parse_hits("hits: 99999999999999999999999"), None);
    }
}
