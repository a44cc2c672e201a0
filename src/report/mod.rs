//! Functional-coverage report parsing.
//!
//! Converts the line-oriented text report produced by verification tools
//! into a [`CoverageReport`]. Parsing is permissive by design of the
//! input: vendors vary their formatting, so unknown lines are skipped and
//! missing values default instead of failing.
//!
//! # Module Structure
//!
//! - [`types`] - Report data structures (pure data)
//! - [`classify`] - Tagged-line classifier (pure functions)
//! - [`cursor`] - Line cursor with one-line lookahead
//! - [`handlers`] - State transitions per line kind (pure)
//! - [`parser`] - The parse loop and file entry point
//! - [`query`] - Read-only queries over parsed reports
//!
//! ```text
//!        types.rs
//!           ↑
//!   ┌───────┼──────────┐
//! classify.rs  cursor.rs  handlers.rs
//!   └───────┼──────────┘
//!        parser.rs
//! ```
//!
//! # Quick Start
//!
//! ```
//! use covgap::report::parse_report;
//!
//! let text = "Design: dma\nCovergroup: cg\nCoverage: 50.00%\nCoverpoint: cp\nbin a\nhits: 3\nbin b\nhits: 0";
//! let report = parse_report(text);
//!
//! assert_eq!(report.covergroups[0].coverage, 50.0);
//! assert_eq!(report.uncovered_bins[0].target_id(), "cg.cp.b");
//! ```

pub mod classify;
pub mod cursor;
pub(crate) mod handlers;
pub mod parser;
pub mod query;
pub mod types;

pub use classify::{classify, parse_hits, ParseContext, ReportLine};
pub use cursor::LineCursor;
pub use parser::{parse_report, parse_report_file};
pub use types::{
    Bin, CoverageReport, Covergroup, Coverpoint, CrossCoverageGroup, UncoveredBinRef,
    UNKNOWN_DESIGN,
};
