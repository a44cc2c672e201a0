//! End-to-end analysis of a parsed report.
//!
//! Gathering suggestions is the only impure stage; scoring and closure
//! estimation are pure functions over its result.

use crate::closure::predict_closure;
use crate::output::AnalysisOutput;
use crate::priority::prioritize;
use crate::report::CoverageReport;
use crate::suggest::{CancellationToken, RunProgress, SuggestionBatch, SuggestionRunner};
use tracing::info;

/// Gather, score and rank suggestions for every hole, then estimate closure.
pub async fn analyze_report<F>(
    report: CoverageReport,
    runner: &SuggestionRunner,
    cancel: &CancellationToken,
    progress: F,
) -> AnalysisOutput
where
    F: FnMut(RunProgress<'_>),
{
    let batch = runner.run_with_callback(&report, cancel, progress).await;
    assemble(report, batch)
}

/// Combine a report with a finished batch.
pub fn assemble(report: CoverageReport, batch: SuggestionBatch) -> AnalysisOutput {
    let closure = predict_closure(&report);
    let suggestions = prioritize(batch.suggestions);
    info!(
        suggestions = suggestions.len(),
        skipped = batch.skipped.len(),
        hours = closure.hours,
        "Analysis complete"
    );

    AnalysisOutput {
        report,
        suggestions,
        skipped: batch.skipped,
        closure,
        cancelled: batch.cancelled,
    }
}
