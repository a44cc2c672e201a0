//! Batch driver for suggestion providers.
//!
//! Calls the provider once per uncovered bin of a report:
//!
//! - at most [`RunnerSettings::workers`] calls are in flight;
//! - results come back in `uncovered_bins` order whatever order the
//!   calls complete in;
//! - every call is bounded by [`RunnerSettings::call_timeout`];
//! - rate-limited calls are retried per [`RetryConfig`];
//! - any other failure skips that bin and the batch carries on;
//! - cancellation stops new calls and abandons in-flight ones, but every
//!   result that had already completed is kept.

use super::cancellation::CancellationToken;
use super::prompt::MAX_CONTEXT_BINS;
use super::{ProviderError, SuggestionDraft, SuggestionProvider};
use crate::config::{CovgapConfig, RetryConfig};
use crate::priority::Suggestion;
use crate::report::{CoverageReport, UncoveredBinRef};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    pub workers: usize,
    pub call_timeout: Duration,
    pub retry: RetryConfig,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self::from_config(&CovgapConfig::default())
    }
}

impl RunnerSettings {
    pub fn from_config(config: &CovgapConfig) -> Self {
        Self {
            workers: config.runner.workers.max(1),
            call_timeout: Duration::from_secs(config.provider.timeout_seconds),
            retry: config.retry.clone(),
        }
    }
}

/// A bin the provider could not produce a suggestion for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBin {
    pub target_bin: String,
    pub reason: String,
    pub attempts: u32,
}

/// Result of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionBatch {
    /// In `uncovered_bins` order, unscored
    pub suggestions: Vec<Suggestion>,
    pub skipped: Vec<SkippedBin>,
    /// True when the run stopped early on cancellation
    pub cancelled: bool,
}

/// Progress notifications from [`SuggestionRunner::run_with_callback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunProgress<'a> {
    Started { total: usize },
    Finished { target: &'a str, done: usize, total: usize },
}

enum Outcome {
    Suggested(Suggestion),
    Skipped(SkippedBin),
    Cancelled,
}

pub struct SuggestionRunner {
    provider: Arc<dyn SuggestionProvider>,
    settings: RunnerSettings,
}

impl SuggestionRunner {
    pub fn new(provider: Arc<dyn SuggestionProvider>, settings: RunnerSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub async fn run(&self, report: &CoverageReport, cancel: &CancellationToken) -> SuggestionBatch {
        self.run_with_callback(report, cancel, |_| {}).await
    }

    pub async fn run_with_callback<F>(
        &self,
        report: &CoverageReport,
        cancel: &CancellationToken,
        mut progress: F,
    ) -> SuggestionBatch
    where
        F: FnMut(RunProgress<'_>),
    {
        let total = report.uncovered_bins.len();
        progress(RunProgress::Started { total });
        info!(
            provider = self.provider.name(),
            bins = total,
            workers = self.settings.workers,
            "Generating suggestions"
        );

        let calls = report
            .uncovered_bins
            .iter()
            .map(|hole| self.process(report, hole, cancel));
        let mut outcomes = pin!(stream::iter(calls).buffered(self.settings.workers.max(1)));

        let mut batch = SuggestionBatch::default();
        let mut done = 0;
        while let Some(outcome) = outcomes.next().await {
            let target = match outcome {
                Outcome::Suggested(s) => {
                    batch.suggestions.push(s);
                    batch.suggestions.last().map(|s| s.target_bin.clone())
                }
                Outcome::Skipped(skip) => {
                    warn!(bin = %skip.target_bin, reason = %skip.reason, "Skipped bin");
                    batch.skipped.push(skip);
                    batch.skipped.last().map(|s| s.target_bin.clone())
                }
                // Later bins may already be finished; keep draining
                Outcome::Cancelled => {
                    batch.cancelled = true;
                    continue;
                }
            };
            done += 1;
            if let Some(target) = target {
                progress(RunProgress::Finished {
                    target: &target,
                    done,
                    total,
                });
            }
        }

        if batch.cancelled {
            warn!(
                collected = batch.suggestions.len(),
                abandoned = total - done,
                "Suggestion run cancelled"
            );
        }
        batch
    }

    async fn process(
        &self,
        report: &CoverageReport,
        hole: &UncoveredBinRef,
        cancel: &CancellationToken,
    ) -> Outcome {
        if cancel.is_cancelled() {
            return Outcome::Cancelled;
        }

        let target = hole.target_id();
        let context = report.covered_context_for(hole, MAX_CONTEXT_BINS);
        info!(bin = %target, "Analyzing");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Outcome::Cancelled,
            result = self.suggest_with_retry(&report.design, &target, &context) => match result {
                Ok(draft) => Outcome::Suggested(draft.into_suggestion(target.clone())),
                Err((error, attempts)) => Outcome::Skipped(SkippedBin {
                    target_bin: target.clone(),
                    reason: error.to_string(),
                    attempts,
                }),
            },
        }
    }

    /// One bin, retrying transient failures. Errors carry the attempt count.
    async fn suggest_with_retry(
        &self,
        design: &str,
        target: &str,
        context: &[String],
    ) -> Result<SuggestionDraft, (ProviderError, u32)> {
        let retry = &self.settings.retry;
        let mut attempt = 1;
        loop {
            match self.call_once(design, target, context).await {
                Ok(draft) => return Ok(draft),
                Err(e) if e.is_transient() && retry.should_retry(attempt) => {
                    let delay = retry.delay_for_attempt(attempt);
                    warn!(
                        bin = target,
                        attempt,
                        delay_secs = delay.as_secs_f64(),
                        "Rate limited, waiting before retry"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err((e, attempt)),
            }
        }
    }

    async fn call_once(
        &self,
        design: &str,
        target: &str,
        context: &[String],
    ) -> Result<SuggestionDraft, ProviderError> {
        let timeout = self.settings.call_timeout;
        tokio::time::timeout(timeout, self.provider.suggest(design, target, context))
            .await
            .unwrap_or(Err(ProviderError::Timeout(timeout)))
    }
}
