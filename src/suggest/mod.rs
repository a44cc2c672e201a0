//! Suggestion providers and the runner that drives them.
//!
//! A [`SuggestionProvider`] turns one uncovered bin into a
//! [`SuggestionDraft`]. How the draft text is produced is the provider's
//! business; this crate ships a deterministic [`FixtureProvider`] and a
//! live [`GeminiProvider`], chosen by configuration through
//! [`build_provider`].
//!
//! [`SuggestionRunner`] calls the provider once per uncovered bin with
//! bounded concurrency, a per-call timeout, linear backoff on rate limits
//! and cooperative cancellation. One failing bin never aborts the batch.

pub mod cancellation;
pub mod error;
pub mod fixture;
pub mod gemini;
pub mod prompt;
pub mod reply;
pub mod runner;

pub use cancellation::{CancellationSource, CancellationToken};
pub use error::ProviderError;
pub use fixture::FixtureProvider;
pub use gemini::GeminiProvider;
pub use runner::{RunProgress, RunnerSettings, SkippedBin, SuggestionBatch, SuggestionRunner};

use crate::config::{ProviderConfig, ProviderKind};
use crate::priority::{Difficulty, Priority, Suggestion};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Provider output for a single bin, before it is bound to a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionDraft {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub test_outline: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl SuggestionDraft {
    /// Bind the draft to a target bin as an unscored suggestion.
    pub fn into_suggestion(self, target_bin: impl Into<String>) -> Suggestion {
        Suggestion {
            target_bin: target_bin.into(),
            priority: Priority::Pending,
            difficulty: self.difficulty,
            suggestion: self.suggestion,
            test_outline: self.test_outline,
            dependencies: self.dependencies,
            reasoning: self.reasoning,
            score: None,
        }
    }
}

/// Source of test recommendations for uncovered bins.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Draft a suggestion for `target_bin_id` in `design`.
    ///
    /// `context_bins` are covered bins near the target, most relevant first.
    async fn suggest(
        &self,
        design: &str,
        target_bin_id: &str,
        context_bins: &[String],
    ) -> Result<SuggestionDraft, ProviderError>;
}

/// Construct the provider selected by configuration.
///
/// # Errors
///
/// Fails when the live provider has no API key or its HTTP client cannot
/// be built.
pub fn build_provider(config: &ProviderConfig) -> Result<Arc<dyn SuggestionProvider>, ProviderError> {
    match config.kind {
        ProviderKind::Fixture => Ok(Arc::new(FixtureProvider::new())),
        ProviderKind::Gemini => Ok(Arc::new(GeminiProvider::from_config(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_into_suggestion() {
        let draft = SuggestionDraft {
            difficulty: Difficulty::Hard,
            dependencies: vec!["Memory map".into()],
            suggestion: "Access an unmapped region".into(),
            test_outline: vec!["1. Find unmapped addr".into()],
            reasoning: "DECERR path".into(),
        };

        let s = draft.into_suggestion("cg.cp.decode_error");
        assert_eq!(s.target_bin, "cg.cp.decode_error");
        assert_eq!(s.priority, Priority::Pending);
        assert_eq!(s.difficulty, Difficulty::Hard);
        assert_eq!(s.dependencies, vec!["Memory map"]);
        assert!(s.score.is_none());
    }

    #[test]
    fn test_build_fixture_provider() {
        let provider = build_provider(&ProviderConfig::default()).unwrap();
        assert_eq!(provider.name(), "fixture");
    }

    #[test]
    fn test_build_gemini_without_key_fails() {
        let config = ProviderConfig {
            kind: ProviderKind::Gemini,
            api_key: None,
            ..Default::default()
        };
        let err = build_provider(&config).err().unwrap();
        assert!(matches!(err, ProviderError::MissingCredentials(_)));
    }
}
