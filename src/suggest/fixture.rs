//! Deterministic provider with canned drafts.
//!
//! Used for demos, tests and offline runs. Known targets from the DMA
//! controller sample get hand-written drafts; everything else gets a
//! generic medium-difficulty draft.

use super::{ProviderError, SuggestionDraft, SuggestionProvider};
use crate::priority::Difficulty;
use async_trait::async_trait;
use std::collections::HashMap;

pub const FIXTURE_REASONING: &str = "Mocked reasoning for demo purposes.";

#[derive(Debug, Clone)]
pub struct FixtureProvider {
    drafts: HashMap<String, SuggestionDraft>,
    fallback: SuggestionDraft,
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureProvider {
    /// Provider preloaded with the DMA controller drafts.
    pub fn new() -> Self {
        let mut provider = Self::empty();
        for (target, draft) in dma_controller_drafts() {
            provider.drafts.insert(target.to_string(), draft);
        }
        provider
    }

    /// Provider that answers every target with the generic draft.
    pub fn empty() -> Self {
        Self {
            drafts: HashMap::new(),
            fallback: draft(
                Difficulty::Medium,
                &[],
                "Generic test suggestion for this bin.",
                &["1. Setup", "2. Run", "3. Verify"],
            ),
        }
    }

    pub fn with_draft(mut self, target: impl Into<String>, draft: SuggestionDraft) -> Self {
        self.drafts.insert(target.into(), draft);
        self
    }

    /// The draft returned for `target`.
    pub fn draft_for(&self, target: &str) -> SuggestionDraft {
        self.drafts
            .get(target)
            .unwrap_or(&self.fallback)
            .clone()
    }
}

#[async_trait]
impl SuggestionProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn suggest(
        &self,
        _design: &str,
        target_bin_id: &str,
        _context_bins: &[String],
    ) -> Result<SuggestionDraft, ProviderError> {
        Ok(self.draft_for(target_bin_id))
    }
}

fn draft(difficulty: Difficulty, deps: &[&str], suggestion: &str, outline: &[&str]) -> SuggestionDraft {
    SuggestionDraft {
        difficulty,
        dependencies: deps.iter().map(|s| s.to_string()).collect(),
        suggestion: suggestion.to_string(),
        test_outline: outline.iter().map(|s| s.to_string()).collect(),
        reasoning: FIXTURE_REASONING.to_string(),
    }
}

fn dma_controller_drafts() -> Vec<(&'static str, SuggestionDraft)> {
    vec![
        (
            "cg_transfer_size.cp_size.max[4096]",
            draft(
                Difficulty::Easy,
                &["Buffer size > 4KB"],
                "Configure DMA transfer size to exactly 4096 bytes. Ensure source/dest buffers are large enough.",
                &["1. Alloc 5KB src/dst buffers", "2. Set transfer_size=4096", "3. Start DMA", "4. Check EOT"],
            ),
        ),
        (
            "cg_transfer_size.cp_burst_type.wrap",
            draft(
                Difficulty::Medium,
                &["AXI Slave support"],
                "Configure DMA for WRAP burst type. Align address to wrap boundary.",
                &["1. Set burst_type=WRAP", "2. Set addr=0x1FFC", "3. Set len=4", "4. Verify address wraps to 0x1000"],
            ),
        ),
        (
            "cg_channel_arbitration.cp_active_channels.three_channels",
            draft(
                Difficulty::Medium,
                &[],
                "Activate exactly 3 channels simultaneously with different priorities.",
                &["1. Config Ch0, Ch1, Ch2", "2. Enable all 3", "3. Verify concurrent operation"],
            ),
        ),
        (
            "cg_channel_arbitration.cp_error_type.decode_error",
            draft(
                Difficulty::Hard,
                &["Memory Map knowledge"],
                "Program DMA to access an unmapped memory region to trigger DECERR.",
                &["1. Find unmapped addr", "2. Set DMA src=unmapped", "3. Check error status reg"],
            ),
        ),
    ]
}
