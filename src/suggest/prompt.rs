//! Prompt construction for model-backed providers.

/// Covered bins quoted in the prompt, at most.
pub const MAX_CONTEXT_BINS: usize = 5;

/// Build the request prompt for one coverage hole.
///
/// The reply contract asks for a bare JSON object with the
/// [`SuggestionDraft`](super::SuggestionDraft) fields.
pub fn build_prompt(design: &str, target_bin_id: &str, context_bins: &[String]) -> String {
    let context = if context_bins.is_empty() {
        "(none)".to_string()
    } else {
        context_bins
            .iter()
            .take(MAX_CONTEXT_BINS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "You are a verification engineer. Analyze this coverage hole for IP: {design}.\n\
         TARGET UNCOVERED BIN: {target_bin_id}\n\
         \n\
         CONTEXT - ALREADY COVERED (use as reference):\n\
         {context}\n\
         \n\
         TASK:\n\
         1. Suggest a specific test scenario.\n\
         2. Estimate difficulty (easy/medium/hard).\n\
         3. List dependencies.\n\
         \n\
         Respond ONLY with a raw JSON object (no markdown), shaped as:\n\
         {{ \"suggestion\": \"...\", \"test_outline\": [\"step1\"], \"dependencies\": [\"...\"], \
         \"difficulty\": \"medium\", \"reasoning\": \"...\" }}\n"
    )
}
