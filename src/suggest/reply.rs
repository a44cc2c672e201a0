//! Decoding of model replies into drafts.
//!
//! Models are asked for bare JSON but often wrap it in a ```json fence
//! anyway. Missing and `null` fields default; a `difficulty` of any JSON
//! type is accepted and mapped through [`Difficulty::parse`].

use super::{ProviderError, SuggestionDraft};
use crate::priority::Difficulty;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(default)]
    suggestion: Option<String>,
    #[serde(default)]
    test_outline: Option<Vec<String>>,
    #[serde(default)]
    dependencies: Option<Vec<String>>,
    #[serde(default)]
    difficulty: Option<Value>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Remove markdown code fences around a JSON payload.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .trim()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Decode model reply text into a draft.
///
/// # Errors
///
/// [`ProviderError::InvalidResponse`] when the text is not a JSON object
/// of the expected shape.
pub fn decode_reply(text: &str) -> Result<SuggestionDraft, ProviderError> {
    let raw: RawReply = serde_json::from_str(strip_code_fences(text))?;

    let difficulty = match raw.difficulty {
        None | Some(Value::Null) => Difficulty::Medium,
        Some(Value::String(s)) => Difficulty::parse(&s),
        Some(other) => Difficulty::parse(&other.to_string()),
    };

    Ok(SuggestionDraft {
        difficulty,
        dependencies: raw.dependencies.unwrap_or_default(),
        suggestion: raw.suggestion.unwrap_or_default(),
        test_outline: raw.test_outline.unwrap_or_default(),
        reasoning: raw.reasoning.unwrap_or_default(),
    })
}
