use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON for any output document.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
