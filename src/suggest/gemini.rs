//! Live provider backed by the Gemini `generateContent` REST API.
//!
//! The client is constructed explicitly from [`ProviderConfig`] and owns
//! its credentials; nothing here is process-global.

use super::prompt::build_prompt;
use super::reply::decode_reply;
use super::{ProviderError, SuggestionDraft, SuggestionProvider};
use crate::config::ProviderConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

const RATE_LIMIT_MARKER: &str = "RESOURCE_EXHAUSTED";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiProvider {
    /// # Errors
    ///
    /// [`ProviderError::MissingCredentials`] without an API key, or
    /// [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingCredentials("gemini".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::with_client(client, &config.endpoint, &config.model, api_key))
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), body));
        }

        let response: GenerateResponse = resp.json().await?;
        first_candidate_text(response)
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn suggest(
        &self,
        design: &str,
        target_bin_id: &str,
        context_bins: &[String],
    ) -> Result<SuggestionDraft, ProviderError> {
        let prompt = build_prompt(design, target_bin_id, context_bins);
        debug!(model = %self.model, target = target_bin_id, "Requesting suggestion");
        let text = self.generate(&prompt).await?;
        decode_reply(&text)
    }
}

/// Map a non-success response to a provider error.
fn error_for_status(status: u16, body: String) -> ProviderError {
    if status == 429 || body.contains(RATE_LIMIT_MARKER) {
        ProviderError::RateLimited(format!("HTTP {status}"))
    } else {
        ProviderError::Api { status, body }
    }
}

fn first_candidate_text(response: GenerateResponse) -> Result<String, ProviderError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(ProviderError::InvalidResponse(
            "response contained no candidate text".to_string(),
        ))
    } else {
        Ok(text)
    }
}
