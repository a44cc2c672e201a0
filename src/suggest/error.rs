use std::time::Duration;

/// Errors from a suggestion provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The service asked us to slow down (HTTP 429 / `RESOURCE_EXHAUSTED`).
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("no API key configured for provider `{0}`")]
    MissingCredentials(String),
}

impl ProviderError {
    /// Whether retrying the same request may succeed.
    ///
    /// Only rate limiting is treated as transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProviderError::RateLimited(_))
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(e.to_string())
    }
}
