//! Configuration for covgap runs.
//!
//! Loaded from `.covgap.toml` (searched upward from the working
//! directory) or an explicit `--config` file:
//!
//! ```toml
//! [provider]
//! kind = "gemini"            # or "fixture"
//! model = "gemini-2.0-flash"
//! timeout_seconds = 60
//!
//! [retry]
//! max_attempts = 3
//! base_delay_ms = 15000
//! strategy = "linear"
//!
//! [runner]
//! workers = 2
//! ```
//!
//! The API key is read from `COVGAP_API_KEY` when set.

mod core;
mod loader;
pub mod retry;

pub use self::core::{
    CovgapConfig, ProviderConfig, ProviderKind, RunnerConfig, API_KEY_ENV, DEFAULT_ENDPOINT,
    DEFAULT_MODEL,
};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use self::retry::{RetryConfig, RetryStrategy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
