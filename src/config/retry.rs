//! Retry configuration for provider calls.
//!
//! Only transient provider failures (rate limiting) are retried. The
//! default policy makes three attempts in total with a linearly growing
//! pause between them: 15s, then 30s.
//!
//! # Configuration Example
//!
//! ```toml
//! [retry]
//! enabled = true
//! max_attempts = 3
//! base_delay_ms = 15000
//! strategy = "linear"
//! ```
//!
//! # Retry Strategies
//!
//! - **Constant**: Same delay between each retry
//! - **Linear**: Delay increases linearly (base * attempt)
//! - **Exponential**: Delay doubles each attempt (base * 2^(attempt-1))

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration for rate-limited provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Enable automatic retries (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Total attempts per bin, including the first (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base delay between attempts in milliseconds (default: 15000)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Retry strategy (default: linear)
    #[serde(default)]
    pub strategy: RetryStrategy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            strategy: RetryStrategy::default(),
        }
    }
}

impl RetryConfig {
    /// A single attempt, never retried.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Pause after the given failed attempt (1-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        let factor: u64 = match self.strategy {
            RetryStrategy::Constant => 1,
            RetryStrategy::Linear => u64::from(attempt),
            RetryStrategy::Exponential => 1u64
                .checked_shl(attempt - 1)
                .unwrap_or(u64::MAX),
        };
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Whether another attempt is allowed after `attempts_made` attempts.
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        self.enabled && attempts_made < self.max_attempts
    }
}

/// Retry delay strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStrategy {
    /// Same delay between each retry.
    Constant,
    /// Delay increases linearly: base * attempt.
    #[default]
    Linear,
    /// Delay doubles each attempt: base * 2^(attempt-1).
    Exponential,
}

// Default value functions for serde
fn default_enabled() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    15_000
}
