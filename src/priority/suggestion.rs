//! Remediation suggestion records.
//!
//! A [`Suggestion`] is produced from a provider draft for one uncovered
//! bin. Only `difficulty` and `dependencies` feed scoring; the remaining
//! text fields are advisory and passed through untouched.

use super::tiers::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated effort to hit a bin.
///
/// Parsing is case-insensitive; anything other than easy/medium/hard
/// becomes [`Difficulty::Unknown`], which scores like medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unknown => "unknown",
        }
    }

    /// Effort weight used by scoring: easy=1, medium=2, hard=3.
    /// Unknown difficulties fall back to the medium weight.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium | Self::Unknown => 2.0,
            Self::Hard => 3.0,
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A test recommendation for one uncovered bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Dotted `covergroup.coverpoint.bin` identifier
    pub target_bin: String,
    /// `pending` until scored
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub test_outline: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Suggestion {
    /// Create an unscored suggestion with empty advisory fields.
    pub fn new(target_bin: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            target_bin: target_bin.into(),
            priority: Priority::Pending,
            difficulty,
            suggestion: String::new(),
            test_outline: Vec::new(),
            dependencies: Vec::new(),
            reasoning: String::new(),
            score: None,
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }
}
