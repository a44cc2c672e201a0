/// Priority tiers for suggestion ranking
///
/// Scores map onto three tiers with strict lower bounds: above 0.7 is
/// high, above 0.4 is medium, anything else is low.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score above which a suggestion is high priority
pub const HIGH_THRESHOLD: f64 = 0.7;

/// Score above which a suggestion is medium priority
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// Priority tier of a suggestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Not yet scored
    #[default]
    Pending,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Pending => "pending",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a score into a priority tier
pub fn classify_tier(score: f64) -> Priority {
    if score > HIGH_THRESHOLD {
        Priority::High
    } else if score > MEDIUM_THRESHOLD {
        Priority::Medium
    } else {
        Priority::Low
    }
}
