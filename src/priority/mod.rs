//! Suggestion prioritization.
//!
//! Scores each [`Suggestion`] from its difficulty and dependency list,
//! assigns a [`Priority`] tier and ranks the batch by descending score.

pub mod scoring;
pub mod suggestion;
pub mod tiers;

pub use scoring::{calculate_score, prioritize, score_breakdown, ScoreBreakdown};
pub use suggestion::{Difficulty, Suggestion};
pub use tiers::{classify_tier, Priority};
