//! Deterministic suggestion scoring.
//!
//! ```text
//! score = (1.0 * BASE_WEIGHT)
//!       + (1 / difficulty_weight) * DIFFICULTY_WEIGHT
//!       + dependency_factor * DEPENDENCY_WEIGHT
//! ```
//!
//! The base term is identical for every suggestion. The terms are summed
//! left to right in exactly this order; reordering changes the last bits
//! of the result, and with them the tier of scores sitting on 0.7.

use super::suggestion::{Difficulty, Suggestion};
use super::tiers::classify_tier;
use serde::Serialize;

pub const BASE_WEIGHT: f64 = 0.4;
pub const DIFFICULTY_WEIGHT: f64 = 0.3;
pub const DEPENDENCY_WEIGHT: f64 = 0.3;

/// Dependency factor for a suggestion with no prerequisites.
pub const NO_DEPENDENCIES: f64 = 1.0;
/// Dependency factor for a suggestion with at least one prerequisite.
pub const HAS_DEPENDENCIES: f64 = 0.5;

/// Individual score terms, for explaining a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub difficulty: f64,
    pub dependency: f64,
    pub total: f64,
}

pub fn dependency_factor(dependencies: &[String]) -> f64 {
    if dependencies.is_empty() {
        NO_DEPENDENCIES
    } else {
        HAS_DEPENDENCIES
    }
}

pub fn score_breakdown(difficulty: Difficulty, dependencies: &[String]) -> ScoreBreakdown {
    let inv_difficulty = 1.0 / difficulty.weight();
    let dep = dependency_factor(dependencies);

    let base = 1.0 * BASE_WEIGHT;
    let difficulty = inv_difficulty * DIFFICULTY_WEIGHT;
    let dependency = dep * DEPENDENCY_WEIGHT;

    ScoreBreakdown {
        base,
        difficulty,
        dependency,
        total: base + difficulty + dependency,
    }
}

pub fn calculate_score(difficulty: Difficulty, dependencies: &[String]) -> f64 {
    score_breakdown(difficulty, dependencies).total
}

/// Score and tier every suggestion, then sort by descending score.
///
/// The sort is stable: suggestions with equal scores keep their input
/// order. Only `score` and `priority` are written.
pub fn prioritize(mut suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    for s in &mut suggestions {
        let score = calculate_score(s.difficulty, &s.dependencies);
        s.score = Some(score);
        s.priority = classify_tier(score);
    }

    suggestions.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));
    suggestions
}

fn sort_key(s: &Suggestion) -> f64 {
    s.score.unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::Priority;

    fn deps(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_easy_without_dependencies_scores_one() {
        let score = calculate_score(Difficulty::Easy, &[]);
        assert!((score - 1.0).abs() < 1e-12);
        assert_eq!(classify_tier(score), Priority::High);
    }

    #[test]
    fn test_hard_with_dependencies_is_medium() {
        let score = calculate_score(Difficulty::Hard, &deps(&["x"]));
        assert!((score - 0.65).abs() < 1e-12);
        assert_eq!(classify_tier(score), Priority::Medium);
    }

    #[test]
    fn test_medium_with_dependencies_lands_just_above_threshold() {
        // 0.4 + 0.15 + 0.15 sums to 0.7000000000000001 in f64.
        let score = calculate_score(Difficulty::Medium, &deps(&["x"]));
        assert!(score > 0.7);
        assert_eq!(classify_tier(score), Priority::High);
    }

    #[test]
    fn test_unknown_scores_like_medium() {
        assert_eq!(
            calculate_score(Difficulty::Unknown, &[]),
            calculate_score(Difficulty::Medium, &[])
        );
    }

    #[test]
    fn test_breakdown_terms() {
        let b = score_breakdown(Difficulty::Easy, &deps(&["a", "b"]));
        assert_eq!(b.base, 0.4);
        assert!((b.difficulty - 0.3).abs() < 1e-12);
        assert_eq!(b.dependency, 0.15);
        assert!((b.total - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_prioritize_sorts_descending() {
        let input = vec![
            Suggestion::new("hard", Difficulty::Hard).with_dependencies(["x"]),
            Suggestion::new("easy", Difficulty::Easy),
            Suggestion::new("medium", Difficulty::Medium),
        ];

        let ranked = prioritize(input);
        let order: Vec<_> = ranked.iter().map(|s| s.target_bin.as_str()).collect();
        assert_eq!(order, vec!["easy", "medium", "hard"]);
        assert_eq!(ranked[0].priority, Priority::High);
        assert_eq!(ranked[2].priority, Priority::Medium);
        assert!(ranked.iter().all(|s| s.score.is_some()));
    }

    #[test]
    fn test_prioritize_is_stable_for_ties() {
        let input = vec![
            Suggestion::new("first", Difficulty::Medium),
            Suggestion::new("second", Difficulty::Unknown),
            Suggestion::new("top", Difficulty::Easy),
            Suggestion::new("third", Difficulty::Medium),
        ];

        let ranked = prioritize(input);
        let order: Vec<_> = ranked.iter().map(|s| s.target_bin.as_str()).collect();
        assert_eq!(order, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_prioritize_leaves_advisory_fields() {
        let mut s = Suggestion::new("a.b.c", Difficulty::Easy);
        s.suggestion = "Drive a 4096 byte transfer".into();
        s.reasoning = "boundary".into();

        let ranked = prioritize(vec![s.clone()]);
        assert_eq!(ranked[0].suggestion, s.suggestion);
        assert_eq!(ranked[0].reasoning, s.reasoning);
        assert_eq!(ranked[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_prioritize_empty() {
        assert!(prioritize(Vec::new()).is_empty());
    }
}
