//! Ranking scored candidates

use serde::Serialize;
use std::cmp::Ordering;

/// A candidate paired with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch<T> {
    /// The matched entity
    pub item: T,
    /// Match score, always positive once ranked
    pub score: f64,
}

impl<T> ScoredMatch<T> {
    /// Pair `item` with `score`
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Keep positive scores, sort descending and truncate to `cap`
///
/// The sort is stable: equal scores keep their input order.
pub fn rank<T>(candidates: Vec<ScoredMatch<T>>, cap: usize) -> Vec<ScoredMatch<T>> {
    let mut ranked: Vec<ScoredMatch<T>> = candidates
        .into_iter()
        .filter(|candidate| candidate.score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(cap);
    ranked
}
