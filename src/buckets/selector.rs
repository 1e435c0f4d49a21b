// Bucket selection from keyword scores

use super::keywords::BucketScores;
use crate::random::{choose, RandomSource};

/// Pick the highest-scoring bucket, breaking ties at random
///
/// Returns `None` when there are no scores or the best score is zero.
pub fn select_bucket(scores: &BucketScores, rng: &dyn RandomSource) -> Option<String> {
    let best = scores.values().copied().max()?;
    if best == 0 {
        return None;
    }

    let ties: Vec<&String> = scores
        .iter()
        .filter(|(_, &score)| score == best)
        .map(|(bucket, _)| bucket)
        .collect();

    if ties.len() > 1 {
        tracing::debug!(score = best, ties = ?ties, "Breaking bucket tie at random");
    }

    choose(rng, &ties).map(|bucket| (*bucket).clone())
}
