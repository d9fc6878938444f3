//! Posture accuracy scores
//!
//! A posture score is a percentage in `[0, 100]` produced by an external
//! pose-estimation pipeline. Sessions keep the raw samples in order and an
//! aggregate accuracy value.

/// Lowest valid score
pub const MIN_SCORE: f64 = 0.0;

/// Highest valid score
pub const MAX_SCORE: f64 = 100.0;

/// Check whether a single sample lies within `[0, 100]`
#[inline]
pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Index of the first out-of-range sample, if any
pub fn first_invalid(scores: &[f64]) -> Option<usize> {
    scores.iter().position(|&s| !is_valid_score(s))
}

/// Arithmetic mean of the samples, `0.0` for an empty slice
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
