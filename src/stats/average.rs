use crate::domain::Rating;

/// Club average for a set of ratings: mean of the valid scores, rounded to
/// one decimal place. None when no rating carries a score, never 0 or NaN.
pub fn average(ratings: &[Rating]) -> Option<f64> {
    let scores: Vec<f64> = ratings.iter().filter_map(Rating::valid_score).collect();
    mean(&scores).map(round_tenths)
}

/// Arithmetic mean, None for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round half-up on the tenths digit. The epsilon keeps values like 7.85,
/// which land just below x.5 in binary, from rounding down; scores are
/// non-negative so half-away-from-zero matches half-up.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 1e-9).round() / 10.0
}
