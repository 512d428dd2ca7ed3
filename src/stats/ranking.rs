/// Tolerance for floating-point noise when comparing metric values
const EPSILON: f64 = 1e-9;

/// Ordinal rank of one member's metric value among the whole club,
/// formatted as "k/n".
///
/// Members tied on a value share the same rank: rank is 1 plus the number
/// of strictly better values. None when the value is missing or fewer than
/// 2 members have a comparable value.
pub fn rank(value: Option<f64>, all_values: &[Option<f64>], higher_is_better: bool) -> Option<String> {
    let value = value.filter(|v| v.is_finite())?;
    let valid: Vec<f64> = all_values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    if valid.len() < 2 {
        return None;
    }

    let better = valid
        .iter()
        .filter(|&&v| {
            if higher_is_better {
                v > value + EPSILON
            } else {
                v < value - EPSILON
            }
        })
        .count();

    Some(format!("{}/{}", better + 1, valid.len()))
}
