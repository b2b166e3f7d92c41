/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Slack allowed when deciding whether a sweep has reached its end value.
const SWEEP_EPSILON: f64 = 1e-9;

/// Rounds `value` to `decimals` decimal places, ties away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    // Normalize -0.0 so rounded output compares and prints like zero.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Yields `start, start + step, start + 2*step, ...` up to and including `end`.
///
/// Values are computed from an integer index rather than accumulated, so the
/// number of samples depends only on `(end - start) / step`. `step` must be
/// positive; callers validate this before sweeping.
pub fn sweep(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |i| start + f64::from(i) * step)
        .take_while(move |v| *v <= end + SWEEP_EPSILON)
}
