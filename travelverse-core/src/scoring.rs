//! Small numeric helpers shared by every scorer.

use std::cmp::Ordering;

use crate::RandomSource;

/// Bound `value` to `lo..=hi`.
///
/// # Examples
/// ```
/// use travelverse_core::scoring::clamp;
///
/// assert_eq!(clamp(1.3, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.3, -1.0, 1.0), -1.0);
/// assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
/// ```
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Sum each value multiplied by its weight.
///
/// # Examples
/// ```
/// use travelverse_core::scoring::weighted_sum;
///
/// let total = weighted_sum([(1.0, 0.3), (0.5, 0.4)]);
/// assert!((total - 0.5).abs() < 1e-12);
/// assert_eq!(weighted_sum(std::iter::empty()), 0.0);
/// ```
pub fn weighted_sum<I>(terms: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    terms.into_iter().map(|(value, weight)| value * weight).sum()
}

/// Perturb `value` by at most `magnitude` in either direction.
///
/// Consumes exactly one draw: the offset is `(draw - 0.5) * 2 * magnitude`.
/// The result is not clamped; callers re-clamp.
pub fn inject_noise(value: f32, magnitude: f32, rng: &mut dyn RandomSource) -> f32 {
    let offset = (unit_draw(rng) - 0.5) * 2.0 * magnitude;
    value + offset
}

/// Draw from `rng` narrowed to `f32`.
///
/// Draws lie in `0.0..1.0`, so narrowing only loses precision. A draw just
/// below one may round up to `1.0_f32`.
pub fn unit_draw(rng: &mut dyn RandomSource) -> f32 {
    rng.draw() as f32
}

/// Clamp and validate a raw score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
pub fn sanitise(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    clamp(score, 0.0, 1.0)
}

/// Order two scores from highest to lowest.
///
/// Pass to a stable sort so equal scores keep their input order.
pub fn descending(lhs: f32, rhs: f32) -> Ordering {
    rhs.total_cmp(&lhs)
}
