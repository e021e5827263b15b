//! Spatial math for conflict detection in a local Cartesian frame.

use crate::models::SampledPoint;

/// Euclidean distance between the spatial parts of two samples.
pub fn euclidean_distance(a: &SampledPoint, b: &SampledPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Midpoint of two samples, each coordinate rounded to 2 decimals.
pub fn rounded_midpoint(a: &SampledPoint, b: &SampledPoint) -> (f64, f64, f64) {
    (
        round_to_hundredths((a.x + b.x) / 2.0),
        round_to_hundredths((a.y + b.y) / 2.0),
        round_to_hundredths((a.z + b.z) / 2.0),
    )
}

/// Round to 2 decimal places using the exact decimal expansion of `value`.
///
/// Scaling by 100 first would turn near-ties such as 0.025 (stored as
/// 0.02500000000000000138...) into exact ties and round them the wrong way.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Round a sample time to whole seconds, ties to even.
pub fn round_seconds(time: f64) -> i64 {
    time.round_ties_even() as i64
}

/// Linear interpolation between `a` and `b` at fraction `t`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
