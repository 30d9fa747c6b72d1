//! Angle arithmetic shared by the planner and the resolver.
//!
//! All angles are in degrees, measured clockwise from the pointer at 12
//! o'clock. Rotations are unbounded; positions on the wheel are always
//! normalized into `[0, 360)` through [`normalize_degrees`].

/// Degrees in one full turn of the wheel.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Wraps any finite angle into `[0, 360)`.
///
/// Behaves like `((x % 360) + 360) % 360` for every sign of `x`. A tiny
/// negative input can round up to exactly `360.0`; that case collapses to
/// `0.0` so the result never leaves the half-open range.
///
/// # Example
///
/// ```
/// use wheelpick_core::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(1665.0), 225.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Returns the angular width of one segment for `count` segments.
///
/// `None` when there are no segments to divide the wheel into.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment_size(count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(FULL_TURN_DEGREES / count as f64)
}
