//! Outcome resolution: which segment is under the pointer?
//!
//! Works for any rotation, not just planned ones. Accumulated angles, negative
//! angles and exact multiples of a full turn all resolve deterministically.
//!
//! Rotating the wheel clockwise by `R` is the same as moving the pointer
//! counter-clockwise by `R` in the wheel's original frame, so the segment
//! under the pointer is the one that started at `(360 - (R mod 360)) mod 360`.

use tracing::debug;

use crate::angle::{normalize_degrees, segment_size, FULL_TURN_DEGREES};
use crate::error::{Result, WheelError};
use crate::option_set::OptionSet;

/// Wheel-frame angle under the pointer after a clockwise rotation.
///
/// Always in `[0, 360)`.
///
/// ```
/// use wheelpick_core::resolver::pointer_position;
///
/// assert_eq!(pointer_position(90.0), 270.0);
/// assert_eq!(pointer_position(1575.0), 225.0);
/// assert_eq!(pointer_position(0.0), 0.0);
/// ```
#[must_use]
pub fn pointer_position(final_rotation_degrees: f64) -> f64 {
    let normalized = normalize_degrees(final_rotation_degrees);
    normalize_degrees(FULL_TURN_DEGREES - normalized)
}

/// Resolves the index of the option under the pointer.
///
/// # Errors
///
/// - [`WheelError::InsufficientOptions`] if `options` is empty
/// - [`WheelError::InvalidRotation`] if the angle is NaN or infinite
pub fn resolve(final_rotation_degrees: f64, options: &OptionSet) -> Result<usize> {
    resolve_segment_count(final_rotation_degrees, options.len())
}

/// Resolves the index of the segment under the pointer for `count` equal
/// segments.
///
/// # Errors
///
/// - [`WheelError::InsufficientOptions`] if `count` is zero
/// - [`WheelError::InvalidRotation`] if the angle is NaN or infinite
pub fn resolve_segment_count(final_rotation_degrees: f64, count: usize) -> Result<usize> {
    let size = segment_size(count).ok_or(WheelError::InsufficientOptions {
        required: 1,
        available: 0,
    })?;
    if !final_rotation_degrees.is_finite() {
        return Err(WheelError::InvalidRotation(final_rotation_degrees));
    }

    let position = pointer_position(final_rotation_degrees);
    // position / size is in [0, count]; the cast floors, the modulo folds the
    // upper edge produced by rounding back onto segment 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (position / size).floor() as usize % count;

    debug!(
        final_rotation_degrees,
        pointer_position = position,
        segments = count,
        index,
        "resolved pointer"
    );

    Ok(index)
}
