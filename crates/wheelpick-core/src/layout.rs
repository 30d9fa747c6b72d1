//! Segment layout: equal angular partition of the wheel.
//!
//! Segment `i` spans `[i * size, (i + 1) * size)` degrees clockwise from the
//! pointer at 12 o'clock, where `size = 360 / N`. The layout is derived on
//! every read; nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::angle::{normalize_degrees, segment_size, FULL_TURN_DEGREES};
use crate::option_set::{OptionLabel, OptionSet};

/// One angular slice of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position of the option in the set
    pub index: usize,
    /// Inclusive start angle in degrees
    pub start_deg: f64,
    /// Exclusive end angle in degrees
    pub end_deg: f64,
    /// The option this slice represents
    pub label: OptionLabel,
}

impl Segment {
    /// Angular width in degrees.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Angle of the segment midpoint.
    #[must_use]
    pub fn center_deg(&self) -> f64 {
        self.start_deg + self.width() / 2.0
    }

    /// Returns true if the wheel-frame angle falls inside this segment.
    #[must_use]
    pub fn contains(&self, degrees: f64) -> bool {
        let angle = normalize_degrees(degrees);
        angle >= self.start_deg && angle < self.end_deg
    }
}

/// Computes the segments for an option set, in option order.
///
/// Returns an empty vector for an empty set. The last segment ends at exactly
/// 360 degrees so the partition has no gap from rounding.
///
/// # Example
///
/// ```
/// use wheelpick_core::layout::layout;
/// use wheelpick_core::option_set::OptionSet;
///
/// let mut options = OptionSet::new();
/// for label in ["Pizza", "Sushi", "Burger", "Pasta"] {
///     options.add(label).unwrap();
/// }
///
/// let segments = layout(&options);
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments[2].start_deg, 180.0);
/// assert_eq!(segments[2].end_deg, 270.0);
/// ```
#[must_use]
pub fn layout(options: &OptionSet) -> Vec<Segment> {
    let Some(size) = segment_size(options.len()) else {
        return Vec::new();
    };
    let last = options.len() - 1;

    options
        .iter()
        .enumerate()
        .map(|(index, label)| {
            #[allow(clippy::cast_precision_loss)]
            let start_deg = index as f64 * size;
            #[allow(clippy::cast_precision_loss)]
            let end_deg = if index == last {
                FULL_TURN_DEGREES
            } else {
                (index + 1) as f64 * size
            };
            Segment {
                index,
                start_deg,
                end_deg,
                label: label.clone(),
            }
        })
        .collect()
}
