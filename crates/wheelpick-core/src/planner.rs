//! Spin planning: pick a winner, then find the rotation that shows it.
//!
//! The wheel turns clockwise under a pointer fixed at 12 o'clock. After a
//! clockwise rotation of `R` degrees, the pointer sits over the wheel-frame
//! angle `360 - (R mod 360)`. To land the pointer on the midpoint `c` of the
//! target segment, the planner therefore rotates by whole turns plus the
//! complement `(360 - c) mod 360`:
//!
//! ```text
//! final_rotation = turns * 360 + normalize_degrees(-c)
//! ```
//!
//! [`crate::resolver::resolve`] undoes exactly this construction.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angle::{normalize_degrees, segment_size, FULL_TURN_DEGREES};
use crate::config::SpinConfig;
use crate::error::{Result, WheelError};
use crate::option_set::OptionSet;

/// Fewest options a spin needs.
pub const MIN_SPIN_OPTIONS: usize = 2;

/// The outcome of planning one spin.
///
/// Immutable once produced; the session consumes it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    /// Segment the pointer will land on
    pub target_index: usize,
    /// Whole turns before the final offset
    pub turns: u32,
    /// Total clockwise rotation to animate to, in degrees (never negative)
    pub final_rotation_degrees: f64,
}

/// Computes the rotation that lands the pointer on the middle of a segment.
///
/// # Errors
///
/// - [`WheelError::InsufficientOptions`] if `segment_count` is zero
/// - [`WheelError::IndexOutOfRange`] if `target_index >= segment_count`
///
/// # Example
///
/// ```
/// use wheelpick_core::planner::rotation_for;
///
/// // Four segments of 90°, target index 2 centred at 225°, four turns.
/// let rotation = rotation_for(2, 4, 4).unwrap();
/// assert_eq!(rotation, 4.0 * 360.0 + 135.0);
/// ```
pub fn rotation_for(target_index: usize, turns: u32, segment_count: usize) -> Result<f64> {
    let size = segment_size(segment_count).ok_or(WheelError::InsufficientOptions {
        required: 1,
        available: 0,
    })?;
    if target_index >= segment_count {
        return Err(WheelError::IndexOutOfRange {
            index: target_index,
            len: segment_count,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let target_center = target_index as f64 * size + size / 2.0;
    Ok(f64::from(turns) * FULL_TURN_DEGREES + normalize_degrees(-target_center))
}

/// Draws spin plans from a random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinPlanner {
    min_turns: u32,
    max_turns: u32,
}

impl SpinPlanner {
    /// Creates a planner using the turn range from `config`.
    ///
    /// The config is assumed valid; see [`SpinConfig::validate`].
    #[must_use]
    pub fn new(config: &SpinConfig) -> Self {
        Self {
            min_turns: config.min_turns,
            max_turns: config.max_turns.max(config.min_turns),
        }
    }

    /// Plans a spin over `options`.
    ///
    /// The target is drawn uniformly from `[0, N)` and the turn count
    /// uniformly from the configured inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InsufficientOptions`] if fewer than
    /// [`MIN_SPIN_OPTIONS`] options are present.
    pub fn plan<R: Rng + ?Sized>(&self, options: &OptionSet, rng: &mut R) -> Result<SpinPlan> {
        self.plan_for_count(options.len(), rng)
    }

    /// Plans a spin over `count` equal segments.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InsufficientOptions`] if `count` is below
    /// [`MIN_SPIN_OPTIONS`].
    pub fn plan_for_count<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<SpinPlan> {
        if count < MIN_SPIN_OPTIONS {
            return Err(WheelError::InsufficientOptions {
                required: MIN_SPIN_OPTIONS,
                available: count,
            });
        }

        let target_index = rng.gen_range(0..count);
        let turns = rng.gen_range(self.min_turns..=self.max_turns);
        let final_rotation_degrees = rotation_for(target_index, turns, count)?;

        debug!(
            target_index,
            turns,
            final_rotation_degrees,
            segments = count,
            "planned spin"
        );

        Ok(SpinPlan {
            target_index,
            turns,
            final_rotation_degrees,
        })
    }

    /// Inclusive range of whole turns this planner draws from.
    #[must_use]
    pub fn turn_range(&self) -> (u32, u32) {
        (self.min_turns, self.max_turns)
    }
}

impl Default for SpinPlanner {
    fn default() -> Self {
        Self::new(&SpinConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn options_of(count: usize) -> OptionSet {
        let mut set = OptionSet::new();
        for i in 0..count {
            set.add(&format!("option-{i}")).unwrap();
        }
        set
    }

    mod rotation_tests {
        use super::*;

        #[test]
        fn burger_lands_after_four_turns() {
            // Pizza, Sushi, Burger, Pasta: Burger is centred at 225°
            let rotation = rotation_for(2, 4, 4).unwrap();
            assert_eq!(rotation, 1575.0);
        }

        #[test]
        fn first_segment_uses_complement_of_half_width() {
            assert_eq!(rotation_for(0, 3, 4).unwrap(), 3.0 * 360.0 + 315.0);
        }

        #[test]
        fn single_segment_is_centred_under_pointer() {
            assert_eq!(rotation_for(0, 1, 1).unwrap(), 360.0 + 180.0);
        }

        #[test]
        fn zero_segments_is_rejected() {
            assert_eq!(
                rotation_for(0, 3, 0),
                Err(WheelError::InsufficientOptions {
                    required: 1,
                    available: 0
                })
            );
        }

        #[test]
        fn target_past_end_is_rejected() {
            assert_eq!(
                rotation_for(4, 3, 4),
                Err(WheelError::IndexOutOfRange { index: 4, len: 4 })
            );
        }
    }

    mod plan_tests {
        use super::*;

        #[test]
        fn too_few_options_is_rejected() {
            let planner = SpinPlanner::default();
            let mut rng = ChaCha8Rng::seed_from_u64(7);

            for count in 0..MIN_SPIN_OPTIONS {
                let err = planner.plan(&options_of(count), &mut rng).unwrap_err();
                assert_eq!(
                    err,
                    WheelError::InsufficientOptions {
                        required: 2,
                        available: count
                    }
                );
            }
        }

        #[test]
        fn plan_stays_within_bounds() {
            let planner = SpinPlanner::default();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let options = options_of(7);

            for _ in 0..500 {
                let plan = planner.plan(&options, &mut rng).unwrap();
                assert!(plan.target_index < 7);
                assert!((3..=6).contains(&plan.turns));
                assert!(plan.final_rotation_degrees >= 3.0 * 360.0);
                assert!(plan.final_rotation_degrees < 7.0 * 360.0);
            }
        }

        #[test]
        fn plan_matches_rotation_for() {
            let planner = SpinPlanner::default();
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            let plan = planner.plan_for_count(5, &mut rng).unwrap();
            assert_eq!(
                plan.final_rotation_degrees,
                rotation_for(plan.target_index, plan.turns, 5).unwrap()
            );
        }

        #[test]
        fn fixed_turn_range_always_uses_that_count() {
            let planner = SpinPlanner::new(&SpinConfig::default().with_turns(4, 4));
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            for _ in 0..50 {
                assert_eq!(planner.plan_for_count(3, &mut rng).unwrap().turns, 4);
            }
            assert_eq!(planner.turn_range(), (4, 4));
        }

        #[test]
        fn every_turn_count_in_range_is_drawn() {
            let planner = SpinPlanner::default();
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let mut seen = [false; 7];
            for _ in 0..400 {
                let plan = planner.plan_for_count(2, &mut rng).unwrap();
                seen[plan.turns as usize] = true;
            }
            assert_eq!(seen, [false, false, false, true, true, true, true]);
        }

        #[test]
        fn plan_serialization_roundtrip() {
            let plan = SpinPlan {
                target_index: 2,
                turns: 4,
                final_rotation_degrees: 1575.0,
            };
            let json = serde_json::to_string(&plan).unwrap();
            let deserialized: SpinPlan = serde_json::from_str(&json).unwrap();
            assert_eq!(plan, deserialized);
        }
    }
}
