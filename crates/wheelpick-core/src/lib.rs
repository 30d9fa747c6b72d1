//! # Wheelpick Core
//!
//! Wheel selection engine: draw one option at random and tell a spinning-wheel
//! presentation exactly where to stop.
//!
//! The engine keeps the planned rotation and the announced winner in lockstep.
//! A spin is planned by picking a target segment and computing the clockwise
//! rotation that brings it under a fixed pointer; the winner is then recovered
//! from that same rotation by the exact inverse computation.
//!
//! ## Architecture
//!
//! - **Options**: [`OptionSet`], ordered and duplicate-free
//! - **Layout**: [`layout`](layout::layout), equal angular segments
//! - **Planner**: [`SpinPlanner`], random target + rotation
//! - **Resolver**: [`resolve`](resolver::resolve), rotation back to index
//! - **Session**: [`SpinSession`], the Idle/Spinning/Settled state machine
//!
//! Rendering, animation timing and sound belong to the host. The host animates
//! to [`SpinPlan::final_rotation_degrees`] and then calls
//! [`SpinSession::notify_spin_animation_complete`].
//!
//! ## Usage
//!
//! ```
//! use wheelpick_core::{SpinConfig, SpinSession};
//!
//! let mut session = SpinSession::with_seed(SpinConfig::default(), 7)?;
//! session.add_sample_options();
//!
//! let plan = session.request_spin()?;
//! let outcome = session.notify_spin_animation_complete()?;
//! assert_eq!(outcome.index, plan.target_index);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod angle;
pub mod config;
pub mod error;
pub mod layout;
pub mod option_set;
pub mod planner;
pub mod resolver;
pub mod session;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use config::{ConfigError, SpinConfig};
pub use error::{Result, WheelError};
pub use layout::Segment;
pub use option_set::{OptionLabel, OptionSet};
pub use planner::{SpinPlan, SpinPlanner};
pub use session::{Readiness, SpinOutcome, SpinSession, SpinState};
