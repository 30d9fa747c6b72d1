//! Test module for cross-module behaviour.
//!
//! - `determinism.rs`: same seed, same spins
//! - `integration.rs`: full add/spin/settle flows through the session
//! - `properties.rs`: property tests for the planner/resolver inverse and the layout
//! - `helpers.rs`: fixtures shared by the above

mod helpers;

// Re-export for convenience
pub use helpers::*;
