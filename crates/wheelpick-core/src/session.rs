//! Spin session: the state machine a presentation layer drives.
//!
//! ```text
//!            request_spin()                notify_spin_animation_complete()
//!   Idle ────────────────────> Spinning ─────────────────────────────────> Settled
//!     ^                          │  ^                                         │
//!     └──── cancel_spin() ───────┘  └──────────── request_spin() ─────────────┘
//! ```
//!
//! The session owns the option set, a seeded random source and the current
//! state. It owns no timer: the host animates to the planned rotation and then
//! calls [`SpinSession::notify_spin_animation_complete`].
//!
//! # Snapshot isolation
//!
//! `request_spin` captures the option set as it is at that moment. The winner
//! is resolved against that snapshot, so options added or removed while the
//! wheel is turning never change the announced result. Clearing all options
//! mid-spin abandons the spin instead.
//!
//! # Example
//!
//! ```
//! use wheelpick_core::config::SpinConfig;
//! use wheelpick_core::session::{SpinSession, SpinState};
//!
//! let mut session = SpinSession::with_seed(SpinConfig::default(), 42).unwrap();
//! session.add_option("Pizza").unwrap();
//! session.add_option("Sushi").unwrap();
//!
//! let plan = session.request_spin().unwrap();
//! // ... host animates the wheel to plan.final_rotation_degrees ...
//! let outcome = session.notify_spin_animation_complete().unwrap();
//!
//! assert_eq!(outcome.index, plan.target_index);
//! assert!(matches!(session.state(), SpinState::Settled(_)));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ConfigError, SpinConfig};
use crate::error::{Result, WheelError};
use crate::layout::{layout, Segment};
use crate::option_set::{display_label, OptionLabel, OptionSet};
use crate::planner::{SpinPlan, SpinPlanner, MIN_SPIN_OPTIONS};
use crate::resolver;

/// The settled result of a spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Index of the winning option in the spin-time snapshot
    pub index: usize,
    /// The winning option
    pub label: OptionLabel,
    /// Rotation the wheel came to rest at, in degrees
    pub rotation: f64,
}

/// Session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpinState {
    /// No spin has started, or the last one was cancelled.
    Idle,
    /// A spin is in flight.
    Spinning {
        /// The plan being animated
        plan: SpinPlan,
        /// Options as they were when the spin started
        snapshot: OptionSet,
    },
    /// The last spin finished.
    Settled(SpinOutcome),
}

impl SpinState {
    /// Returns true while a spin is in flight.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        matches!(self, Self::Spinning { .. })
    }
}

/// Whether the option set allows a spin, for prompting the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    /// No options yet.
    Empty,
    /// One option; at least one more is needed.
    NeedsMore,
    /// Enough options to spin.
    Ready,
}

impl Readiness {
    /// Classifies an option count.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            n if n < MIN_SPIN_OPTIONS => Self::NeedsMore,
            _ => Self::Ready,
        }
    }

    /// Returns true if a spin may be requested.
    #[must_use]
    pub fn can_spin(self) -> bool {
        self == Self::Ready
    }
}

/// An explicitly owned wheel session.
#[derive(Debug, Clone)]
pub struct SpinSession {
    options: OptionSet,
    state: SpinState,
    config: SpinConfig,
    planner: SpinPlanner,
    rng: ChaCha8Rng,
    /// Seed for replay, if the session was seeded
    seed: Option<u64>,
    /// Rotation the wheel rests at between spins
    current_rotation: f64,
}

impl SpinSession {
    /// Creates a session with an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: SpinConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, ChaCha8Rng::from_entropy(), None))
    }

    /// Creates a session whose spins are reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn with_seed(config: SpinConfig, seed: u64) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            config,
            ChaCha8Rng::seed_from_u64(seed),
            Some(seed),
        ))
    }

    fn build(config: SpinConfig, rng: ChaCha8Rng, seed: Option<u64>) -> Self {
        Self {
            options: OptionSet::new(),
            state: SpinState::Idle,
            planner: SpinPlanner::new(&config),
            config,
            rng,
            seed,
            current_rotation: 0.0,
        }
    }

    /// Restarts the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    // ========================================================================
    // Option mutation
    // ========================================================================

    /// Adds an option, returning its index.
    ///
    /// # Errors
    ///
    /// - [`WheelError::EmptyLabel`] if the label is blank
    /// - [`WheelError::DuplicateOption`] if it already exists
    pub fn add_option(&mut self, label: &str) -> Result<usize> {
        let index = self.options.add(label).inspect_err(|err| {
            debug!(%err, "rejected option");
        })?;
        debug!(index, count = self.options.len(), "added option");
        Ok(index)
    }

    /// Removes the option at `index`.
    ///
    /// An in-flight spin keeps resolving against its snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::IndexOutOfRange`] if no option has that index.
    pub fn remove_option(&mut self, index: usize) -> Result<OptionLabel> {
        let removed = self.options.remove(index)?;
        debug!(index, label = %removed, count = self.options.len(), "removed option");
        Ok(removed)
    }

    /// Removes every option, abandoning any in-flight spin.
    pub fn clear_options(&mut self) {
        if self.state.is_spinning() {
            self.cancel_spin();
        }
        self.options.clear();
        debug!("cleared options");
    }

    /// Adds the built-in sample options that are not already present.
    ///
    /// Returns how many were added.
    pub fn add_sample_options(&mut self) -> usize {
        let added = self.options.add_samples();
        debug!(added, count = self.options.len(), "added sample options");
        added
    }

    // ========================================================================
    // Spinning
    // ========================================================================

    /// Starts a spin and returns the plan to animate.
    ///
    /// # Errors
    ///
    /// - [`WheelError::ConcurrentSpin`] if a spin is already in flight
    /// - [`WheelError::InsufficientOptions`] if fewer than two options exist
    ///
    /// Either way the session is left unchanged.
    pub fn request_spin(&mut self) -> Result<SpinPlan> {
        if self.state.is_spinning() {
            debug!("spin rejected: already spinning");
            return Err(WheelError::ConcurrentSpin);
        }

        let plan = self
            .planner
            .plan(&self.options, &mut self.rng)
            .inspect_err(|err| debug!(%err, "spin rejected"))?;

        self.state = SpinState::Spinning {
            plan,
            snapshot: self.options.clone(),
        };
        Ok(plan)
    }

    /// Settles the in-flight spin once the host's animation has finished.
    ///
    /// The winner is resolved from the planned rotation against the options
    /// captured when the spin started.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::NotSpinning`] if no spin is in flight.
    pub fn notify_spin_animation_complete(&mut self) -> Result<SpinOutcome> {
        let SpinState::Spinning { plan, snapshot } = &self.state else {
            debug!("completion ignored: not spinning");
            return Err(WheelError::NotSpinning);
        };

        let rotation = plan.final_rotation_degrees;
        let index = resolver::resolve(rotation, snapshot)?;
        debug_assert_eq!(index, plan.target_index, "resolver disagrees with planner");
        let label = snapshot
            .get(index)
            .cloned()
            .ok_or(WheelError::IndexOutOfRange {
                index,
                len: snapshot.len(),
            })?;

        info!(index, label = %label, rotation, "spin settled");

        let outcome = SpinOutcome {
            index,
            label,
            rotation,
        };
        self.current_rotation = rotation;
        self.state = SpinState::Settled(outcome.clone());
        Ok(outcome)
    }

    /// Abandons an in-flight spin without resolving it.
    ///
    /// Returns true if a spin was cancelled.
    pub fn cancel_spin(&mut self) -> bool {
        if !self.state.is_spinning() {
            return false;
        }
        self.state = SpinState::Idle;
        debug!("spin cancelled");
        true
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SpinState {
        &self.state
    }

    /// Returns true while a spin is in flight.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Segment layout of the current options, for rendering.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        layout(&self.options)
    }

    /// Whether the current options allow a spin.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        Readiness::from_count(self.options.len())
    }

    /// On-wheel text for the option at `index`, shortened per the config.
    #[must_use]
    pub fn display_label(&self, index: usize) -> Option<String> {
        self.options
            .get(index)
            .map(|label| display_label(label.as_str(), self.config.label_display_limit))
    }

    /// Rotation the wheel rests at: the last settled rotation, or 0.
    #[must_use]
    pub fn current_rotation(&self) -> f64 {
        self.current_rotation
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Seed of the random stream, if the session was seeded.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SpinSession {
    fn default() -> Self {
        Self::build(SpinConfig::default(), ChaCha8Rng::from_entropy(), None)
    }
}
