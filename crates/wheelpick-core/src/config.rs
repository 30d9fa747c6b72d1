//! Spin pacing and display configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest whole turns a spin may use, so the wheel visibly rotates.
pub const MIN_SPIN_TURNS: u32 = 1;

/// Shortest label display limit that still leaves room for the ellipsis.
pub const MIN_LABEL_DISPLAY_LIMIT: usize = 3;

/// Configuration for a [`SpinSession`](crate::session::SpinSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Fewest whole turns drawn for a spin (inclusive)
    pub min_turns: u32,
    /// Most whole turns drawn for a spin (inclusive)
    pub max_turns: u32,
    /// Labels longer than this many characters are shortened on the wheel
    pub label_display_limit: usize,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_turns: 3,
            max_turns: 6,
            label_display_limit: 12,
        }
    }
}

impl SpinConfig {
    /// Returns a copy with a different turn range.
    #[must_use]
    pub fn with_turns(self, min_turns: u32, max_turns: u32) -> Self {
        Self {
            min_turns,
            max_turns,
            ..self
        }
    }

    /// Checks the configuration for values the planner cannot use.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_turns < MIN_SPIN_TURNS {
            return Err(ConfigError::TooFewTurns {
                min: MIN_SPIN_TURNS,
                value: self.min_turns,
            });
        }
        if self.min_turns > self.max_turns {
            return Err(ConfigError::TurnRangeInverted {
                min: self.min_turns,
                max: self.max_turns,
            });
        }
        if self.label_display_limit < MIN_LABEL_DISPLAY_LIMIT {
            return Err(ConfigError::DisplayLimitTooSmall {
                min: MIN_LABEL_DISPLAY_LIMIT,
                value: self.label_display_limit,
            });
        }
        Ok(())
    }
}

/// Invalid [`SpinConfig`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_turns` is below [`MIN_SPIN_TURNS`].
    #[error("min_turns must be at least {min} (got {value})")]
    TooFewTurns {
        /// Required minimum
        min: u32,
        /// Configured value
        value: u32,
    },
    /// `min_turns` exceeds `max_turns`.
    #[error("turn range invalid (min {min} > max {max})")]
    TurnRangeInverted {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },
    /// `label_display_limit` is below [`MIN_LABEL_DISPLAY_LIMIT`].
    #[error("label_display_limit must be at least {min} (got {value})")]
    DisplayLimitTooSmall {
        /// Required minimum
        min: usize,
        /// Configured value
        value: usize,
    },
}
