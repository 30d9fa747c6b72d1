//! Error taxonomy for the selection engine.
//!
//! Every error is recoverable. A failed operation never changes the option set
//! or the session state, so callers can re-prompt the user and try again.

use thiserror::Error;

/// Errors returned by option-set mutations, spin planning and resolution.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum WheelError {
    /// The label is already present in the option set.
    #[error("option '{label}' already exists")]
    DuplicateOption {
        /// The rejected label (trimmed)
        label: String,
    },

    /// The label is empty or only whitespace.
    #[error("option label must not be empty")]
    EmptyLabel,

    /// An index does not address an existing option.
    #[error("index {index} is out of range for {len} options")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of options at the time of the request
        len: usize,
    },

    /// Not enough options to perform the operation.
    #[error("need at least {required} options, have {available}")]
    InsufficientOptions {
        /// Minimum option count for the operation
        required: usize,
        /// Option count at the time of the request
        available: usize,
    },

    /// A spin was requested while another one is still in flight.
    #[error("a spin is already in progress")]
    ConcurrentSpin,

    /// Completion was signalled while no spin was in flight.
    #[error("no spin is in progress")]
    NotSpinning,

    /// The rotation angle is NaN or infinite.
    #[error("rotation {0} is not a finite angle")]
    InvalidRotation(f64),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, WheelError>;
