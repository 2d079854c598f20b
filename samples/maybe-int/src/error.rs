//! Step failures.

use thiserror::Error;

/// Why a step did not produce a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    /// The scenario was configured to fail at this step.
    #[error("step {step} failed on request")]
    Injected {
        /// The failing step (1-based).
        step: u8,
    },

    /// Incrementing the previous value overflowed `i32`.
    #[error("step {step} overflowed")]
    Overflow {
        /// The failing step (1-based).
        step: u8,
    },
}

impl StepError {
    /// Returns the step that failed.
    pub const fn step(&self) -> u8 {
        match self {
            Self::Injected { step } | Self::Overflow { step } => *step,
        }
    }
}
