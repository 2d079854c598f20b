//! The three-step computation.

use std::fmt;

use io_either::eff;
use io_either::effect::IOEither;

use crate::error::StepError;

/// The values produced by a fully successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triple {
    /// Result of step 1.
    pub x: i32,
    /// Result of step 2.
    pub y: i32,
    /// Result of step 3.
    pub z: i32,
}

impl fmt::Display for Triple {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "x={} y={} z={}", self.x, self.y, self.z)
    }
}

/// Inputs of the computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    start: i32,
    fail_at: Option<u8>,
}

impl Scenario {
    /// A scenario where every step succeeds.
    pub const fn new(start: i32) -> Self {
        Self {
            start,
            fail_at: None,
        }
    }

    /// Makes `step` (1-based) fail when it runs.
    #[must_use]
    pub const fn failing_at(self, step: u8) -> Self {
        Self {
            fail_at: Some(step),
            ..self
        }
    }

    /// A single step: yields `value`, or fails when it is the configured
    /// failing step or `value` is `None`.
    ///
    /// Nothing is logged or checked until the step runs.
    pub fn maybe_int_pure(self, step: u8, value: Option<i32>) -> IOEither<i32, StepError> {
        IOEither::new(move || {
            tracing::info!(step, ?value, "running step");
            if self.fail_at == Some(step) {
                return Err(StepError::Injected { step });
            }
            value.ok_or(StepError::Overflow { step })
        })
    }

    /// Builds the chain `x = start`, `y = x + 1`, `z = y + 1`.
    pub fn computation(self) -> IOEither<Triple, StepError> {
        eff! {
            x <= self.maybe_int_pure(1, Some(self.start));
            y <= self.maybe_int_pure(2, x.checked_add(1));
            z <= self.maybe_int_pure(3, y.checked_add(1));
            yield Triple { x, y, z }
        }
    }
}
