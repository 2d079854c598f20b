//! maybe-int
//!
//! Three dependent steps, each of which may fail, composed into a single
//! deferred computation with `io-either`.
//!
//! # Overview
//!
//! - step 1 produces `x` from the configured start value
//! - step 2 produces `y = x + 1`
//! - step 3 produces `z = y + 1`
//!
//! Building the chain performs no work. Each run executes the steps in order
//! and stops at the first failing one.
//!
//! # Examples
//!
//! ```
//! use maybe_int::{Scenario, Triple};
//!
//! let computation = Scenario::new(1).computation();
//! assert_eq!(computation.run(), Ok(Triple { x: 1, y: 2, z: 3 }));
//! ```

pub mod error;
pub mod scenario;

pub use error::StepError;
pub use scenario::{Scenario, Triple};
