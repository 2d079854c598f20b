//! # io-either
//!
//! Deferred, fail-fast computations for Rust.
//!
//! ## Overview
//!
//! This library combines two wrapped computation types into one composable
//! abstraction:
//!
//! - a **deferred effect**: side effects are described now and executed later,
//!   only when the caller explicitly runs the computation;
//! - a **fail-fast result**: every step either succeeds with a value or fails
//!   with an error, and the first failure skips all remaining steps.
//!
//! The combination is [`effect::IOEither`]. A chain of steps where each step
//! depends on the unwrapped success value of the previous one is built with
//! `flat_map` (or the [`eff!`] macro) and executed with `run`.
//!
//! ## Feature Flags
//!
//! - `tracing`: Emit `tracing` events when computations run or short-circuit
//!   (enabled by default)
//! - `serde`: Serialize and deserialize [`effect::Failure`]
//!
//! ## Example
//!
//! ```rust
//! use io_either::prelude::*;
//!
//! fn maybe_int_pure(value: i32) -> IOEither<i32, Failure> {
//!     IOEither::new(move || Ok(value))
//! }
//!
//! let computation = eff! {
//!     x <= maybe_int_pure(1);
//!     y <= maybe_int_pure(x + 1);
//!     z <= maybe_int_pure(y + 1);
//!     yield (x, y, z)
//! };
//!
//! assert_eq!(computation.run(), Ok((1, 2, 3)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and macros.
///
/// # Usage
///
/// ```rust
/// use io_either::prelude::*;
/// ```
pub mod prelude {
    pub use crate::eff;
    pub use crate::effect::*;
}

pub mod effect;
