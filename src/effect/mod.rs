//! Deferred effects and fail-fast composition.
//!
//! This module provides the two halves of the pattern and their combination:
//!
//! - [`IO`]: Computations with deferred side effects
//! - [`Failure`]: A descriptive error payload
//! - [`IOEither`]: Computations with deferred side effects that may fail
//!
//! # IOEither
//!
//! An [`IOEither`] describes work without doing it. Side effects are deferred
//! until `run` is called, and every `run` executes them again.
//!
//! ```rust
//! use io_either::effect::{Failure, IOEither};
//!
//! let computation: IOEither<i32, Failure> = IOEither::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IOEither::pure(x + 1));
//!
//! // Side effects don't occur until run is called
//! assert_eq!(computation.run(), Ok(21));
//! ```
//!
//! # Fail-fast
//!
//! ```rust
//! use io_either::effect::{Failure, IOEither};
//!
//! let computation: IOEither<i32, Failure> = IOEither::pure(1)
//!     .flat_map(|_| IOEither::throw(Failure::new("boom")))
//!     .flat_map(|x: i32| IOEither::pure(x + 1));
//!
//! assert_eq!(computation.run(), Err(Failure::new("boom")));
//! ```
//!
//! # Do-Notation with eff! Macro
//!
//! ```rust
//! use io_either::eff;
//! use io_either::effect::{Failure, IOEither};
//!
//! let computation: IOEither<i32, Failure> = eff! {
//!     x <= IOEither::pure(5);
//!     y <= IOEither::pure(10);
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(computation.run(), Ok(30));
//! ```

// =============================================================================
// Logging
// =============================================================================

#[macro_use]
mod instrument;

// =============================================================================
// Error Payload
// =============================================================================

mod failure;

pub use failure::Failure;

// =============================================================================
// IO Monad
// =============================================================================

mod io;

pub use io::IO;

// =============================================================================
// IOEither
// =============================================================================

mod io_either;

pub use io_either::IOEither;

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod eff_macro;
