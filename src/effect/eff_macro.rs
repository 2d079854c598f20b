//! eff! macro for do-notation style syntax.
//!
//! This module provides the `eff!` macro, which writes a chain of dependent
//! steps as a flat sequence instead of nested `flat_map` closures.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: runs a computation and names its value
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final success value (wrapped with `IOEither::pure`)
//! - `expression` - Final expression (already a computation)
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not valid in Rust's macro patterns, while `<=` is a single token
//! that reads as "bind from".
//!
//! # Captured Values
//!
//! Every bind expands to a `move` closure that may be called once per run.
//! Values bound by earlier steps are moved into the closures of later steps,
//! so using a non-`Copy` value in more than one later step requires an
//! explicit `.clone()`.
//!
//! # Examples
//!
//! ```rust
//! use io_either::eff;
//! use io_either::effect::{Failure, IOEither};
//!
//! let computation: IOEither<i32, Failure> = eff! {
//!     x <= IOEither::pure(1);
//!     y <= IOEither::pure(x + 1);
//!     IOEither::pure(y + 1)
//! };
//! assert_eq!(computation.run(), Ok(3));
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.flat_map(move |pattern| { /* rest */ })
//! ```
//!
//! It relies only on an inherent `flat_map` method, so it works for both
//! [`IO`](crate::effect::IO) and [`IOEither`](crate::effect::IOEither).

#![forbid(unsafe_code)]

/// A macro for monadic do-notation style syntax.
///
/// # Syntax
///
/// ```text
/// eff! {
///     pattern <= computation;    // Bind operation (flat_map)
///     let pattern = expression;  // Pure let binding
///     yield expression           // Final value, or:
///     computation                // Final expression (must be a computation)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use io_either::eff;
/// use io_either::effect::IOEither;
///
/// // Short-circuit on failure
/// let computation: IOEither<i32, String> = eff! {
///     x <= IOEither::pure(5);
///     y <= IOEither::<i32, String>::throw("no y".to_string());
///     yield x + y
/// };
/// assert_eq!(computation.run(), Err("no y".to_string()));
/// ```
#[macro_export]
macro_rules! eff {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Final value wrapped in IOEither::pure
    (yield $result:expr) => {
        $crate::effect::IOEither::pure($result)
    };

    // ==========================================================================
    // Bind operation: pattern <= computation; rest
    // ==========================================================================

    // Bind with identifier pattern
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$pattern| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |($($pattern)*)| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| {
            $crate::eff!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::eff!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::eff!($($rest)+)
        }
    };

    // Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };
}
