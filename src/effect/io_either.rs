//! `IOEither` - deferred side effects with fail-fast error handling.
//!
//! `IOEither<A, E>` is the combination of [`IO`] and `Result<A, E>`: a
//! description of work that, when run, performs its side effects and either
//! succeeds with an `A` or fails with an `E`.
//!
//! # Overview
//!
//! - **Deferral**: constructing or composing an `IOEither` never executes
//!   anything. Only [`IOEither::run`] does.
//! - **Fail-fast**: in a chain built with [`IOEither::flat_map`], the first
//!   failure is returned as-is and every later step is skipped.
//! - **Re-runnable**: `run` takes `&self`. Each call executes the whole chain
//!   again, including all side effects. Results are never cached.
//! - **Stack depth**: every bind adds a stack frame when the chain runs, so a
//!   chain of many thousands of `flat_map` steps can overflow the stack.
//!
//! Because a computation may be run many times, the closures it stores are
//! `Fn` rather than `FnOnce`, and values captured by [`IOEither::pure`] and
//! [`IOEither::throw`] are cloned on every run.
//!
//! # Relationship with `ExceptT`
//!
//! Conceptually this is `ExceptT<E, IO<Result<A, E>>>` collapsed into one
//! type, so that the bind step receives the unwrapped success value directly.
//! [`IOEither::to_io`] and [`IOEither::lift_io`] convert between the two
//! views.
//!
//! # Examples
//!
//! ```rust
//! use io_either::effect::{Failure, IOEither};
//!
//! fn parse(input: &'static str) -> IOEither<i32, Failure> {
//!     IOEither::new(move || {
//!         input
//!             .parse::<i32>()
//!             .map_err(|error| Failure::new(error.to_string()))
//!     })
//! }
//!
//! let sum = parse("40").flat_map(|x| parse("2").fmap(move |y| x + y));
//! assert_eq!(sum.run(), Ok(42));
//!
//! let broken = parse("forty").flat_map(|x| parse("2").fmap(move |y| x + y));
//! assert!(broken.run().is_err());
//! ```

#![forbid(unsafe_code)]

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use super::{Failure, IO};

/// A deferred computation that may fail.
///
/// # Type Parameters
///
/// - `A`: The success type
/// - `E`: The failure type (defaults to [`Failure`])
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IOEither::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IOEither::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # `MonadError` Laws
///
/// 1. **Throw Short-Circuit**: `IOEither::throw(e).flat_map(f) == IOEither::throw(e)`
/// 2. **Throw Catch**: `IOEither::catch(IOEither::throw(e), h) == h(e)`
/// 3. **Catch Pure**: `IOEither::catch(IOEither::pure(a), h) == IOEither::pure(a)`
///
/// # Examples
///
/// ```rust
/// use io_either::effect::{Failure, IOEither};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let calls = Rc::new(Cell::new(0));
/// let calls_clone = Rc::clone(&calls);
///
/// let computation: IOEither<i32, Failure> = IOEither::new(move || {
///     calls_clone.set(calls_clone.get() + 1);
///     Ok(calls_clone.get())
/// });
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(computation.run(), Ok(1));
/// assert_eq!(computation.run(), Ok(2));
/// ```
pub struct IOEither<A, E = Failure> {
    /// The wrapped thunk. Shared so that composed computations can run it
    /// any number of times.
    run_either: Rc<dyn Fn() -> Result<A, E>>,
}

// =============================================================================
// Construction and Execution
// =============================================================================

impl<A, E> IOEither<A, E>
where
    A: 'static,
    E: 'static,
{
    /// Wraps a thunk producing a tagged outcome.
    ///
    /// The thunk is not called here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::new(|| Ok(42));
    /// assert_eq!(computation.run(), Ok(42));
    /// ```
    #[must_use]
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> Result<A, E> + 'static,
    {
        Self {
            run_either: Rc::new(thunk),
        }
    }

    /// Creates a computation that succeeds with `value` without side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::pure(42);
    /// assert_eq!(computation.run(), Ok(42));
    /// ```
    #[must_use]
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || Ok(value.clone()))
    }

    /// Alias for [`IOEither::pure`].
    #[must_use]
    pub fn right(value: A) -> Self
    where
        A: Clone,
    {
        Self::pure(value)
    }

    /// Creates a computation that fails with `error` without side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::throw("error".to_string());
    /// assert_eq!(computation.run(), Err("error".to_string()));
    /// ```
    #[must_use]
    pub fn throw(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move || Err(error.clone()))
    }

    /// Alias for [`IOEither::throw`].
    #[must_use]
    pub fn left(error: E) -> Self
    where
        E: Clone,
    {
        Self::throw(error)
    }

    /// Lifts an already computed `Result`.
    #[must_use]
    pub fn from_result(result: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        Self::new(move || result.clone())
    }

    /// Lifts an infallible [`IO`] as a computation that always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::{IO, IOEither};
    ///
    /// let computation: IOEither<i32, String> = IOEither::lift_io(IO::new(|| 7));
    /// assert_eq!(computation.run(), Ok(7));
    /// ```
    #[must_use]
    pub fn lift_io(io: IO<A>) -> Self {
        Self::new(move || Ok(io.run_unsafe()))
    }

    /// Executes the computation and returns its tagged outcome.
    ///
    /// All side effects in the chain run on the calling thread, once per
    /// call. A failure is returned as `Err`; it is never raised as a panic.
    ///
    /// # Errors
    ///
    /// Returns the failure of the first step in the chain that failed.
    pub fn run(&self) -> Result<A, E> {
        trace_event!("running IOEither");
        (self.run_either)()
    }

    /// Views the computation as an infallible [`IO`] producing a `Result`.
    #[must_use]
    pub fn to_io(self) -> IO<Result<A, E>> {
        let original = self.run_either;
        IO::new(move || original())
    }
}

// =============================================================================
// Composition
// =============================================================================

impl<A, E> IOEither<A, E>
where
    A: 'static,
    E: 'static,
{
    /// Transforms the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::pure(21).fmap(|x| x * 2);
    /// assert_eq!(computation.run(), Ok(42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IOEither<B, E>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_either;
        IOEither::new(move || original().map(&function))
    }

    /// Transforms the failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::throw("bad".to_string());
    /// let mapped = computation.map_error(|error| error.len());
    /// assert_eq!(mapped.run(), Err(3));
    /// ```
    pub fn map_error<E2, F>(self, function: F) -> IOEither<A, E2>
    where
        F: Fn(E) -> E2 + 'static,
        E2: 'static,
    {
        let original = self.run_either;
        IOEither::new(move || original().map_err(&function))
    }

    /// Chains a computation that depends on the success value of this one.
    ///
    /// When run, this computation runs first. If it fails, the failure is
    /// returned and `function` is never called. Otherwise `function` receives
    /// the success value and the computation it returns is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::pure(1)
    ///     .flat_map(|x| IOEither::pure(x + 1))
    ///     .flat_map(|y| IOEither::pure(y + 1));
    /// assert_eq!(computation.run(), Ok(3));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IOEither<B, E>
    where
        F: Fn(A) -> IOEither<B, E> + 'static,
        B: 'static,
    {
        let original = self.run_either;
        IOEither::new(move || match original() {
            Ok(value) => function(value).run(),
            Err(error) => {
                debug_event!("IOEither chain short-circuited on failure");
                Err(error)
            }
        })
    }

    /// Alias for [`IOEither::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IOEither<B, E>
    where
        F: Fn(A) -> IOEither<B, E> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first success value.
    ///
    /// `next` only runs when this computation succeeds.
    #[must_use]
    pub fn then<B>(self, next: IOEither<B, E>) -> IOEither<B, E>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both computations in order and combines their success values.
    ///
    /// `other` is not run when this computation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let first: IOEither<i32, String> = IOEither::pure(10);
    /// let combined = first.map2(IOEither::pure(20), |a, b| a + b);
    /// assert_eq!(combined.run(), Ok(30));
    /// ```
    pub fn map2<B, C, F>(self, other: IOEither<B, E>, function: F) -> IOEither<C, E>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_either;
        let second = other.run_either;
        IOEither::new(move || {
            let a = first()?;
            let b = second()?;
            Ok(function(a, b))
        })
    }

    /// Runs both computations in order and pairs their success values.
    #[must_use]
    pub fn product<B>(self, other: IOEither<B, E>) -> IOEither<(A, B), E>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl<A, E> IOEither<A, E>
where
    A: 'static,
    E: 'static,
{
    /// Recovers from a failure with another computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let failing: IOEither<i32, String> = IOEither::throw("error".to_string());
    /// let recovered = IOEither::catch(failing, |error| IOEither::pure(error.len() as i32));
    /// assert_eq!(recovered.run(), Ok(5));
    /// ```
    pub fn catch<F>(computation: Self, handler: F) -> Self
    where
        F: Fn(E) -> Self + 'static,
    {
        let original = computation.run_either;
        Self::new(move || original().or_else(|error| handler(error).run()))
    }

    /// Recovers from a failure with a plain value.
    pub fn handle_error<F>(computation: Self, handler: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        let original = computation.run_either;
        Self::new(move || Ok(original().unwrap_or_else(&handler)))
    }

    /// Fails with `error()` when the success value does not satisfy
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::pure(-1);
    /// let checked = IOEither::ensure(computation, || "negative".to_string(), |x| *x >= 0);
    /// assert_eq!(checked.run(), Err("negative".to_string()));
    /// ```
    pub fn ensure<F, P>(computation: Self, error: F, predicate: P) -> Self
    where
        F: Fn() -> E + 'static,
        P: Fn(&A) -> bool + 'static,
    {
        Self::ensure_or(computation, move |_| error(), predicate)
    }

    /// Like [`IOEither::ensure`], but the error is built from the rejected
    /// value.
    pub fn ensure_or<F, P>(computation: Self, error_function: F, predicate: P) -> Self
    where
        F: Fn(&A) -> E + 'static,
        P: Fn(&A) -> bool + 'static,
    {
        let original = computation.run_either;
        Self::new(move || {
            let value = original()?;
            if predicate(&value) {
                Ok(value)
            } else {
                Err(error_function(&value))
            }
        })
    }

    /// Collapses both outcomes into an infallible [`IO`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let computation: IOEither<i32, String> = IOEither::throw("bad".to_string());
    /// let message = computation.fold(|error| format!("failed: {error}"), |x| format!("ok: {x}"));
    /// assert_eq!(message.run_unsafe(), "failed: bad");
    /// ```
    pub fn fold<B, Recover, Transform>(self, on_failure: Recover, on_success: Transform) -> IO<B>
    where
        Recover: Fn(E) -> B + 'static,
        Transform: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_either;
        IO::new(move || match original() {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        })
    }
}

// =============================================================================
// Collections
// =============================================================================

impl<A, E> IOEither<A, E>
where
    A: 'static,
    E: 'static,
{
    /// Runs computations left to right and collects their success values.
    ///
    /// Stops at the first failure; later computations are not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let all: IOEither<Vec<i32>, String> =
    ///     IOEither::sequence_vec(vec![IOEither::pure(1), IOEither::pure(2)]);
    /// assert_eq!(all.run(), Ok(vec![1, 2]));
    /// ```
    pub fn sequence_vec(computations: Vec<Self>) -> IOEither<Vec<A>, E> {
        IOEither::new(move || computations.iter().map(Self::run).collect())
    }

    /// Maps each item to a computation and sequences them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IOEither;
    ///
    /// let halves: IOEither<Vec<i32>, String> = IOEither::traverse(vec![2, 4, 6], |n| {
    ///     if n % 2 == 0 {
    ///         IOEither::pure(n / 2)
    ///     } else {
    ///         IOEither::throw(format!("{n} is odd"))
    ///     }
    /// });
    /// assert_eq!(halves.run(), Ok(vec![1, 2, 3]));
    /// ```
    pub fn traverse<T, F>(items: Vec<T>, function: F) -> IOEither<Vec<A>, E>
    where
        T: Clone + 'static,
        F: Fn(T) -> Self + 'static,
    {
        IOEither::new(move || {
            items
                .iter()
                .cloned()
                .map(|item| function(item).run())
                .collect()
        })
    }
}

// =============================================================================
// Panic Conversion
// =============================================================================

impl<A: 'static> IOEither<A, Failure> {
    /// Wraps a thunk that may panic.
    ///
    /// A panic during `run` is caught and returned as a [`Failure`] carrying
    /// the panic message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::{Failure, IOEither};
    ///
    /// let computation: IOEither<i32> = IOEither::attempt(|| panic!("oops"));
    /// assert_eq!(computation.run(), Err(Failure::new("oops")));
    /// ```
    pub fn attempt<F>(thunk: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(move || {
            catch_unwind(AssertUnwindSafe(&thunk)).map_err(|payload| {
                let failure = Failure::from_panic(payload.as_ref());
                debug_event!(panic = %failure.message(), "IOEither thunk panicked");
                failure
            })
        })
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A: 'static, E: 'static> From<IO<A>> for IOEither<A, E> {
    fn from(io: IO<A>) -> Self {
        Self::lift_io(io)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<A, E> Clone for IOEither<A, E> {
    fn clone(&self) -> Self {
        Self {
            run_either: Rc::clone(&self.run_either),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A, E> std::fmt::Display for IOEither<A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<IOEither>")
    }
}

static_assertions::assert_impl_all!(IOEither<i32, Failure>: Clone);
static_assertions::assert_not_impl_any!(IOEither<i32, Failure>: Send, Sync);
