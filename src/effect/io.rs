//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until `run_unsafe` is called, maintaining
//! referential transparency in pure code.
//!
//! Unlike a one-shot closure, an `IO` is a description that can be executed
//! any number of times. Every call to `run_unsafe` performs the effects again;
//! nothing is cached.
//! Each `flat_map` adds a stack frame at run time, so very deep chains (tens of
//! thousands of binds) can overflow the stack.
//!
//! # Examples
//!
//! ```rust
//! use io_either::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::pure(42);
//! assert_eq!(io.run_unsafe(), 42);
//!
//! // Chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use io_either::effect::IO;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//! let counter_clone = counter.clone();
//!
//! let io = IO::new(move || counter_clone.fetch_add(1, Ordering::SeqCst) + 1);
//!
//! // Not executed yet
//! assert_eq!(counter.load(Ordering::SeqCst), 0);
//!
//! // Every run executes the effect again
//! assert_eq!(io.run_unsafe(), 1);
//! assert_eq!(io.run_unsafe(), 2);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;
use std::time::Duration;

use super::Failure;

/// A monad representing deferred side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until `run_unsafe`
/// is called, and it is executed again on every call.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    /// The wrapped computation. Shared so that composed actions can hold
    /// on to it without consuming it.
    run_io: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let io = IO::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// let result = io.run_unsafe();
    /// // Now "Side effect!" is printed
    /// assert_eq!(result, 42);
    /// ```
    #[must_use]
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// The value is cloned on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    #[must_use]
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the IO action and returns the result.
    ///
    /// This is the only way to extract a value from an IO action.
    /// It should be called at the program's "edge" (e.g., in `main`).
    ///
    /// # Safety Note
    ///
    /// This method is named `run_unsafe` to indicate that it executes
    /// side effects. While it's memory-safe, calling it breaks referential
    /// transparency.
    pub fn run_unsafe(&self) -> A {
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_io;
        IO::new(move || function(original()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        let original = self.run_io;
        IO::new(move || {
            let a = original();
            function(a).run_unsafe()
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    #[must_use]
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two IO actions using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.run_io;
        let second = other.run_io;
        IO::new(move || {
            let a = first();
            let b = second();
            function(a, b)
        })
    }

    /// Combines two IO actions into a tuple.
    #[must_use]
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Catches panics in an IO action and converts them to a recovery value.
    ///
    /// If the IO action panics, the handler is called with the panic message
    /// and its return value replaces the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    ///
    /// let panicking = IO::new(|| -> String { panic!("oops") });
    /// let recovered = IO::catch(panicking, |message| format!("recovered from {message}"));
    /// assert_eq!(recovered.run_unsafe(), "recovered from oops");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        Self::new(move || match catch_unwind(AssertUnwindSafe(|| io.run_unsafe())) {
            Ok(value) => value,
            Err(payload) => {
                let failure = Failure::from_panic(payload.as_ref());
                debug_event!(panic = %failure.message(), "IO action panicked");
                handler(failure.message().to_string())
            }
        })
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl IO<()> {
    /// Creates an IO action that prints a line to standard output.
    ///
    /// The output is printed on every run, never at construction.
    #[must_use]
    pub fn print_line<S: std::fmt::Display + 'static>(message: S) -> Self {
        Self::new(move || {
            println!("{message}");
        })
    }

    /// Creates an IO action that waits for a specified duration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use io_either::effect::IO;
    /// use std::time::Duration;
    ///
    /// let io = IO::delay(Duration::from_millis(1));
    /// io.run_unsafe();
    /// ```
    #[must_use]
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || {
            std::thread::sleep(duration);
        })
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A> std::fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<IO>")
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
