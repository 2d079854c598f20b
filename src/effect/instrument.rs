//! Internal logging hooks.
//!
//! These macros forward to `tracing` when the `tracing` feature is enabled
//! and expand to nothing otherwise, so call sites stay free of `cfg` noise.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($argument:tt)*) => {
        ::tracing::debug!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($argument:tt)*) => {};
}
