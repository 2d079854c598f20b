//! Error payload for failed computations.
//!
//! [`Failure`] is the default error type of [`IOEither`](super::IOEither).
//! It carries a human-readable description and nothing else: there is a
//! single failure kind, and callers that need a richer taxonomy bring their
//! own error type instead.

use thiserror::Error;

/// A descriptive failure value.
///
/// # Examples
///
/// ```rust
/// use io_either::effect::Failure;
///
/// let failure = Failure::new("division by zero");
/// assert_eq!(failure.message(), "division by zero");
/// assert_eq!(format!("{failure}"), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Creates a failure with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts a caught panic payload into a failure.
    ///
    /// String payloads (from `panic!("...")`) keep their text; anything else
    /// becomes `"Unknown panic"`.
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
