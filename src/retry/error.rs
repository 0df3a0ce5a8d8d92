//! Failure taxonomy for the retry executor.

use std::time::Duration;
use thiserror::Error;

/// A backoff policy was handed a zero interval.
///
/// Raised synchronously at construction time, never mid-retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid configuration: {0}")]
pub struct InvalidConfiguration(pub &'static str);

/// Error returned by [`run_with_retry`](crate::retry::run_with_retry).
///
/// `E` is the operation's own failure type. `Unretryable` and
/// `RetriesExhausted` carry it unchanged, so the original message survives
/// wrapping; `Display` forwards to it.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// The failure kind did not match the retry filter; propagated
    /// immediately, regardless of attempts remaining.
    #[error("{0}")]
    Unretryable(E),
    /// Every permitted attempt failed with a retryable kind. Carries the
    /// last failure observed; earlier ones in the sequence are discarded.
    #[error("{last}")]
    RetriesExhausted {
        /// Total attempts made (retry limit + 1).
        attempts: u32,
        /// The failure from the final attempt.
        last: E,
    },
    /// The overall deadline elapsed before success or terminal failure.
    #[error("timed out after {}ms", .limit.as_millis())]
    DeadlineExceeded {
        /// The configured `max_wait_time` bound.
        limit: Duration,
    },
    /// Rejected backoff policy parameters, surfaced through `?`.
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
}

impl<E> RetryError<E> {
    /// The operation's own failure, when this error wraps one.
    pub fn inner(&self) -> Option<&E> {
        match self {
            RetryError::Unretryable(e) | RetryError::RetriesExhausted { last: e, .. } => Some(e),
            RetryError::DeadlineExceeded { .. } | RetryError::InvalidConfiguration(_) => None,
        }
    }

    /// Consumes the error and returns the wrapped operation failure, if any.
    pub fn into_inner(self) -> Option<E> {
        match self {
            RetryError::Unretryable(e) | RetryError::RetriesExhausted { last: e, .. } => Some(e),
            RetryError::DeadlineExceeded { .. } | RetryError::InvalidConfiguration(_) => None,
        }
    }
}
