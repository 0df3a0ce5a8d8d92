//! Retryable-failure classification.

use std::fmt;

/// Decides whether a failure is worth another attempt.
///
/// A predicate over the failure value stands in for runtime type checks:
/// callers map their error enum (or status codes, IO error kinds, etc.) into
/// a retryable/unretryable decision. A rejected failure propagates
/// immediately without consuming the retry budget.
pub enum RetryOn<E> {
    /// Retry any failure (the default).
    All,
    /// Retry only failures the predicate accepts.
    Matching(Box<dyn Fn(&E) -> bool + Send + Sync>),
}

impl<E> RetryOn<E> {
    /// True when `error` should trigger another attempt.
    pub fn matches(&self, error: &E) -> bool {
        match self {
            RetryOn::All => true,
            RetryOn::Matching(pred) => pred(error),
        }
    }
}

impl<E> Default for RetryOn<E> {
    fn default() -> Self {
        RetryOn::All
    }
}

impl<E> fmt::Debug for RetryOn<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryOn::All => f.write_str("All"),
            RetryOn::Matching(_) => f.write_str("Matching(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let filter: RetryOn<&str> = RetryOn::All;
        assert!(filter.matches(&"timeout"));
        assert!(filter.matches(&"disk full"));
    }

    #[test]
    fn predicate_accepts_and_rejects() {
        let filter: RetryOn<u32> = RetryOn::Matching(Box::new(|code| *code >= 500));
        assert!(filter.matches(&503));
        assert!(!filter.matches(&404));
    }
}
