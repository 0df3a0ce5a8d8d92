//! Per-call retry configuration.

use std::time::Duration;

use super::filter::RetryOn;
use super::policy::BackoffPolicy;

/// Parameters for one [`run_with_retry`](crate::retry::run_with_retry) call.
///
/// Owns the backoff policy, including its mutable state, for the duration of
/// the run. Build a fresh config (or at least a fresh policy) per call;
/// reusing an exponential policy continues its interval sequence where the
/// previous run left it.
#[derive(Debug)]
pub struct RetryConfig<E> {
    /// Extra attempts permitted after the first; total attempts = limit + 1.
    pub retry_limit: u32,
    /// Waited once before the first attempt. Counts against the deadline.
    pub initial_delay: Duration,
    /// Interval source consulted between attempts.
    pub backoff: BackoffPolicy,
    /// Adds a uniform random 0-999ms wait after each backoff wait.
    pub use_jitter: bool,
    /// Which failure kinds get another attempt.
    pub retry_on: RetryOn<E>,
    /// Bound on the whole call, initial delay and all waits included.
    /// Zero means unbounded.
    pub max_wait_time: Duration,
}

impl<E> Default for RetryConfig<E> {
    fn default() -> Self {
        Self {
            retry_limit: 3,
            initial_delay: Duration::ZERO,
            backoff: BackoffPolicy::default(),
            use_jitter: false,
            retry_on: RetryOn::All,
            max_wait_time: Duration::ZERO,
        }
    }
}

impl<E> RetryConfig<E> {
    /// Defaults: 3 retries, no initial delay, fixed 1000ms backoff, no
    /// jitter, every failure retryable, no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit;
        self
    }

    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn backoff(mut self, policy: BackoffPolicy) -> Self {
        self.backoff = policy;
        self
    }

    pub fn jitter(mut self, enabled: bool) -> Self {
        self.use_jitter = enabled;
        self
    }

    pub fn retry_on(mut self, filter: RetryOn<E>) -> Self {
        self.retry_on = filter;
        self
    }

    /// Retry only failures the predicate accepts.
    pub fn retry_if(mut self, pred: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        self.retry_on = RetryOn::Matching(Box::new(pred));
        self
    }

    pub fn max_wait_time(mut self, bound: Duration) -> Self {
        self.max_wait_time = bound;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg: RetryConfig<()> = RetryConfig::new();
        assert_eq!(cfg.retry_limit, 3);
        assert_eq!(cfg.initial_delay, Duration::ZERO);
        assert!(!cfg.use_jitter);
        assert_eq!(cfg.max_wait_time, Duration::ZERO);
        assert!(matches!(cfg.retry_on, RetryOn::All));
    }
}
