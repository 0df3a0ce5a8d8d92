//! Backoff interval policies.

use std::time::Duration;

use super::error::InvalidConfiguration;

/// Wait-interval source consulted between attempts.
///
/// An instance is stateful: the exponential variant records the last interval
/// it returned and doubles it on the next call. Scope one instance to one
/// retry loop; the state is not reset between runs and is not synchronized,
/// so sharing across concurrently running loops scrambles the sequence.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    Fixed(Duration),
    Exponential {
        seed: Duration,
        last: Option<Duration>,
    },
}

impl BackoffPolicy {
    /// Policy that returns `interval` on every call.
    pub fn fixed(interval: Duration) -> Result<Self, InvalidConfiguration> {
        if interval.is_zero() {
            return Err(InvalidConfiguration("fixed interval must be greater than 0"));
        }
        Ok(Self {
            kind: Kind::Fixed(interval),
        })
    }

    /// Policy that returns `seed` on the first call, then double the
    /// previously returned interval on each call after that.
    pub fn exponential(seed: Duration) -> Result<Self, InvalidConfiguration> {
        if seed.is_zero() {
            return Err(InvalidConfiguration("start interval must be greater than 0"));
        }
        Ok(Self {
            kind: Kind::Exponential { seed, last: None },
        })
    }

    /// Computes and records the wait before the next attempt.
    ///
    /// Not idempotent for the exponential variant: every call advances the
    /// state, so calls must be issued in strict retry order.
    pub fn next_interval(&mut self) -> Duration {
        match &mut self.kind {
            Kind::Fixed(interval) => *interval,
            Kind::Exponential { seed, last } => {
                let next = match *last {
                    None => *seed,
                    Some(prev) => prev.saturating_mul(2),
                };
                *last = Some(next);
                next
            }
        }
    }
}

impl Default for BackoffPolicy {
    /// Fixed 1000ms, the executor's default.
    fn default() -> Self {
        Self {
            kind: Kind::Fixed(Duration::from_millis(1000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_always_returns_same_interval() {
        let mut p = BackoffPolicy::fixed(Duration::from_millis(250)).unwrap();
        assert_eq!(p.next_interval(), Duration::from_millis(250));
        assert_eq!(p.next_interval(), Duration::from_millis(250));
        assert_eq!(p.next_interval(), Duration::from_millis(250));
    }

    #[test]
    fn exponential_doubles_previously_returned_interval() {
        let mut p = BackoffPolicy::exponential(Duration::from_millis(1000)).unwrap();
        assert_eq!(p.next_interval(), Duration::from_millis(1000));
        assert_eq!(p.next_interval(), Duration::from_millis(2000));
        assert_eq!(p.next_interval(), Duration::from_millis(4000));
        assert_eq!(p.next_interval(), Duration::from_millis(8000));
    }

    #[test]
    fn zero_interval_rejected_at_construction() {
        assert!(BackoffPolicy::fixed(Duration::ZERO).is_err());
        assert!(BackoffPolicy::exponential(Duration::ZERO).is_err());
    }

    #[test]
    fn default_is_fixed_one_second() {
        let mut p = BackoffPolicy::default();
        assert_eq!(p.next_interval(), Duration::from_millis(1000));
        assert_eq!(p.next_interval(), Duration::from_millis(1000));
    }
}
