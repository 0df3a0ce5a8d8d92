//! Retry loop: run an async operation until success or a terminal failure.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::{sleep, timeout};

use super::config::RetryConfig;
use super::error::RetryError;

/// Runs `operation` under `config` until it succeeds, the retry budget is
/// exhausted, the filter rejects a failure, or the deadline elapses.
///
/// The first attempt runs after `initial_delay`; up to `retry_limit` further
/// attempts follow, each preceded by a backoff wait and, when jitter is
/// enabled, an extra uniform random 0-999ms wait (backoff first, then jitter;
/// never merged). No wait follows the final attempt. With a nonzero
/// `max_wait_time` the whole sequence races a deadline; expiry cancels the
/// in-flight attempt or wait by dropping its future and yields
/// [`RetryError::DeadlineExceeded`] citing the bound.
pub async fn run_with_retry<T, E, F, Fut>(
    config: RetryConfig<E>,
    operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    if config.max_wait_time.is_zero() {
        return attempt_loop(config, operation).await;
    }
    let limit = config.max_wait_time;
    match timeout(limit, attempt_loop(config, operation)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(RetryError::DeadlineExceeded { limit }),
    }
}

/// The bounded attempt sequence, without deadline enforcement.
///
/// Structured so the last failure is returned from inside the loop; there is
/// no "no failure recorded" state to represent.
async fn attempt_loop<T, E, F, Fut>(
    mut config: RetryConfig<E>,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    sleep(config.initial_delay).await;

    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if !config.retry_on.matches(&e) {
                    tracing::debug!("attempt {} failed with unretryable kind: {}", attempt, e);
                    return Err(RetryError::Unretryable(e));
                }
                if attempt > config.retry_limit {
                    tracing::warn!("giving up after {} attempts: {}", attempt, e);
                    return Err(RetryError::RetriesExhausted { attempts: attempt, last: e });
                }
                let wait = config.backoff.next_interval();
                tracing::debug!("attempt {} failed ({}), next attempt in {:?}", attempt, e, wait);
                sleep(wait).await;
                if config.use_jitter {
                    sleep(jitter_wait()).await;
                }
            }
        }
        attempt += 1;
    }
}

/// Uniform random wait in [0, 1000) ms, layered on top of the backoff wait
/// to desynchronize concurrent retriers.
fn jitter_wait() -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(0..1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_under_one_second() {
        for _ in 0..100 {
            assert!(jitter_wait() < Duration::from_millis(1000));
        }
    }
}
