//! Retry-with-timeout execution wrapper.
//!
//! Re-invokes a fallible async operation under a configurable backoff policy
//! until it succeeds, the retry budget runs out, an overall deadline elapses,
//! or an unretryable failure occurs. The operation is an opaque unit of work
//! supplied by the caller; nothing here knows about transports or persistence.

pub mod retry;

pub use retry::{
    run_with_retry, BackoffPolicy, InvalidConfiguration, RetryConfig, RetryError, RetryOn,
};
