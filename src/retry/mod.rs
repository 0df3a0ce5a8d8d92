//! Retry and backoff policy.
//!
//! This module encapsulates the whole retry state machine: attempt counting,
//! backoff timing, jitter, selective failure filtering, and enforcement of an
//! overall deadline across the attempt sequence. Waits suspend on the tokio
//! timer; deadline expiry cancels whatever attempt or wait is in flight.

mod config;
mod error;
mod filter;
mod policy;
mod run;

pub use config::RetryConfig;
pub use error::{InvalidConfiguration, RetryError};
pub use filter::RetryOn;
pub use policy::BackoffPolicy;
pub use run::run_with_retry;
