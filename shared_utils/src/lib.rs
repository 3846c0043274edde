//! Bounded exponential backoff for probing a dependency that may still be starting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio_retry::{strategy::ExponentialBackoff, RetryIf};
use tracing::{debug, info, warn};

/// Backoff schedule for [`probe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub initial_delay_millis: u64,
    pub max_delay_secs: u64,
    pub max_retries: u32,
}

impl Backoff {
    #[must_use]
    pub const fn new(initial_delay_millis: u64, max_delay_secs: u64, max_retries: u32) -> Self {
        Self {
            initial_delay_millis,
            max_delay_secs,
            max_retries,
        }
    }

    /// Total attempts including the first one.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_retries as usize + 1
    }

    fn strategy(&self) -> impl Iterator<Item = Duration> + Clone {
        ExponentialBackoff::from_millis(self.initial_delay_millis)
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .take(self.max_retries as usize)
    }
}

impl Default for Backoff {
    /// Roughly ten seconds of patience spread over five retries.
    fn default() -> Self {
        Self {
            initial_delay_millis: 200,
            max_delay_secs: 4,
            max_retries: 5,
        }
    }
}

/// Result of a [`probe`]: the final outcome and how many attempts it took.
#[derive(Debug)]
pub struct Probe<T, E> {
    pub attempts: usize,
    pub outcome: Result<T, E>,
}

impl<T, E> Probe<T, E> {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs `operation` until it succeeds, `retryable` rejects the error, or the schedule
/// runs out. Never panics and never fails harder than the last attempt did.
pub async fn probe<F, Fut, T, E, R>(
    target: &str,
    backoff: Backoff,
    mut operation: F,
    retryable: R,
) -> Probe<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    R: FnMut(&E) -> bool,
{
    let attempts = AtomicUsize::new(0);
    let outcome = RetryIf::spawn(
        backoff.strategy(),
        || {
            let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(target_name = target, attempt, "Probing");
            operation()
        },
        retryable,
    )
    .await;

    let attempts = attempts.into_inner();
    match &outcome {
        Ok(_) => info!(target_name = target, attempts, "Probe succeeded"),
        Err(err) => warn!(target_name = target, attempts, error = %err, "Probe gave up"),
    }

    Probe { attempts, outcome }
}
