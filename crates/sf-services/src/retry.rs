//! Fetch-with-backoff
//!
//! The single retry policy of the client: a list fetch that fails with HTTP 429 is
//! retried after a delay that doubles on every attempt, until the retry budget runs
//! out. Any other error stops immediately. Mutations never go through here.
//!
//! Every request and every backoff wait is raced against a [`CancellationToken`], so a
//! chain started for a view that has since been closed ends without producing a result.

use std::future::Future;
use std::time::Duration;

use sf_core::config::RetryConfig;
use sf_core::error::{SfError, SfResult};
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Retry budget and starting delay for a list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt
    pub retries: u32,
    /// Wait before the first retry
    pub initial_delay: Duration,
}

impl RetryPolicy {
    pub fn new(retries: u32, initial_delay: Duration) -> Self {
        Self {
            retries,
            initial_delay,
        }
    }

    /// Fail on the first error, whatever its status
    pub fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryConfig::default().into()
    }
}

impl From<RetryConfig> for RetryPolicy {
    fn from(config: RetryConfig) -> Self {
        Self::new(config.retries, config.initial_delay())
    }
}

/// Where a fetch chain currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
    /// Rate limited; sleeping before retry number `attempt`
    Waiting { attempt: u32, delay: Duration },
    Error,
}

impl FetchPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Fetching | Self::Waiting { .. })
    }
}

/// How a fetch chain ended
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Fetched(T),
    Failed(SfError),
    /// The token fired; the result, if any, must not be applied
    Cancelled,
}

impl<T> FetchOutcome<T> {
    pub fn into_result(self) -> SfResult<T> {
        match self {
            Self::Fetched(value) => Ok(value),
            Self::Failed(err) => Err(err),
            Self::Cancelled => Err(SfError::Cancelled),
        }
    }
}

pub async fn fetch_with_backoff<T, F, Fut>(
    op: F,
    policy: RetryPolicy,
    cancel: &CancellationToken,
) -> FetchOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SfResult<T>>,
{
    fetch_with_backoff_observed(op, policy, cancel, |_| {}).await
}

/// [`fetch_with_backoff`], reporting every phase change to `observe`
pub async fn fetch_with_backoff_observed<T, F, Fut, O>(
    mut op: F,
    policy: RetryPolicy,
    cancel: &CancellationToken,
    mut observe: O,
) -> FetchOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SfResult<T>>,
    O: FnMut(FetchPhase),
{
    let mut retries = policy.retries;
    let mut delay = policy.initial_delay;
    let mut attempt: u32 = 1;

    loop {
        observe(FetchPhase::Fetching);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return FetchOutcome::Cancelled,
            result = op() => result,
        };

        match result {
            Ok(value) => {
                observe(FetchPhase::Idle);
                return FetchOutcome::Fetched(value);
            }
            Err(err) if err.is_rate_limited() && retries > 0 => {
                warn!(
                    attempt,
                    retries_left = retries,
                    delay_ms = delay.as_millis() as u64,
                    "rate limited, retrying in {}ms",
                    delay.as_millis()
                );
                observe(FetchPhase::Waiting { attempt, delay });

                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return FetchOutcome::Cancelled,
                    _ = tokio::time::sleep(delay) => {}
                }

                retries -= 1;
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
            Err(err) => {
                observe(FetchPhase::Error);
                return FetchOutcome::Failed(err);
            }
        }
    }
}
