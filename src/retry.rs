//! Bounded retry with a backoff schedule.
//!
//! Two shapes are supported:
//! - [`retry_lookup`] polls for something that may not exist yet (a control
//!   rendered after the code that wants to wire it up).
//! - [`retry_when`] re-runs a fallible async operation while its error is
//!   classified as transient.
//!
//! Both try once immediately, then retry up to `max_retries` times with the
//! policy's delay before each retry, and log when they give up.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::timer::sleep;

/// How the delay grows between retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backoff {
    /// `base * n` before the n-th retry (50, 100, 150 ms for a 50 ms base)
    Linear,
    /// `base * 2^(n-1)` before the n-th retry (100, 200, 400 ms for a 100 ms base)
    Exponential,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub base_delay: Duration,
    pub backoff: Backoff,
}

/// Controls that mount after the code wiring them (theme toggle, injected markup)
pub const LATE_MOUNT: RetryPolicy = RetryPolicy::linear(3, Duration::from_millis(50));

/// Listen socket still held by a previous process
pub const SOCKET_BIND: RetryPolicy = RetryPolicy::exponential(3, Duration::from_millis(100));

impl RetryPolicy {
    pub const fn linear(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            backoff: Backoff::Linear,
        }
    }

    pub const fn exponential(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            backoff: Backoff::Exponential,
        }
    }

    /// Delay before the given retry (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let retry = retry.max(1);
        match self.backoff {
            Backoff::Linear => self.base_delay.saturating_mul(retry),
            Backoff::Exponential => self
                .base_delay
                .saturating_mul(2u32.saturating_pow(retry - 1)),
        }
    }

    /// Full delay schedule, one entry per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..=self.max_retries).map(|retry| self.delay_for(retry))
    }
}

/// Poll `probe` until it yields a value or the policy is exhausted.
///
/// `what` names the thing being looked for in log output.
pub async fn retry_lookup<T, F>(what: &str, policy: &RetryPolicy, mut probe: F) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    if let Some(found) = probe() {
        return Some(found);
    }

    for (retry, delay) in (1..).zip(policy.delays()) {
        tracing::info!("Retrying {}... ({}/{})", what, retry, policy.max_retries);
        sleep(delay).await;
        if let Some(found) = probe() {
            return Some(found);
        }
    }

    tracing::warn!("Failed to find {} after maximum retries", what);
    None
}

/// Run `op`, retrying while `is_transient` classifies the error as worth another try.
///
/// Non-transient errors are returned immediately; the last transient error is
/// returned once the policy is exhausted.
pub async fn retry_when<T, E, F, Fut, P>(
    what: &str,
    policy: &RetryPolicy,
    mut op: F,
    is_transient: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: Display,
{
    let mut delays = policy.delays();
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if is_transient(&e) => match delays.next() {
                Some(delay) => {
                    tracing::warn!("{} failed: {}, retrying in {:?}", what, e, delay);
                    sleep(delay).await;
                }
                None => {
                    tracing::warn!("{} failed after {} retries: {}", what, policy.max_retries, e);
                    return Err(e);
                }
            },
            Err(e) => return Err(e),
        }
    }
}
