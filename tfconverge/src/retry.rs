//! Retry an operation until it stops failing with retryable errors

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use crate::backoff::Backoff;
use crate::context::Context;
use crate::error::{Classify, ErrorKind, WaitError};
use crate::waiter::sleep_or_cancel;

/// Outcome of one failed attempt
#[derive(Debug)]
pub enum RetryError<E> {
    Retryable(E),
    NonRetryable(E),
}

impl<E: Classify> RetryError<E> {
    /// Retry transient errors, give up on everything else
    pub fn classified(err: E) -> Self {
        match err.classify() {
            ErrorKind::Transient => RetryError::Retryable(err),
            ErrorKind::NotFound | ErrorKind::Unretryable => RetryError::NonRetryable(err),
        }
    }
}

/// Runs `f` until it succeeds, fails with a non-retryable error, the
/// context is cancelled or `timeout` elapses.
///
/// On timeout the last retryable error is attached to
/// [`WaitError::Timeout`]; callers may check [`WaitError::is_timeout`] and
/// make one final attempt.
pub async fn retry<T, E, F, Fut>(
    ctx: &Context,
    timeout: Duration,
    backoff: Backoff,
    mut f: F,
) -> Result<T, WaitError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RetryError<E>>>,
    E: std::error::Error + 'static,
{
    let deadline = Instant::now() + timeout;
    let mut attempt: u32 = 0;
    let mut last_error: Option<E> = None;

    loop {
        if ctx.is_cancelled() {
            return Err(WaitError::Cancelled);
        }
        attempt += 1;

        let outcome = tokio::select! {
            biased;
            outcome = f() => outcome,
            _ = ctx.cancelled() => return Err(WaitError::Cancelled),
            _ = tokio::time::sleep_until(deadline) => {
                tracing::debug!(attempt, "Attempt still running at deadline");
                return Err(timed_out(timeout, last_error));
            }
        };

        match outcome {
            Ok(value) => return Ok(value),
            Err(RetryError::NonRetryable(e)) => return Err(WaitError::Unretryable(e)),
            Err(RetryError::Retryable(e)) => {
                tracing::debug!(attempt, error = %e, "Retrying after retryable error");
                last_error = Some(e);
            }
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(timed_out(timeout, last_error));
        }

        sleep_or_cancel::<E>(ctx, backoff.delay(attempt).min(deadline - now)).await?;
    }
}

fn timed_out<E>(timeout: Duration, last_error: Option<E>) -> WaitError<E>
where
    E: std::error::Error + 'static,
{
    WaitError::Timeout {
        expected: vec!["success".to_string()],
        last_state: last_error.as_ref().map(|_| "retryable error".to_string()),
        timeout,
        last_error,
    }
}
