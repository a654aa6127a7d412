//! Convergence waiter
//!
//! Polls a refresh function until the remote object reaches one of the
//! target states, hits a failure state, or the timeout runs out. Every
//! per-resource "wait until ready/deleted" helper is a [`StateChangeConf`]
//! plus a refresh closure.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use crate::backoff::Backoff;
use crate::context::Context;
use crate::error::{Classify, ConfigError, ErrorKind, WaitError};

/// Result of one refresh call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh<T> {
    /// The remote object does not exist (yet, or any more)
    Absent,
    /// The remote object exists and reports `state`
    State { state: String, value: T },
}

impl<T> Refresh<T> {
    pub fn state(state: impl Into<String>, value: T) -> Self {
        Refresh::State {
            state: state.into(),
            value,
        }
    }
}

/// A validated polling request. Build one with [`StateChangeConf::builder`].
#[derive(Debug, Clone)]
pub struct StateChangeConf {
    pending: Vec<String>,
    target: Vec<String>,
    failure: Vec<String>,
    timeout: Duration,
    delay: Duration,
    backoff: Backoff,
    absence_means_done: bool,
}

#[derive(Debug, Clone)]
pub struct StateChangeConfBuilder {
    pending: Vec<String>,
    target: Vec<String>,
    failure: Vec<String>,
    timeout: Duration,
    delay: Duration,
    backoff: Backoff,
    absence_means_done: bool,
}

impl Default for StateChangeConfBuilder {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            target: Vec::new(),
            failure: Vec::new(),
            timeout: Duration::from_secs(120),
            delay: Duration::ZERO,
            backoff: Backoff::default(),
            absence_means_done: false,
        }
    }
}

impl StateChangeConfBuilder {
    /// States that mean "still working". When set, any other non-target,
    /// non-failure state is reported as unexpected.
    pub fn pending<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn target<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target = states.into_iter().map(Into::into).collect();
        self
    }

    /// States that abort polling immediately
    pub fn failure<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failure = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Wait before the first poll
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.backoff = Backoff::Fixed(interval);
        self
    }

    pub fn backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Treat a missing remote object as success (deletion waits)
    pub fn absence_means_done(mut self, done: bool) -> Self {
        self.absence_means_done = done;
        self
    }

    pub fn build(self) -> Result<StateChangeConf, ConfigError> {
        if let Some(state) = self.target.iter().find(|s| self.failure.contains(s)) {
            return Err(ConfigError::OverlappingStates(state.clone()));
        }
        if self.target.is_empty() && !self.absence_means_done {
            return Err(ConfigError::NoTarget);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(StateChangeConf {
            pending: self.pending,
            target: self.target,
            failure: self.failure,
            timeout: self.timeout,
            delay: self.delay,
            backoff: self.backoff,
            absence_means_done: self.absence_means_done,
        })
    }
}

impl StateChangeConf {
    pub fn builder() -> StateChangeConfBuilder {
        StateChangeConfBuilder::default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Polls `refresh` until a target state is observed.
    ///
    /// Returns `Ok(Some(value))` for a target state and `Ok(None)` when the
    /// object is absent and absence was declared acceptable.
    pub async fn wait_for_state<T, E, F, Fut>(
        &self,
        ctx: &Context,
        mut refresh: F,
    ) -> Result<Option<T>, WaitError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Refresh<T>, E>>,
        E: Classify + std::error::Error + 'static,
    {
        let deadline = Instant::now() + self.timeout;

        if !self.delay.is_zero() {
            sleep_or_cancel(ctx, self.delay).await?;
        }

        let mut attempt: u32 = 0;
        let mut last_state: Option<String> = None;
        let mut last_error: Option<E> = None;
        let mut absent = false;

        loop {
            if ctx.is_cancelled() {
                return Err(WaitError::Cancelled);
            }
            attempt += 1;

            // A stalled refresh still ends at the deadline
            let outcome = tokio::select! {
                biased;
                outcome = refresh() => outcome,
                _ = ctx.cancelled() => return Err(WaitError::Cancelled),
                _ = tokio::time::sleep_until(deadline) => {
                    tracing::debug!(attempt, "Refresh still running at deadline");
                    return Err(self.timed_out(absent, last_state, last_error));
                }
            };

            match outcome {
                Ok(Refresh::State { state, value }) => {
                    tracing::debug!(attempt, state = %state, "Refreshed remote state");
                    if self.failure.contains(&state) {
                        return Err(WaitError::UnexpectedState {
                            state,
                            expected: self.target.clone(),
                        });
                    }
                    if self.target.contains(&state) {
                        return Ok(Some(value));
                    }
                    if !self.pending.is_empty() && !self.pending.contains(&state) {
                        return Err(WaitError::UnexpectedState {
                            state,
                            expected: self.target.clone(),
                        });
                    }
                    absent = false;
                    last_error = None;
                    last_state = Some(state);
                }
                Ok(Refresh::Absent) => {
                    tracing::debug!(attempt, "Remote object not found");
                    if self.absence_means_done {
                        return Ok(None);
                    }
                    absent = true;
                    last_error = None;
                }
                Err(e) => match e.classify() {
                    ErrorKind::NotFound => {
                        tracing::debug!(attempt, error = %e, "Remote object not found");
                        if self.absence_means_done {
                            return Ok(None);
                        }
                        absent = true;
                        last_error = Some(e);
                    }
                    ErrorKind::Transient => {
                        tracing::debug!(attempt, error = %e, "Transient error while refreshing");
                        last_error = Some(e);
                    }
                    ErrorKind::Unretryable => return Err(WaitError::Unretryable(e)),
                },
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(self.timed_out(absent, last_state, last_error));
            }

            let wait = self.backoff.delay(attempt).min(deadline - now);
            sleep_or_cancel(ctx, wait).await?;
        }
    }

    fn timed_out<E>(
        &self,
        absent: bool,
        last_state: Option<String>,
        last_error: Option<E>,
    ) -> WaitError<E>
    where
        E: std::error::Error + 'static,
    {
        if absent {
            WaitError::NotFound {
                timeout: self.timeout,
                last_error,
            }
        } else {
            WaitError::Timeout {
                expected: self.target.clone(),
                last_state,
                timeout: self.timeout,
                last_error,
            }
        }
    }
}

/// Sleeps for `duration` unless the context is cancelled first
pub(crate) async fn sleep_or_cancel<E>(ctx: &Context, duration: Duration) -> Result<(), WaitError<E>>
where
    E: std::error::Error + 'static,
{
    tokio::select! {
        _ = tokio::time::sleep(duration) => Ok(()),
        _ = ctx.cancelled() => Err(WaitError::Cancelled),
    }
}
