//! Cancellation context for long-running waits
//!
//! A [`Context`] carries a cancel signal and an optional deadline across async
//! boundaries. Waiters check it before every poll and race it against every
//! sleep, so a cancelled operation returns at the next check point.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, Instant};

/// Request-scoped cancellation signal with an optional deadline
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    deadline: Option<Instant>,
    done: watch::Receiver<bool>,
    done_tx: watch::Sender<bool>,
}

impl Context {
    pub fn new() -> Self {
        let (done_tx, done_rx) = watch::channel(false);

        Self {
            inner: Arc::new(ContextInner {
                deadline: None,
                done: done_rx,
                done_tx,
            }),
        }
    }

    /// Returns a context that is cancelled once `timeout` has elapsed.
    /// Must be called from within a tokio runtime.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        let deadline = match self.inner.deadline {
            Some(parent) if parent < deadline => parent,
            _ => deadline,
        };

        let (done_tx, done_rx) = watch::channel(self.is_cancelled());

        let timer_tx = done_tx.clone();
        let mut parent_done = self.done();
        tokio::spawn(async move {
            tokio::select! {
                _ = time::sleep_until(deadline) => {}
                _ = wait_true(&mut parent_done) => {}
                // every handle to the context is gone
                _ = timer_tx.closed() => return,
            }
            let _ = timer_tx.send(true);
        });

        Self {
            inner: Arc::new(ContextInner {
                deadline: Some(deadline),
                done: done_rx,
                done_tx,
            }),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.done.borrow()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// Time left before the deadline, `None` when the context has no deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.inner
            .deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Returns a receiver that flips to `true` when work done on behalf of
    /// this context should stop
    pub fn done(&self) -> watch::Receiver<bool> {
        self.inner.done.clone()
    }

    /// Resolves once the context is cancelled. Never resolves otherwise.
    pub async fn cancelled(&self) {
        let mut done = self.done();
        wait_true(&mut done).await;
    }

    pub fn cancel(&self) {
        let _ = self.inner.done_tx.send(true);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

async fn wait_true(done: &mut watch::Receiver<bool>) {
    while !*done.borrow_and_update() {
        if done.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
