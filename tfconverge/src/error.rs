//! Error types for tfconverge

use std::time::Duration;

/// How a failed remote call should be treated by a waiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote object does not exist
    NotFound,
    /// Network trouble or throttling, safe to retry
    Transient,
    /// Will not fix itself by retrying (validation, authorization, ...)
    Unretryable,
}

/// Implemented by API errors so waiters can decide whether to keep polling
pub trait Classify {
    fn classify(&self) -> ErrorKind;

    fn is_not_found(&self) -> bool {
        self.classify() == ErrorKind::NotFound
    }

    fn is_transient(&self) -> bool {
        self.classify() == ErrorKind::Transient
    }
}

/// Failure of a convergence wait or a retried operation
#[derive(Debug, thiserror::Error)]
pub enum WaitError<E>
where
    E: std::error::Error + 'static,
{
    #[error("couldn't find resource (timeout: {timeout:?})")]
    NotFound {
        timeout: Duration,
        #[source]
        last_error: Option<E>,
    },

    #[error("unexpected state '{state}', wanted target '{}'", expected.join(", "))]
    UnexpectedState { state: String, expected: Vec<String> },

    #[error(
        "timeout while waiting for state to become '{}' (last state: '{}', timeout: {timeout:?})",
        expected.join(", "),
        last_state.as_deref().unwrap_or("")
    )]
    Timeout {
        expected: Vec<String>,
        last_state: Option<String>,
        timeout: Duration,
        #[source]
        last_error: Option<E>,
    },

    #[error(transparent)]
    Unretryable(E),

    #[error("operation cancelled")]
    Cancelled,
}

impl<E> WaitError<E>
where
    E: std::error::Error + 'static,
{
    pub fn is_not_found(&self) -> bool {
        matches!(self, WaitError::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout { .. })
    }

    /// The underlying API error, if the wait ended because of one
    pub fn last_error(&self) -> Option<&E> {
        match self {
            WaitError::NotFound { last_error, .. } | WaitError::Timeout { last_error, .. } => {
                last_error.as_ref()
            }
            WaitError::Unretryable(e) => Some(e),
            WaitError::UnexpectedState { .. } | WaitError::Cancelled => None,
        }
    }
}

/// Invalid waiter construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("state '{0}' is both a target and a failure state")]
    OverlappingStates(String),

    #[error("no target states given and absence is not accepted as done")]
    NoTarget,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Failure of a tag update, naming the tagged resource
#[derive(Debug, thiserror::Error)]
pub enum TagError<E>
where
    E: std::error::Error + 'static,
{
    #[error("error untagging resource ({identifier}): {source}")]
    Untag { identifier: String, source: E },

    #[error("error tagging resource ({identifier}): {source}")]
    Tag { identifier: String, source: E },
}

/// Malformed composite resource identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("unexpected format for ID ({id}), expected {expected} parts separated by '{separator}'")]
    UnexpectedFormat {
        id: String,
        expected: usize,
        separator: &'static str,
    },

    #[error("ID part {index} is empty")]
    EmptyPart { index: usize },

    #[error("ID part {index} ({part}) contains the separator '{separator}'")]
    SeparatorInPart {
        index: usize,
        part: String,
        separator: &'static str,
    },
}
