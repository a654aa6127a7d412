//! Errors surfaced to the framework boundary
//!
//! Every variant names the resource kind and its ID so the message shown to
//! the user identifies what failed and how.

use tfconverge::{IdError, TagError, WaitError};
use thiserror::Error;

use crate::api::AwsError;
use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Provider not configured")]
    NotConfigured,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not parse ID ({id}): {source}")]
    InvalidId {
        id: String,
        #[source]
        source: IdError,
    },

    #[error("error {action} {resource} ({id}): {source}")]
    Api {
        action: &'static str,
        resource: &'static str,
        id: String,
        #[source]
        source: AwsError,
    },

    #[error("error waiting for {resource} ({id}) {action}: {source}")]
    Wait {
        action: &'static str,
        resource: &'static str,
        id: String,
        #[source]
        source: WaitError<AwsError>,
    },

    #[error("error updating {resource} ({id}) tags: {source}")]
    Tags {
        resource: &'static str,
        id: String,
        #[source]
        source: TagError<AwsError>,
    },

    #[error("{resource} ({id}) reached state {state}: {reason}")]
    Failed {
        resource: &'static str,
        id: String,
        state: String,
        reason: String,
    },

    #[error("error {action} {resource} ({id}): empty response")]
    EmptyResponse {
        action: &'static str,
        resource: &'static str,
        id: String,
    },

    #[error(transparent)]
    Waiter(#[from] tfconverge::ConfigError),
}

impl Error {
    pub(crate) fn api(
        action: &'static str,
        resource: &'static str,
        id: impl Into<String>,
        source: AwsError,
    ) -> Self {
        Error::Api {
            action,
            resource,
            id: id.into(),
            source,
        }
    }

    pub(crate) fn wait(
        action: &'static str,
        resource: &'static str,
        id: impl Into<String>,
        source: WaitError<AwsError>,
    ) -> Self {
        Error::Wait {
            action,
            resource,
            id: id.into(),
            source,
        }
    }

    /// Whether the error means the remote object is gone
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api { source, .. } => tfconverge::Classify::is_not_found(source),
            Error::Wait { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
