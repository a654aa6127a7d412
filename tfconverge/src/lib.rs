//! tfconverge - convergence helpers for Terraform providers
//!
//! Waiters that poll eventually-consistent control planes until a change is
//! observable, a retry helper, tag set reconciliation, and composite
//! resource identifiers.

pub mod backoff;
pub mod context;
pub mod error;
pub mod id;
pub mod reconcile;
pub mod retry;
pub mod tags;
pub mod waiter;

pub use backoff::Backoff;
pub use context::Context;
pub use error::{Classify, ConfigError, ErrorKind, IdError, TagError, WaitError};
pub use id::{create_resource_id, parse_resource_id, RESOURCE_ID_SEPARATOR};
pub use reconcile::{update_tags, TagUpdater};
pub use retry::{retry, RetryError};
pub use tags::{DefaultConfig, IgnoreConfig, KeyValueTags, TagDiff};
pub use waiter::{Refresh, StateChangeConf, StateChangeConfBuilder};
