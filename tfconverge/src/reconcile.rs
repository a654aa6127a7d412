//! Tag reconciliation
//!
//! Converges the tags on a remote object from an old set to a new set with at
//! most two calls: one untag for removed keys, one tag for added or changed
//! values. Reserved `aws:` keys are never touched.

use async_trait::async_trait;

use crate::error::TagError;
use crate::tags::KeyValueTags;

/// The tag/untag call pair of a service
#[async_trait]
pub trait TagUpdater: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn untag(&self, identifier: &str, keys: &[String]) -> Result<(), Self::Error>;

    async fn tag(&self, identifier: &str, tags: &KeyValueTags) -> Result<(), Self::Error>;
}

/// Applies the difference between `old` and `new` to `identifier`.
///
/// Removals go first. Errors are returned as soon as a call fails; retrying
/// is up to the caller.
pub async fn update_tags<U>(
    updater: &U,
    identifier: &str,
    old: &KeyValueTags,
    new: &KeyValueTags,
) -> Result<(), TagError<U::Error>>
where
    U: TagUpdater + ?Sized,
{
    let diff = old.ignore_aws().diff(&new.ignore_aws());

    if diff.is_empty() {
        tracing::debug!(identifier, "Tags already up to date");
        return Ok(());
    }

    if !diff.removed.is_empty() {
        let keys: Vec<String> = diff.removed.into_iter().collect();
        tracing::debug!(identifier, ?keys, "Removing tags");
        updater
            .untag(identifier, &keys)
            .await
            .map_err(|source| TagError::Untag {
                identifier: identifier.to_string(),
                source,
            })?;
    }

    if !diff.changed.is_empty() {
        tracing::debug!(identifier, count = diff.changed.len(), "Updating tags");
        updater
            .tag(identifier, &diff.changed)
            .await
            .map_err(|source| TagError::Tag {
                identifier: identifier.to_string(),
                source,
            })?;
    }

    Ok(())
}
