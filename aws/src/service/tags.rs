//! Adapts a service's tagging calls to the tag reconciler

use async_trait::async_trait;
use tfconverge::{KeyValueTags, TagError, TagUpdater};

use crate::api::{AwsError, TaggingApi};

pub struct ServiceTagger<'a, T: ?Sized> {
    api: &'a T,
}

impl<'a, T: TaggingApi + ?Sized> ServiceTagger<'a, T> {
    pub fn new(api: &'a T) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<'a, T: TaggingApi + ?Sized> TagUpdater for ServiceTagger<'a, T> {
    type Error = AwsError;

    async fn untag(&self, identifier: &str, keys: &[String]) -> Result<(), AwsError> {
        self.api.untag_resource(identifier, keys).await
    }

    async fn tag(&self, identifier: &str, tags: &KeyValueTags) -> Result<(), AwsError> {
        self.api.tag_resource(identifier, tags).await
    }
}

/// Lists the tags on `identifier`, without AWS-reserved keys
pub async fn list_tags<T>(api: &T, identifier: &str) -> Result<KeyValueTags, AwsError>
where
    T: TaggingApi + ?Sized,
{
    Ok(api.list_tags_for_resource(identifier).await?.ignore_aws())
}

/// Converges the tags on `identifier` from `old` to `new`
pub async fn update_tags<T>(
    api: &T,
    identifier: &str,
    old: &KeyValueTags,
    new: &KeyValueTags,
) -> Result<(), TagError<AwsError>>
where
    T: TaggingApi + ?Sized,
{
    tfconverge::update_tags(&ServiceTagger::new(api), identifier, old, new).await
}
