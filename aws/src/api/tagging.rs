use async_trait::async_trait;
use tfconverge::KeyValueTags;

use super::AwsError;

/// The ListTagsForResource / TagResource / UntagResource trio most services
/// expose, addressed by ARN
#[async_trait]
pub trait TaggingApi: Send + Sync {
    async fn list_tags_for_resource(&self, arn: &str) -> Result<KeyValueTags, AwsError>;

    async fn tag_resource(&self, arn: &str, tags: &KeyValueTags) -> Result<(), AwsError>;

    async fn untag_resource(&self, arn: &str, keys: &[String]) -> Result<(), AwsError>;
}
