//! X-Ray resource tags

use tfconverge::{IgnoreConfig, KeyValueTags};

use crate::api::TaggingApi;
use crate::conns::AwsClient;
use crate::error::{Error, Result};
use crate::service::tags;

const RESOURCE: &str = "X-Ray resource";

pub struct XrayTags {
    client: AwsClient,
}

impl XrayTags {
    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    fn api(&self) -> &dyn TaggingApi {
        self.client.xray()
    }

    fn ignore_tags(&self) -> Option<&IgnoreConfig> {
        self.client.ignore_tags()
    }

    /// Tags on the group or sampling rule, minus ignored and reserved keys
    pub async fn list(&self, arn: &str) -> Result<KeyValueTags> {
        let tags = tags::list_tags(self.api(), arn)
            .await
            .map_err(|e| Error::api("listing tags for", RESOURCE, arn, e))?;
        Ok(tags.ignore_config(self.ignore_tags()))
    }

    /// Applies a change of the resource's `tags_all` from `old` to `new`
    pub async fn update(&self, arn: &str, old: &KeyValueTags, new: &KeyValueTags) -> Result<()> {
        let old = old.ignore_config(self.ignore_tags());
        let new = new.ignore_config(self.ignore_tags());

        tags::update_tags(self.api(), arn, &old, &new)
            .await
            .map_err(|source| Error::Tags {
                resource: RESOURCE,
                id: arn.to_string(),
                source,
            })
    }
}
