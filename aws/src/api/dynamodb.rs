use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AwsError;

pub mod global_table_status {
    pub const CREATING: &str = "CREATING";
    pub const ACTIVE: &str = "ACTIVE";
    pub const DELETING: &str = "DELETING";
    pub const UPDATING: &str = "UPDATING";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalTableDescription {
    pub global_table_name: String,
    pub global_table_arn: String,
    pub global_table_status: String,
    /// Regions holding a replica
    #[serde(default)]
    pub replication_group: Vec<String>,
}

#[async_trait]
pub trait DynamoDbApi: Send + Sync {
    async fn create_global_table(
        &self,
        name: &str,
        regions: &[String],
    ) -> Result<GlobalTableDescription, AwsError>;

    async fn describe_global_table(&self, name: &str) -> Result<GlobalTableDescription, AwsError>;

    /// Adds and removes replicas in one call
    async fn update_global_table(
        &self,
        name: &str,
        add_regions: &[String],
        remove_regions: &[String],
    ) -> Result<(), AwsError>;
}
