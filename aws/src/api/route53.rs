use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AwsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryLoggingConfig {
    pub id: String,
    pub hosted_zone_id: String,
    pub cloud_watch_logs_log_group_arn: String,
}

#[async_trait]
pub trait Route53Api: Send + Sync {
    async fn create_query_logging_config(
        &self,
        hosted_zone_id: &str,
        log_group_arn: &str,
    ) -> Result<QueryLoggingConfig, AwsError>;

    async fn get_query_logging_config(&self, id: &str) -> Result<QueryLoggingConfig, AwsError>;

    async fn delete_query_logging_config(&self, id: &str) -> Result<(), AwsError>;
}
