use tfconverge::Classify;

use crate::conns::AwsClient;
use crate::error::{Error, Result};

pub(crate) const RESOURCE: &str = "Route53 Query Logging Config";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLog {
    pub id: String,
    pub zone_id: String,
    pub cloudwatch_log_group_arn: String,
}

/// DNS query logging for a hosted zone. Every argument forces a new
/// resource.
pub struct QueryLogResource {
    client: AwsClient,
}

impl QueryLogResource {
    pub const TYPE_NAME: &'static str = "aws_route53_query_log";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, zone_id: &str, log_group_arn: &str) -> Result<QueryLog> {
        let config = self
            .client
            .route53()
            .create_query_logging_config(zone_id, log_group_arn)
            .await
            .map_err(|e| Error::api("creating", RESOURCE, zone_id, e))?;

        tracing::info!(id = %config.id, zone_id, "Created {}", RESOURCE);

        self.read(&config.id)
            .await?
            .ok_or_else(|| Error::EmptyResponse {
                action: "creating",
                resource: RESOURCE,
                id: config.id,
            })
    }

    pub async fn read(&self, id: &str) -> Result<Option<QueryLog>> {
        match self.client.route53().get_query_logging_config(id).await {
            Ok(config) => Ok(Some(QueryLog {
                id: config.id,
                zone_id: config.hosted_zone_id,
                cloudwatch_log_group_arn: config.cloud_watch_logs_log_group_arn,
            })),
            Err(e) if e.is_not_found() => {
                tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
                Ok(None)
            }
            Err(e) => Err(Error::api("reading", RESOURCE, id, e)),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.client.route53().delete_query_logging_config(id).await {
            Ok(()) => {
                tracing::info!(id, "Deleted {}", RESOURCE);
                Ok(())
            }
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(Error::api("deleting", RESOURCE, id, e)),
        }
    }
}
