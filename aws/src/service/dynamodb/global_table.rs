use std::collections::BTreeSet;
use tfconverge::Context;

use crate::api::GlobalTableDescription;
use crate::conns::AwsClient;
use crate::error::{Error, Result};

use super::waiter::{wait_global_table_active, wait_global_table_deleted};

pub(crate) const RESOURCE: &str = "DynamoDB Global Table";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalTableState {
    /// The table name
    pub id: String,
    pub arn: String,
    pub regions: BTreeSet<String>,
}

impl From<GlobalTableDescription> for GlobalTableState {
    fn from(output: GlobalTableDescription) -> Self {
        Self {
            id: output.global_table_name,
            arn: output.global_table_arn,
            regions: output.replication_group.into_iter().collect(),
        }
    }
}

/// Replicates a table across the given regions
pub struct GlobalTableResource {
    client: AwsClient,
}

impl GlobalTableResource {
    pub const TYPE_NAME: &'static str = "aws_dynamodb_global_table";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        ctx: &Context,
        name: &str,
        regions: &BTreeSet<String>,
    ) -> Result<GlobalTableState> {
        let api = self.client.dynamodb();
        let regions: Vec<String> = regions.iter().cloned().collect();

        api.create_global_table(name, &regions)
            .await
            .map_err(|e| Error::api("creating", RESOURCE, name, e))?;

        let output = wait_global_table_active(
            ctx,
            api,
            name,
            self.client.timeouts().global_table_create,
            self.client.backoff(),
        )
        .await?;

        tracing::info!(id = name, "Created {}", RESOURCE);
        Ok(output.into())
    }

    pub async fn read(&self, _ctx: &Context, id: &str) -> Result<Option<GlobalTableState>> {
        match self.client.dynamodb().describe_global_table(id).await {
            Ok(output) => Ok(Some(output.into())),
            Err(e) if tfconverge::Classify::is_not_found(&e) => {
                tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
                Ok(None)
            }
            Err(e) => Err(Error::api("reading", RESOURCE, id, e)),
        }
    }

    /// Adds replicas for new regions and drops the ones no longer listed
    pub async fn update(
        &self,
        ctx: &Context,
        id: &str,
        old: &BTreeSet<String>,
        new: &BTreeSet<String>,
    ) -> Result<GlobalTableState> {
        let add: Vec<String> = new.difference(old).cloned().collect();
        let remove: Vec<String> = old.difference(new).cloned().collect();

        if add.is_empty() && remove.is_empty() {
            return self.read(ctx, id).await?.ok_or_else(|| Error::EmptyResponse {
                action: "reading",
                resource: RESOURCE,
                id: id.to_string(),
            });
        }

        let api = self.client.dynamodb();
        tracing::debug!(id, ?add, ?remove, "Updating replica regions");

        api.update_global_table(id, &add, &remove)
            .await
            .map_err(|e| Error::api("updating", RESOURCE, id, e))?;

        let output = wait_global_table_active(
            ctx,
            api,
            id,
            self.client.timeouts().global_table_update,
            self.client.backoff(),
        )
        .await?;

        tracing::info!(id, "Updated {}", RESOURCE);
        Ok(output.into())
    }

    /// Deleting means removing every replica
    pub async fn delete(&self, ctx: &Context, state: &GlobalTableState) -> Result<()> {
        let api = self.client.dynamodb();
        let remove: Vec<String> = state.regions.iter().cloned().collect();

        match api.update_global_table(&state.id, &[], &remove).await {
            Ok(()) => {}
            Err(e) if e.code_equals("GlobalTableNotFoundException") => return Ok(()),
            Err(e) => return Err(Error::api("deleting", RESOURCE, state.id.as_str(), e)),
        }

        wait_global_table_deleted(
            ctx,
            api,
            &state.id,
            self.client.timeouts().global_table_delete,
            self.client.backoff(),
        )
        .await?;

        tracing::info!(id = %state.id, "Deleted {}", RESOURCE);
        Ok(())
    }
}
