use std::time::Duration;
use tfconverge::{Backoff, Context, Refresh, StateChangeConf};

use crate::api::{global_table_status, AwsError, DynamoDbApi, GlobalTableDescription};
use crate::error::{Error, Result};

use super::global_table::RESOURCE;

async fn status_global_table(
    api: &dyn DynamoDbApi,
    name: &str,
) -> std::result::Result<Refresh<GlobalTableDescription>, AwsError> {
    let output = api.describe_global_table(name).await?;
    Ok(Refresh::state(output.global_table_status.clone(), output))
}

/// Waits for a create or update to settle
pub async fn wait_global_table_active(
    ctx: &Context,
    api: &dyn DynamoDbApi,
    name: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<GlobalTableDescription> {
    let conf = StateChangeConf::builder()
        .pending([global_table_status::CREATING, global_table_status::UPDATING])
        .target([global_table_status::ACTIVE])
        .timeout(timeout)
        .backoff(backoff)
        .build()?;

    conf.wait_for_state(ctx, move || status_global_table(api, name))
        .await
        .map_err(|e| Error::wait("to become active", RESOURCE, name, e))?
        .ok_or_else(|| Error::EmptyResponse {
            action: "describing",
            resource: RESOURCE,
            id: name.to_string(),
        })
}

pub async fn wait_global_table_deleted(
    ctx: &Context,
    api: &dyn DynamoDbApi,
    name: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<()> {
    let conf = StateChangeConf::builder()
        .pending([
            global_table_status::ACTIVE,
            global_table_status::UPDATING,
            global_table_status::DELETING,
        ])
        .absence_means_done(true)
        .timeout(timeout)
        .backoff(backoff)
        .build()?;

    conf.wait_for_state(ctx, move || status_global_table(api, name))
        .await
        .map_err(|e| Error::wait("to be deleted", RESOURCE, name, e))?;

    Ok(())
}
