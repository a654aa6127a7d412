use std::time::Duration;
use tfconverge::{Backoff, Context, Refresh, StateChangeConf, RESOURCE_ID_SEPARATOR};

use crate::api::{AwsError, BudgetDetail, ServiceCatalogApi};
use crate::error::{Error, Result};

use super::budget_resource_association::RESOURCE;

/// Status reported once the association is visible
pub const STATUS_AVAILABLE: &str = "AVAILABLE";

async fn status_budget_resource_association(
    api: &dyn ServiceCatalogApi,
    budget_name: &str,
    resource_id: &str,
) -> std::result::Result<Refresh<BudgetDetail>, AwsError> {
    let budgets = api.list_budgets_for_resource(resource_id).await?;

    Ok(budgets
        .into_iter()
        .find(|b| b.budget_name == budget_name)
        .map_or(Refresh::Absent, |b| Refresh::state(STATUS_AVAILABLE, b)))
}

pub async fn wait_budget_resource_association_ready(
    ctx: &Context,
    api: &dyn ServiceCatalogApi,
    budget_name: &str,
    resource_id: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<BudgetDetail> {
    let conf = StateChangeConf::builder()
        .target([STATUS_AVAILABLE])
        .timeout(timeout)
        .backoff(backoff)
        .build()?;
    let id = [budget_name, resource_id].join(RESOURCE_ID_SEPARATOR);

    conf.wait_for_state(ctx, move || {
        status_budget_resource_association(api, budget_name, resource_id)
    })
    .await
    .map_err(|e| Error::wait("to become ready", RESOURCE, id.as_str(), e))?
    .ok_or_else(|| Error::EmptyResponse {
        action: "describing",
        resource: RESOURCE,
        id: id.clone(),
    })
}

pub async fn wait_budget_resource_association_deleted(
    ctx: &Context,
    api: &dyn ServiceCatalogApi,
    budget_name: &str,
    resource_id: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<()> {
    let conf = StateChangeConf::builder()
        .pending([STATUS_AVAILABLE])
        .absence_means_done(true)
        .timeout(timeout)
        .backoff(backoff)
        .build()?;

    conf.wait_for_state(ctx, move || {
        status_budget_resource_association(api, budget_name, resource_id)
    })
    .await
    .map_err(|e| {
        Error::wait(
            "to be deleted",
            RESOURCE,
            [budget_name, resource_id].join(RESOURCE_ID_SEPARATOR),
            e,
        )
    })?;

    Ok(())
}
