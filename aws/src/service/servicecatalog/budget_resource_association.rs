use tfconverge::{retry, Context, RetryError, WaitError, RESOURCE_ID_SEPARATOR};

use crate::api::AwsError;
use crate::conns::AwsClient;
use crate::error::{Error, Result};

use super::waiter::{
    wait_budget_resource_association_deleted, wait_budget_resource_association_ready,
};
use super::{budget_resource_association_id, budget_resource_association_parse_id};

pub(crate) const RESOURCE: &str = "Service Catalog Budget Resource Association";

fn associate_retry_error(e: AwsError) -> RetryError<AwsError> {
    if e.message_contains("InvalidParametersException", "profile does not exist") {
        RetryError::Retryable(e)
    } else {
        RetryError::classified(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetResourceAssociation {
    pub id: String,
    pub budget_name: String,
    pub resource_id: String,
}

/// Associates a budget with a portfolio or product. Both arguments force a
/// new resource, so there is no update.
pub struct BudgetResourceAssociationResource {
    client: AwsClient,
}

impl BudgetResourceAssociationResource {
    pub const TYPE_NAME: &'static str = "aws_servicecatalog_budget_resource_association";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        ctx: &Context,
        budget_name: &str,
        resource_id: &str,
    ) -> Result<BudgetResourceAssociation> {
        let id = budget_resource_association_id(budget_name, resource_id).map_err(|source| {
            Error::InvalidId {
                id: [budget_name, resource_id].join(RESOURCE_ID_SEPARATOR),
                source,
            }
        })?;
        let api = self.client.service_catalog();

        // A freshly created budget can take a while to become associable
        let result = retry(
            ctx,
            self.client.timeouts().propagation,
            self.client.backoff(),
            move || async move {
                api.associate_budget_with_resource(budget_name, resource_id)
                    .await
                    .map_err(associate_retry_error)
            },
        )
        .await;

        match result {
            Ok(()) => {}
            Err(e) if e.is_timeout() => {
                api.associate_budget_with_resource(budget_name, resource_id)
                    .await
                    .map_err(|e| Error::api("associating", RESOURCE, id.as_str(), e))?;
            }
            Err(WaitError::Unretryable(e)) => {
                return Err(Error::api("associating", RESOURCE, id, e));
            }
            Err(e) => return Err(Error::wait("association", RESOURCE, id, e)),
        }

        tracing::info!(id = %id, "Created {}", RESOURCE);

        self.read(ctx, &id, true)
            .await?
            .ok_or_else(|| Error::EmptyResponse {
                action: "creating",
                resource: RESOURCE,
                id,
            })
    }

    /// Returns `None` when an existing association has disappeared. A new
    /// association that never shows up is an error.
    pub async fn read(
        &self,
        ctx: &Context,
        id: &str,
        is_new: bool,
    ) -> Result<Option<BudgetResourceAssociation>> {
        let (budget_name, resource_id) =
            budget_resource_association_parse_id(id).map_err(|source| Error::InvalidId {
                id: id.to_string(),
                source,
            })?;

        let result = wait_budget_resource_association_ready(
            ctx,
            self.client.service_catalog(),
            &budget_name,
            &resource_id,
            self.client.timeouts().budget_association_ready,
            self.client.backoff(),
        )
        .await;

        match result {
            Ok(detail) => Ok(Some(BudgetResourceAssociation {
                id: id.to_string(),
                budget_name: detail.budget_name,
                resource_id,
            })),
            Err(e) if !is_new && e.is_not_found() => {
                tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, ctx: &Context, id: &str) -> Result<()> {
        let (budget_name, resource_id) =
            budget_resource_association_parse_id(id).map_err(|source| Error::InvalidId {
                id: id.to_string(),
                source,
            })?;
        let api = self.client.service_catalog();

        match api
            .disassociate_budget_from_resource(&budget_name, &resource_id)
            .await
        {
            Ok(()) => {}
            Err(e) if e.code_equals("ResourceNotFoundException") => return Ok(()),
            Err(e) => return Err(Error::api("disassociating", RESOURCE, id, e)),
        }

        wait_budget_resource_association_deleted(
            ctx,
            api,
            &budget_name,
            &resource_id,
            self.client.timeouts().budget_association_deleted,
            self.client.backoff(),
        )
        .await?;

        tracing::info!(id, "Deleted {}", RESOURCE);
        Ok(())
    }
}
