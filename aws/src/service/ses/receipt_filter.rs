use tfconverge::Classify;

use crate::api::{ReceiptFilter, ReceiptFilterPolicy};
use crate::conns::AwsClient;
use crate::error::{Error, Result};

pub(crate) const RESOURCE: &str = "SES Receipt Filter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFilterState {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub policy: ReceiptFilterPolicy,
}

/// An IP address filter applied to all incoming mail. The filter name is
/// the ID.
pub struct ReceiptFilterResource {
    client: AwsClient,
}

impl ReceiptFilterResource {
    pub const TYPE_NAME: &'static str = "aws_ses_receipt_filter";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        name: &str,
        cidr: &str,
        policy: ReceiptFilterPolicy,
    ) -> Result<ReceiptFilterState> {
        self.client
            .ses()
            .create_receipt_filter(ReceiptFilter {
                name: name.to_string(),
                cidr: cidr.to_string(),
                policy,
            })
            .await
            .map_err(|e| Error::api("creating", RESOURCE, name, e))?;

        tracing::info!(id = name, "Created {}", RESOURCE);

        self.read(name).await?.ok_or_else(|| Error::EmptyResponse {
            action: "creating",
            resource: RESOURCE,
            id: name.to_string(),
        })
    }

    pub async fn read(&self, id: &str) -> Result<Option<ReceiptFilterState>> {
        let filters = self
            .client
            .ses()
            .list_receipt_filters()
            .await
            .map_err(|e| Error::api("listing", RESOURCE, id, e))?;

        let Some(filter) = filters.into_iter().find(|f| f.name == id) else {
            tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
            return Ok(None);
        };

        Ok(Some(ReceiptFilterState {
            id: id.to_string(),
            name: filter.name,
            cidr: filter.cidr,
            policy: filter.policy,
        }))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.client.ses().delete_receipt_filter(id).await {
            Ok(()) => {
                tracing::info!(id, "Deleted {}", RESOURCE);
                Ok(())
            }
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(Error::api("deleting", RESOURCE, id, e)),
        }
    }
}
