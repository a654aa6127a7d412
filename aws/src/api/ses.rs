use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AwsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptFilterPolicy {
    Allow,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptFilter {
    pub name: String,
    pub cidr: String,
    pub policy: ReceiptFilterPolicy,
}

/// Receipt IP filters. SES has no describe call for a single filter, so
/// lookups go through the full list.
#[async_trait]
pub trait SesApi: Send + Sync {
    async fn create_receipt_filter(&self, filter: ReceiptFilter) -> Result<(), AwsError>;

    async fn list_receipt_filters(&self) -> Result<Vec<ReceiptFilter>, AwsError>;

    async fn delete_receipt_filter(&self, name: &str) -> Result<(), AwsError>;
}
