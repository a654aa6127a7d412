use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AwsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BudgetDetail {
    pub budget_name: String,
}

#[async_trait]
pub trait ServiceCatalogApi: Send + Sync {
    async fn associate_budget_with_resource(
        &self,
        budget_name: &str,
        resource_id: &str,
    ) -> Result<(), AwsError>;

    async fn disassociate_budget_from_resource(
        &self,
        budget_name: &str,
        resource_id: &str,
    ) -> Result<(), AwsError>;

    /// Budgets currently associated with a portfolio or product
    async fn list_budgets_for_resource(
        &self,
        resource_id: &str,
    ) -> Result<Vec<BudgetDetail>, AwsError>;
}
