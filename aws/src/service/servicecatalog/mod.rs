//! Service Catalog

pub mod budget_resource_association;
pub mod waiter;

pub use budget_resource_association::{
    BudgetResourceAssociation, BudgetResourceAssociationResource,
};

use tfconverge::{create_resource_id, parse_resource_id, IdError, RESOURCE_ID_SEPARATOR};

/// ID of a budget association: `budget_name,resource_id`
pub fn budget_resource_association_id(
    budget_name: &str,
    resource_id: &str,
) -> Result<String, IdError> {
    create_resource_id(&[budget_name, resource_id])
}

/// Splits a budget association ID into `(budget_name, resource_id)`
pub fn budget_resource_association_parse_id(id: &str) -> Result<(String, String), IdError> {
    match parse_resource_id(id, 2)?.as_slice() {
        [budget_name, resource_id] => Ok((budget_name.clone(), resource_id.clone())),
        _ => Err(IdError::UnexpectedFormat {
            id: id.to_string(),
            expected: 2,
            separator: RESOURCE_ID_SEPARATOR,
        }),
    }
}
