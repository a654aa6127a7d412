//! Composite resource identifiers
//!
//! Some remote objects are addressed by several fields. Their Terraform ID is
//! the fields joined with [`RESOURCE_ID_SEPARATOR`].

use crate::error::IdError;

pub const RESOURCE_ID_SEPARATOR: &str = ",";

/// Joins `parts` into one ID. Fails if a part is empty or contains the
/// separator, since such an ID could not be parsed back.
pub fn create_resource_id(parts: &[&str]) -> Result<String, IdError> {
    for (index, part) in parts.iter().enumerate() {
        if part.is_empty() {
            return Err(IdError::EmptyPart { index });
        }
        if part.contains(RESOURCE_ID_SEPARATOR) {
            return Err(IdError::SeparatorInPart {
                index,
                part: part.to_string(),
                separator: RESOURCE_ID_SEPARATOR,
            });
        }
    }

    Ok(parts.join(RESOURCE_ID_SEPARATOR))
}

/// Splits an ID made by [`create_resource_id`] into exactly `expected` parts
pub fn parse_resource_id(id: &str, expected: usize) -> Result<Vec<String>, IdError> {
    let parts: Vec<String> = id.split(RESOURCE_ID_SEPARATOR).map(str::to_string).collect();

    if parts.len() != expected || parts.iter().any(String::is_empty) {
        return Err(IdError::UnexpectedFormat {
            id: id.to_string(),
            expected,
            separator: RESOURCE_ID_SEPARATOR,
        });
    }

    Ok(parts)
}
