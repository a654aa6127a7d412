//! Elastic Load Balancing v2

pub mod listener_certificate;
pub mod waiter;

pub use listener_certificate::{ListenerCertificate, ListenerCertificateResource};

use tfconverge::{create_resource_id, parse_resource_id, IdError, RESOURCE_ID_SEPARATOR};

/// ID of a listener certificate: `listener_arn,certificate_arn`. ARNs never
/// contain a comma.
pub fn listener_certificate_id(
    listener_arn: &str,
    certificate_arn: &str,
) -> Result<String, IdError> {
    create_resource_id(&[listener_arn, certificate_arn])
}

pub fn listener_certificate_parse_id(id: &str) -> Result<(String, String), IdError> {
    match parse_resource_id(id, 2)?.as_slice() {
        [listener_arn, certificate_arn] => Ok((listener_arn.clone(), certificate_arn.clone())),
        _ => Err(IdError::UnexpectedFormat {
            id: id.to_string(),
            expected: 2,
            separator: RESOURCE_ID_SEPARATOR,
        }),
    }
}
