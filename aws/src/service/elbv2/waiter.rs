use std::time::Duration;
use tfconverge::{Backoff, Context, Refresh, StateChangeConf, RESOURCE_ID_SEPARATOR};

use crate::api::{AwsError, Certificate, Elbv2Api};
use crate::error::{Error, Result};

use super::listener_certificate::RESOURCE;

/// Status reported once the certificate is listed on the listener
pub const STATUS_ATTACHED: &str = "ATTACHED";

pub(crate) async fn find_listener_certificate(
    api: &dyn Elbv2Api,
    listener_arn: &str,
    certificate_arn: &str,
) -> std::result::Result<Option<Certificate>, AwsError> {
    let certificates = api.describe_listener_certificates(listener_arn).await?;

    Ok(certificates
        .into_iter()
        .find(|c| c.certificate_arn == certificate_arn && !c.is_default))
}

async fn status_listener_certificate(
    api: &dyn Elbv2Api,
    listener_arn: &str,
    certificate_arn: &str,
) -> std::result::Result<Refresh<Certificate>, AwsError> {
    Ok(find_listener_certificate(api, listener_arn, certificate_arn)
        .await?
        .map_or(Refresh::Absent, |c| Refresh::state(STATUS_ATTACHED, c)))
}

pub async fn wait_listener_certificate_attached(
    ctx: &Context,
    api: &dyn Elbv2Api,
    listener_arn: &str,
    certificate_arn: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<Certificate> {
    let conf = StateChangeConf::builder()
        .target([STATUS_ATTACHED])
        .timeout(timeout)
        .backoff(backoff)
        .build()?;
    let id = [listener_arn, certificate_arn].join(RESOURCE_ID_SEPARATOR);

    conf.wait_for_state(ctx, move || {
        status_listener_certificate(api, listener_arn, certificate_arn)
    })
    .await
    .map_err(|e| Error::wait("to be attached", RESOURCE, id.as_str(), e))?
    .ok_or_else(|| Error::EmptyResponse {
        action: "describing",
        resource: RESOURCE,
        id: id.clone(),
    })
}
