use tfconverge::{retry, Classify, Context, RetryError, WaitError, RESOURCE_ID_SEPARATOR};

use crate::api::AwsError;
use crate::conns::AwsClient;
use crate::error::{Error, Result};

use super::waiter::{find_listener_certificate, wait_listener_certificate_attached};
use super::{listener_certificate_id, listener_certificate_parse_id};

pub(crate) const RESOURCE: &str = "ELBv2 Listener Certificate";

// IAM server certificates are not visible to ELB straight after upload
fn add_retry_error(e: AwsError) -> RetryError<AwsError> {
    if e.code_equals("CertificateNotFound") {
        RetryError::Retryable(e)
    } else {
        RetryError::classified(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerCertificate {
    pub id: String,
    pub listener_arn: String,
    pub certificate_arn: String,
}

/// Attaches an additional certificate to an HTTPS or TLS listener
pub struct ListenerCertificateResource {
    client: AwsClient,
}

impl ListenerCertificateResource {
    pub const TYPE_NAME: &'static str = "aws_lb_listener_certificate";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        ctx: &Context,
        listener_arn: &str,
        certificate_arn: &str,
    ) -> Result<ListenerCertificate> {
        let id = listener_certificate_id(listener_arn, certificate_arn).map_err(|source| {
            Error::InvalidId {
                id: [listener_arn, certificate_arn].join(RESOURCE_ID_SEPARATOR),
                source,
            }
        })?;
        let api = self.client.elbv2();
        let certificates = [certificate_arn.to_string()];
        let certificates = &certificates;

        let result = retry(
            ctx,
            self.client.timeouts().propagation,
            self.client.backoff(),
            move || async move {
                api.add_listener_certificates(listener_arn, certificates)
                    .await
                    .map_err(add_retry_error)
            },
        )
        .await;

        match result {
            Ok(()) => {}
            Err(e) if e.is_timeout() => {
                api.add_listener_certificates(listener_arn, certificates)
                    .await
                    .map_err(|e| Error::api("adding", RESOURCE, id.as_str(), e))?;
            }
            Err(WaitError::Unretryable(e)) => {
                return Err(Error::api("adding", RESOURCE, id, e));
            }
            Err(e) => return Err(Error::wait("attachment", RESOURCE, id, e)),
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

    /// A new certificate is polled until the listener lists it. An existing
    /// one that is gone, or whose listener is gone, reads as `None`.
    pub async fn read(
        &self,
        ctx: &Context,
        id: &str,
        is_new: bool,
    ) -> Result<Option<ListenerCertificate>> {
        let (listener_arn, certificate_arn) =
            listener_certificate_parse_id(id).map_err(|source| Error::InvalidId {
                id: id.to_string(),
                source,
            })?;
        let api = self.client.elbv2();

        let found = if is_new {
            wait_listener_certificate_attached(
                ctx,
                api,
                &listener_arn,
                &certificate_arn,
                self.client.timeouts().propagation,
                self.client.backoff(),
            )
            .await
            .map(Some)?
        } else {
            match find_listener_certificate(api, &listener_arn, &certificate_arn).await {
                Ok(found) => found,
                Err(e) if e.is_not_found() => None,
                Err(e) => return Err(Error::api("reading", RESOURCE, id, e)),
            }
        };

        let Some(certificate) = found else {
            tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
            return Ok(None);
        };

        Ok(Some(ListenerCertificate {
            id: id.to_string(),
            listener_arn,
            certificate_arn: certificate.certificate_arn,
        }))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let (listener_arn, certificate_arn) =
            listener_certificate_parse_id(id).map_err(|source| Error::InvalidId {
                id: id.to_string(),
                source,
            })?;

        match self
            .client
            .elbv2()
            .remove_listener_certificates(&listener_arn, &[certificate_arn])
            .await
        {
            Ok(()) => {
                tracing::info!(id, "Deleted {}", RESOURCE);
                Ok(())
            }
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(Error::api("removing", RESOURCE, id, e)),
        }
    }
}
