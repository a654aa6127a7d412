use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AwsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Certificate {
    pub certificate_arn: String,
    /// The listener's default certificate is listed too
    #[serde(default)]
    pub is_default: bool,
}

/// Additional certificates of a load balancer listener
#[async_trait]
pub trait Elbv2Api: Send + Sync {
    async fn add_listener_certificates(
        &self,
        listener_arn: &str,
        certificate_arns: &[String],
    ) -> Result<(), AwsError>;

    async fn describe_listener_certificates(
        &self,
        listener_arn: &str,
    ) -> Result<Vec<Certificate>, AwsError>;

    async fn remove_listener_certificates(
        &self,
        listener_arn: &str,
        certificate_arns: &[String],
    ) -> Result<(), AwsError>;
}
