use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AwsError;

pub mod image_version_status {
    pub const CREATING: &str = "CREATING";
    pub const CREATED: &str = "CREATED";
    pub const CREATE_FAILED: &str = "CREATE_FAILED";
    pub const DELETING: &str = "DELETING";
    pub const DELETE_FAILED: &str = "DELETE_FAILED";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateImageVersionInput {
    pub base_image: String,
    pub image_name: String,
    /// Makes retried creates idempotent
    pub client_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageVersion {
    pub image_version_arn: String,
    pub image_arn: String,
    pub base_image: String,
    #[serde(default)]
    pub container_image: Option<String>,
    pub version: i64,
    #[serde(rename = "ImageVersionStatus")]
    pub status: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

#[async_trait]
pub trait SageMakerApi: Send + Sync {
    /// Returns the new image version ARN
    async fn create_image_version(&self, input: CreateImageVersionInput)
        -> Result<String, AwsError>;

    /// Latest version of the named image
    async fn describe_image_version(&self, image_name: &str) -> Result<ImageVersion, AwsError>;

    async fn delete_image_version(&self, image_name: &str, version: i64) -> Result<(), AwsError>;
}
