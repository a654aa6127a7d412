use tfconverge::Context;

use crate::api::{CreateImageVersionInput, ImageVersion};
use crate::conns::AwsClient;
use crate::error::{Error, Result};

use super::waiter::{wait_image_version_created, wait_image_version_deleted};

pub(crate) const RESOURCE: &str = "SageMaker Image Version";

/// Observed state of the latest version of an image. The ID is the image name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVersionState {
    pub id: String,
    pub arn: String,
    pub image_arn: String,
    pub base_image: String,
    pub container_image: Option<String>,
    pub version: i64,
}

impl ImageVersionState {
    fn from_output(image_name: &str, output: ImageVersion) -> Self {
        Self {
            id: image_name.to_string(),
            arn: output.image_version_arn,
            image_arn: output.image_arn,
            base_image: output.base_image,
            container_image: output.container_image,
            version: output.version,
        }
    }
}

pub struct ImageVersionResource {
    client: AwsClient,
}

impl ImageVersionResource {
    pub const TYPE_NAME: &'static str = "aws_sagemaker_image_version";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        ctx: &Context,
        image_name: &str,
        base_image: &str,
    ) -> Result<ImageVersionState> {
        let api = self.client.sagemaker();
        let input = CreateImageVersionInput {
            base_image: base_image.to_string(),
            image_name: image_name.to_string(),
            client_token: uuid::Uuid::new_v4().to_string(),
        };

        let arn = api
            .create_image_version(input)
            .await
            .map_err(|e| Error::api("creating", RESOURCE, image_name, e))?;
        tracing::debug!(arn = %arn, "Image version creation started");

        let output = wait_image_version_created(
            ctx,
            api,
            image_name,
            self.client.timeouts().image_version_created,
            self.client.backoff(),
        )
        .await?;

        tracing::info!(id = image_name, version = output.version, "Created {}", RESOURCE);
        Ok(ImageVersionState::from_output(image_name, output))
    }

    pub async fn read(&self, _ctx: &Context, id: &str) -> Result<Option<ImageVersionState>> {
        match self.client.sagemaker().describe_image_version(id).await {
            Ok(output) => Ok(Some(ImageVersionState::from_output(id, output))),
            Err(e) if tfconverge::Classify::is_not_found(&e) => {
                tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
                Ok(None)
            }
            Err(e) => Err(Error::api("reading", RESOURCE, id, e)),
        }
    }

    pub async fn delete(&self, ctx: &Context, state: &ImageVersionState) -> Result<()> {
        let api = self.client.sagemaker();

        match api.delete_image_version(&state.id, state.version).await {
            Ok(()) => {}
            Err(e) if e.code_equals("ResourceNotFound") => return Ok(()),
            Err(e) => return Err(Error::api("deleting", RESOURCE, state.id.as_str(), e)),
        }

        wait_image_version_deleted(
            ctx,
            api,
            &state.id,
            self.client.timeouts().image_version_deleted,
            self.client.backoff(),
        )
        .await?;

        tracing::info!(id = %state.id, "Deleted {}", RESOURCE);
        Ok(())
    }
}
