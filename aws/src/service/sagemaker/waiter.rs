use std::sync::Mutex;
use std::time::Duration;
use tfconverge::{Backoff, Context, Refresh, StateChangeConf, WaitError};

use crate::api::{image_version_status, AwsError, ImageVersion, SageMakerApi};
use crate::error::{Error, Result};

use super::image_version::RESOURCE;

async fn status_image_version(
    api: &dyn SageMakerApi,
    image_name: &str,
    failure_reason: &Mutex<Option<String>>,
) -> std::result::Result<Refresh<ImageVersion>, AwsError> {
    let output = api.describe_image_version(image_name).await?;

    if let Ok(mut reason) = failure_reason.lock() {
        *reason = output.failure_reason.clone();
    }

    Ok(Refresh::state(output.status.clone(), output))
}

/// Turns a modeled failure state into an error carrying the service's
/// failure reason
fn wait_error(
    action: &'static str,
    image_name: &str,
    err: WaitError<AwsError>,
    failure_reason: Mutex<Option<String>>,
) -> Error {
    let reason = failure_reason.into_inner().ok().flatten();

    match (err, reason) {
        (WaitError::UnexpectedState { state, .. }, Some(reason)) => Error::Failed {
            resource: RESOURCE,
            id: image_name.to_string(),
            state,
            reason,
        },
        (err, _) => Error::wait(action, RESOURCE, image_name, err),
    }
}

pub async fn wait_image_version_created(
    ctx: &Context,
    api: &dyn SageMakerApi,
    image_name: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<ImageVersion> {
    let conf = StateChangeConf::builder()
        .pending([image_version_status::CREATING])
        .target([image_version_status::CREATED])
        .failure([image_version_status::CREATE_FAILED])
        .timeout(timeout)
        .backoff(backoff)
        .build()?;
    let failure_reason = Mutex::new(None);

    let result = conf
        .wait_for_state(ctx, || status_image_version(api, image_name, &failure_reason))
        .await;

    match result {
        Ok(Some(output)) => Ok(output),
        Ok(None) => Err(Error::EmptyResponse {
            action: "describing",
            resource: RESOURCE,
            id: image_name.to_string(),
        }),
        Err(err) => Err(wait_error("creation", image_name, err, failure_reason)),
    }
}

pub async fn wait_image_version_deleted(
    ctx: &Context,
    api: &dyn SageMakerApi,
    image_name: &str,
    timeout: Duration,
    backoff: Backoff,
) -> Result<()> {
    let conf = StateChangeConf::builder()
        .pending([image_version_status::DELETING])
        .failure([image_version_status::DELETE_FAILED])
        .absence_means_done(true)
        .timeout(timeout)
        .backoff(backoff)
        .build()?;
    let failure_reason = Mutex::new(None);

    let result = conf
        .wait_for_state(ctx, || status_image_version(api, image_name, &failure_reason))
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(err) => Err(wait_error("deletion", image_name, err, failure_reason)),
    }
}
