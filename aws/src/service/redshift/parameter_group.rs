use std::collections::BTreeSet;
use tfconverge::{Classify, Context, KeyValueTags};

use crate::api::{CreateParameterGroupInput, Parameter};
use crate::conns::AwsClient;
use crate::error::{Error, Result};
use crate::service::tags;

pub(crate) const RESOURCE: &str = "Redshift Parameter Group";

const DEFAULT_DESCRIPTION: &str = "Managed by Terraform";

/// Configured arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterGroupArgs {
    pub name: String,
    pub family: String,
    pub description: Option<String>,
    pub parameters: BTreeSet<Parameter>,
    pub tags: KeyValueTags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterGroupState {
    /// The group name
    pub id: String,
    pub arn: String,
    pub name: String,
    pub family: String,
    pub description: String,
    pub parameters: BTreeSet<Parameter>,
    /// Tags declared on the resource itself
    pub tags: KeyValueTags,
    /// Resource tags plus provider default tags
    pub tags_all: KeyValueTags,
}

pub struct ParameterGroupResource {
    client: AwsClient,
}

impl ParameterGroupResource {
    pub const TYPE_NAME: &'static str = "aws_redshift_parameter_group";

    pub fn new(client: AwsClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, ctx: &Context, args: &ParameterGroupArgs) -> Result<ParameterGroupState> {
        let api = self.client.redshift();
        let tags = self.client.merge_default_tags(&args.tags);

        let input = CreateParameterGroupInput {
            name: args.name.clone(),
            family: args.family.clone(),
            description: args
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            tags: tags.ignore_aws(),
        };

        tracing::debug!(?input, "Creating {}", RESOURCE);
        api.create_cluster_parameter_group(input)
            .await
            .map_err(|e| Error::api("creating", RESOURCE, args.name.as_str(), e))?;

        if !args.parameters.is_empty() {
            let parameters: Vec<Parameter> = args.parameters.iter().cloned().collect();
            api.modify_cluster_parameter_group(&args.name, &parameters)
                .await
                .map_err(|e| Error::api("adding parameters to", RESOURCE, args.name.as_str(), e))?;
        }

        tracing::info!(id = %args.name, "Created {}", RESOURCE);
        self.read_existing(ctx, &args.name, "creating").await
    }

    pub async fn read(&self, _ctx: &Context, id: &str) -> Result<Option<ParameterGroupState>> {
        let api = self.client.redshift();

        let group = match api.describe_cluster_parameter_group(id).await {
            Ok(group) => group,
            Err(e) if e.is_not_found() => {
                tracing::warn!("{} ({}) not found, removing from state", RESOURCE, id);
                return Ok(None);
            }
            Err(e) => return Err(Error::api("reading", RESOURCE, id, e)),
        };

        let parameters = api
            .describe_cluster_parameters(id)
            .await
            .map_err(|e| Error::api("reading parameters of", RESOURCE, id, e))?;

        let tags_all = group
            .tags
            .ignore_aws()
            .ignore_config(self.client.ignore_tags());
        let tags = tags_all.remove_default_config(self.client.default_tags());

        Ok(Some(ParameterGroupState {
            id: id.to_string(),
            arn: group.arn,
            name: group.name,
            family: group.family,
            description: group.description,
            parameters: parameters.into_iter().collect(),
            tags,
            tags_all,
        }))
    }

    /// Applies parameters that are new or changed, then converges tags.
    /// Parameters dropped from the configuration keep their last value.
    pub async fn update(
        &self,
        ctx: &Context,
        state: &ParameterGroupState,
        args: &ParameterGroupArgs,
    ) -> Result<ParameterGroupState> {
        let api = self.client.redshift();

        let parameters: Vec<Parameter> = args
            .parameters
            .difference(&state.parameters)
            .cloned()
            .collect();
        if !parameters.is_empty() {
            tracing::debug!(id = %state.id, count = parameters.len(), "Modifying parameters");
            api.modify_cluster_parameter_group(&state.id, &parameters)
                .await
                .map_err(|e| Error::api("modifying", RESOURCE, state.id.as_str(), e))?;
        }

        // Compared against state, which never holds reserved or ignored keys
        let tags_all = self
            .client
            .merge_default_tags(&args.tags)
            .ignore_aws()
            .ignore_config(self.client.ignore_tags());
        if tags_all != state.tags_all {
            tags::update_tags(api, &state.arn, &state.tags_all, &tags_all)
                .await
                .map_err(|source| Error::Tags {
                    resource: RESOURCE,
                    id: state.arn.clone(),
                    source,
                })?;
        }

        self.read_existing(ctx, &state.id, "updating").await
    }

    pub async fn delete(&self, _ctx: &Context, id: &str) -> Result<()> {
        match self.client.redshift().delete_cluster_parameter_group(id).await {
            Ok(()) => {
                tracing::info!(id, "Deleted {}", RESOURCE);
                Ok(())
            }
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(Error::api("deleting", RESOURCE, id, e)),
        }
    }

    async fn read_existing(
        &self,
        ctx: &Context,
        id: &str,
        action: &'static str,
    ) -> Result<ParameterGroupState> {
        self.read(ctx, id).await?.ok_or_else(|| Error::EmptyResponse {
            action,
            resource: RESOURCE,
            id: id.to_string(),
        })
    }
}
