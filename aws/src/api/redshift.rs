use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tfconverge::KeyValueTags;

use super::{AwsError, TaggingApi};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(rename = "ParameterName")]
    pub name: String,
    #[serde(rename = "ParameterValue")]
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateParameterGroupInput {
    #[serde(rename = "ParameterGroupName")]
    pub name: String,
    #[serde(rename = "ParameterGroupFamily")]
    pub family: String,
    pub description: String,
    pub tags: KeyValueTags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterGroup {
    #[serde(rename = "ParameterGroupName")]
    pub name: String,
    #[serde(rename = "ParameterGroupFamily")]
    pub family: String,
    pub description: String,
    pub arn: String,
    #[serde(default)]
    pub tags: KeyValueTags,
}

/// Cluster parameter groups. Tags go through the [`TaggingApi`] supertrait.
#[async_trait]
pub trait RedshiftApi: TaggingApi {
    async fn create_cluster_parameter_group(
        &self,
        input: CreateParameterGroupInput,
    ) -> Result<(), AwsError>;

    async fn describe_cluster_parameter_group(
        &self,
        name: &str,
    ) -> Result<ParameterGroup, AwsError>;

    /// Parameters whose source is "user"
    async fn describe_cluster_parameters(&self, name: &str) -> Result<Vec<Parameter>, AwsError>;

    async fn modify_cluster_parameter_group(
        &self,
        name: &str,
        parameters: &[Parameter],
    ) -> Result<(), AwsError>;

    async fn delete_cluster_parameter_group(&self, name: &str) -> Result<(), AwsError>;
}
