//! AWS resources built on the `tfconverge` waiters and tag reconciler.
//!
//! [`AwsProvider`] holds the configured [`AwsClient`]; resources are handed
//! a clone of it. Service APIs are injected as trait objects through
//! [`Services`].

pub mod api;
pub mod config;
pub mod conns;
pub mod error;
pub mod logging;
pub mod service;

pub use config::{ConfigError, ProviderConfig, Timeouts};
pub use conns::{AwsClient, Services};
pub use error::{Error, Result};

use service::dynamodb::GlobalTableResource;
use service::elbv2::ListenerCertificateResource;
use service::redshift::ParameterGroupResource;
use service::route53::QueryLogResource;
use service::sagemaker::ImageVersionResource;
use service::servicecatalog::BudgetResourceAssociationResource;
use service::ses::ReceiptFilterResource;
use service::xray::XrayTags;

pub struct AwsProvider {
    client: Option<AwsClient>,
}

impl Default for AwsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsProvider {
    pub fn new() -> Self {
        Self { client: None }
    }

    pub fn configure(&mut self, config: serde_json::Value, services: Services) -> Result<()> {
        let config = ProviderConfig::from_value(config)?;
        tracing::info!(region = config.region.as_deref(), "Configured AWS provider");

        self.client = Some(AwsClient::new(config, services));
        Ok(())
    }

    pub fn client(&self) -> Result<&AwsClient> {
        self.client.as_ref().ok_or(Error::NotConfigured)
    }

    pub fn resource_type_names() -> &'static [&'static str] {
        &[
            BudgetResourceAssociationResource::TYPE_NAME,
            GlobalTableResource::TYPE_NAME,
            ImageVersionResource::TYPE_NAME,
            ListenerCertificateResource::TYPE_NAME,
            ParameterGroupResource::TYPE_NAME,
            QueryLogResource::TYPE_NAME,
            ReceiptFilterResource::TYPE_NAME,
        ]
    }

    pub fn budget_resource_association(&self) -> Result<BudgetResourceAssociationResource> {
        Ok(BudgetResourceAssociationResource::new(self.client()?.clone()))
    }

    pub fn image_version(&self) -> Result<ImageVersionResource> {
        Ok(ImageVersionResource::new(self.client()?.clone()))
    }

    pub fn global_table(&self) -> Result<GlobalTableResource> {
        Ok(GlobalTableResource::new(self.client()?.clone()))
    }

    pub fn parameter_group(&self) -> Result<ParameterGroupResource> {
        Ok(ParameterGroupResource::new(self.client()?.clone()))
    }

    pub fn query_log(&self) -> Result<QueryLogResource> {
        Ok(QueryLogResource::new(self.client()?.clone()))
    }

    pub fn listener_certificate(&self) -> Result<ListenerCertificateResource> {
        Ok(ListenerCertificateResource::new(self.client()?.clone()))
    }

    pub fn receipt_filter(&self) -> Result<ReceiptFilterResource> {
        Ok(ReceiptFilterResource::new(self.client()?.clone()))
    }

    pub fn xray_tags(&self) -> Result<XrayTags> {
        Ok(XrayTags::new(self.client()?.clone()))
    }
}
