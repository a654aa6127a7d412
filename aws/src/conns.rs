//! Configured service connections shared by all resources

use std::sync::Arc;
use tfconverge::{Backoff, DefaultConfig, IgnoreConfig, KeyValueTags};

use crate::api::{
    DynamoDbApi, Elbv2Api, RedshiftApi, Route53Api, SageMakerApi, ServiceCatalogApi, SesApi,
    TaggingApi,
};
use crate::config::{ProviderConfig, Timeouts};

/// Service handles, one per AWS API the provider talks to
#[derive(Clone)]
pub struct Services {
    pub service_catalog: Arc<dyn ServiceCatalogApi>,
    pub sagemaker: Arc<dyn SageMakerApi>,
    pub dynamodb: Arc<dyn DynamoDbApi>,
    pub redshift: Arc<dyn RedshiftApi>,
    pub route53: Arc<dyn Route53Api>,
    pub elbv2: Arc<dyn Elbv2Api>,
    pub ses: Arc<dyn SesApi>,
    pub xray: Arc<dyn TaggingApi>,
}

#[derive(Clone)]
pub struct AwsClient {
    inner: Arc<AwsClientInner>,
}

struct AwsClientInner {
    region: String,
    default_tags: Option<DefaultConfig>,
    ignore_tags: Option<IgnoreConfig>,
    timeouts: Timeouts,
    services: Services,
}

impl AwsClient {
    pub fn new(config: ProviderConfig, services: Services) -> Self {
        Self {
            inner: Arc::new(AwsClientInner {
                region: config.region.unwrap_or_default(),
                default_tags: config.default_tags.filter(|d| !d.tags.is_empty()),
                ignore_tags: config.ignore_tags,
                timeouts: config.timeouts,
                services,
            }),
        }
    }

    pub fn region(&self) -> &str {
        &self.inner.region
    }

    pub fn timeouts(&self) -> &Timeouts {
        &self.inner.timeouts
    }

    pub fn backoff(&self) -> Backoff {
        self.inner.timeouts.backoff()
    }

    pub fn default_tags(&self) -> Option<&DefaultConfig> {
        self.inner.default_tags.as_ref()
    }

    pub fn ignore_tags(&self) -> Option<&IgnoreConfig> {
        self.inner.ignore_tags.as_ref()
    }

    /// Resource tags merged over the provider default tags
    pub fn merge_default_tags(&self, tags: &KeyValueTags) -> KeyValueTags {
        match self.default_tags() {
            Some(defaults) => defaults.merge_tags(tags),
            None => tags.clone(),
        }
    }

    pub fn service_catalog(&self) -> &dyn ServiceCatalogApi {
        self.inner.services.service_catalog.as_ref()
    }

    pub fn sagemaker(&self) -> &dyn SageMakerApi {
        self.inner.services.sagemaker.as_ref()
    }

    pub fn dynamodb(&self) -> &dyn DynamoDbApi {
        self.inner.services.dynamodb.as_ref()
    }

    pub fn redshift(&self) -> &dyn RedshiftApi {
        self.inner.services.redshift.as_ref()
    }

    pub fn route53(&self) -> &dyn Route53Api {
        self.inner.services.route53.as_ref()
    }

    pub fn elbv2(&self) -> &dyn Elbv2Api {
        self.inner.services.elbv2.as_ref()
    }

    pub fn ses(&self) -> &dyn SesApi {
        self.inner.services.ses.as_ref()
    }

    pub fn xray(&self) -> &dyn TaggingApi {
        self.inner.services.xray.as_ref()
    }
}
