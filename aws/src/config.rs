//! Provider configuration
//!
//! Values come from the provider block as JSON, with the region falling back
//! to the usual AWS environment variables.

use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tfconverge::{Backoff, DefaultConfig, IgnoreConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid provider configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("region is required (set in provider config or AWS_REGION env var)")]
    MissingRegion,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub default_tags: Option<DefaultConfig>,
    #[serde(default)]
    pub ignore_tags: Option<IgnoreConfig>,
    #[serde(default)]
    pub timeouts: Timeouts,
}

impl ProviderConfig {
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let mut config: ProviderConfig = if value.is_null() {
            ProviderConfig::default()
        } else {
            serde_json::from_value(value)?
        };

        config.region = config
            .region
            .filter(|r| !r.is_empty())
            .or_else(|| std::env::var("AWS_REGION").ok())
            .or_else(|| std::env::var("AWS_DEFAULT_REGION").ok())
            .filter(|r| !r.is_empty());

        if config.region.is_none() {
            return Err(ConfigError::MissingRegion);
        }

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

/// How long to wait for eventually-consistent changes. Timeouts are given in
/// seconds, poll intervals in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    #[serde(deserialize_with = "seconds")]
    pub propagation: Duration,
    #[serde(deserialize_with = "seconds")]
    pub budget_association_ready: Duration,
    #[serde(deserialize_with = "seconds")]
    pub budget_association_deleted: Duration,
    #[serde(deserialize_with = "seconds")]
    pub image_version_created: Duration,
    #[serde(deserialize_with = "seconds")]
    pub image_version_deleted: Duration,
    #[serde(deserialize_with = "seconds")]
    pub global_table_create: Duration,
    #[serde(deserialize_with = "seconds")]
    pub global_table_update: Duration,
    #[serde(deserialize_with = "seconds")]
    pub global_table_delete: Duration,
    #[serde(rename = "poll_interval_ms", deserialize_with = "millis")]
    pub poll_interval: Duration,
    #[serde(rename = "max_poll_interval_ms", deserialize_with = "millis")]
    pub max_poll_interval: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            propagation: Duration::from_secs(2 * 60),
            budget_association_ready: Duration::from_secs(3 * 60),
            budget_association_deleted: Duration::from_secs(3 * 60),
            image_version_created: Duration::from_secs(10 * 60),
            image_version_deleted: Duration::from_secs(10 * 60),
            global_table_create: Duration::from_secs(10 * 60),
            global_table_update: Duration::from_secs(10 * 60),
            global_table_delete: Duration::from_secs(10 * 60),
            poll_interval: Duration::from_millis(500),
            max_poll_interval: Duration::from_secs(10),
        }
    }
}

impl Timeouts {
    pub fn backoff(&self) -> Backoff {
        Backoff::Exponential {
            initial: self.poll_interval,
            max: self.max_poll_interval.max(self.poll_interval),
        }
    }
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}
