//! Key-value tag sets
//!
//! [`KeyValueTags`] is the one tag map type used everywhere: resource
//! arguments, provider default tags, and what the remote API reports.
//! Diffing and filtering are defined here once.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Keys with this prefix are reserved by AWS and can't be managed
pub const AWS_TAG_KEY_PREFIX: &str = "aws:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueTags(BTreeMap<String, String>);

/// Minimal change turning one tag set into another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Keys to untag
    pub removed: BTreeSet<String>,
    /// Keys to (re)tag with their new values
    pub changed: KeyValueTags,
}

impl TagDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Provider-level tags applied to every taggable resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConfig {
    #[serde(default)]
    pub tags: KeyValueTags,
}

impl DefaultConfig {
    /// Resource tags layered over the defaults, resource values win
    pub fn merge_tags(&self, tags: &KeyValueTags) -> KeyValueTags {
        self.tags.merge(tags)
    }
}

/// Tags the provider should never read or manage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub keys: BTreeSet<String>,
    #[serde(default)]
    pub key_prefixes: Vec<String>,
}

impl KeyValueTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    fn filtered(&self, keep: impl Fn(&str, &str) -> bool) -> Self {
        self.0
            .iter()
            .filter(|(k, v)| keep(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Drops AWS-reserved `aws:` keys
    pub fn ignore_aws(&self) -> Self {
        self.filtered(|k, _| !k.starts_with(AWS_TAG_KEY_PREFIX))
    }

    pub fn ignore_prefixes<S: AsRef<str>>(&self, prefixes: &[S]) -> Self {
        self.filtered(|k, _| !prefixes.iter().any(|p| k.starts_with(p.as_ref())))
    }

    pub fn ignore_keys(&self, keys: &BTreeSet<String>) -> Self {
        self.filtered(|k, _| !keys.contains(k))
    }

    pub fn ignore_config(&self, config: Option<&IgnoreConfig>) -> Self {
        match config {
            Some(config) => self
                .ignore_keys(&config.keys)
                .ignore_prefixes(&config.key_prefixes),
            None => self.clone(),
        }
    }

    /// Drops tags whose key and value both match a provider default, leaving
    /// only what the resource configuration itself declares
    pub fn remove_default_config(&self, config: Option<&DefaultConfig>) -> Self {
        match config {
            Some(config) => self.filtered(|k, v| config.tags.get(k) != Some(v)),
            None => self.clone(),
        }
    }

    /// `self` overlaid with `other`; values from `other` win
    pub fn merge(&self, other: &KeyValueTags) -> Self {
        let mut merged = self.0.clone();
        merged.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(merged)
    }

    /// Tags in `self` whose keys are gone from `new`
    pub fn removed(&self, new: &KeyValueTags) -> Self {
        self.filtered(|k, _| !new.contains_key(k))
    }

    /// Tags in `new` that are missing from `self` or carry another value
    pub fn updated(&self, new: &KeyValueTags) -> Self {
        new.filtered(|k, v| self.get(k) != Some(v))
    }

    pub fn diff(&self, new: &KeyValueTags) -> TagDiff {
        TagDiff {
            removed: self.removed(new).0.into_keys().collect(),
            changed: self.updated(new),
        }
    }

    /// Applies removals then additions
    pub fn apply(&self, diff: &TagDiff) -> Self {
        let mut result = self.filtered(|k, _| !diff.removed.contains(k));
        result.0.extend(
            diff.changed
                .0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        result
    }

    /// Whether every tag in `other` is present in `self` with the same value
    pub fn contains_all(&self, other: &KeyValueTags) -> bool {
        other.iter().all(|(k, v)| self.get(k) == Some(v))
    }
}

impl<K, V> FromIterator<(K, V)> for KeyValueTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for KeyValueTags {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for KeyValueTags {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}
