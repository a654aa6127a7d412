//! In-memory service fakes with scripted eventual consistency

#![allow(dead_code)]
#![allow(clippy::disallowed_methods)]

use async_trait::async_trait;
use aws::api::{
    global_table_status, image_version_status, AwsError, BudgetDetail, Certificate,
    CreateImageVersionInput, CreateParameterGroupInput, DynamoDbApi, Elbv2Api,
    GlobalTableDescription, ImageVersion, Parameter, ParameterGroup, QueryLoggingConfig,
    ReceiptFilter, RedshiftApi, Route53Api, SageMakerApi, ServiceCatalogApi, SesApi, TaggingApi,
};
use aws::{AwsClient, ProviderConfig, Services};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tfconverge::KeyValueTags;
use tokio::time::Instant;

pub const REGION: &str = "us-west-2";
const ACCOUNT: &str = "123456789012";

pub fn tags(pairs: &[(&str, &str)]) -> KeyValueTags {
    pairs.iter().copied().collect()
}

/// Recorded tagging call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCall {
    Untag(String, Vec<String>),
    Tag(String, KeyValueTags),
}

/// Tags keyed by ARN
#[derive(Default)]
pub struct TagStore {
    pub tags: Mutex<HashMap<String, KeyValueTags>>,
    pub calls: Mutex<Vec<TagCall>>,
    pub fail_untag: Mutex<Option<AwsError>>,
    pub fail_tag: Mutex<Option<AwsError>>,
}

impl TagStore {
    pub fn set(&self, arn: &str, tags: KeyValueTags) {
        self.tags.lock().unwrap().insert(arn.to_string(), tags);
    }

    pub fn get(&self, arn: &str) -> KeyValueTags {
        self.tags.lock().unwrap().get(arn).cloned().unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<TagCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaggingApi for TagStore {
    async fn list_tags_for_resource(&self, arn: &str) -> Result<KeyValueTags, AwsError> {
        Ok(self.get(arn))
    }

    async fn tag_resource(&self, arn: &str, tags: &KeyValueTags) -> Result<(), AwsError> {
        self.calls
            .lock()
            .unwrap()
            .push(TagCall::Tag(arn.to_string(), tags.clone()));
        if let Some(err) = self.fail_tag.lock().unwrap().clone() {
            return Err(err);
        }
        let mut store = self.tags.lock().unwrap();
        let current = store.entry(arn.to_string()).or_default();
        *current = current.merge(tags);
        Ok(())
    }

    async fn untag_resource(&self, arn: &str, keys: &[String]) -> Result<(), AwsError> {
        self.calls
            .lock()
            .unwrap()
            .push(TagCall::Untag(arn.to_string(), keys.to_vec()));
        if let Some(err) = self.fail_untag.lock().unwrap().clone() {
            return Err(err);
        }
        let mut store = self.tags.lock().unwrap();
        if let Some(current) = store.get_mut(arn) {
            *current = current
                .iter()
                .filter(|(k, _)| !keys.iter().any(|key| key == k))
                .collect();
        }
        Ok(())
    }
}

struct Association {
    budget_name: String,
    resource_id: String,
    visible_at: Instant,
    gone_at: Option<Instant>,
}

/// Service Catalog where associations take `propagation` to show up or
/// disappear, and new budgets stay unknown for `profile_missing_for`
pub struct FakeServiceCatalog {
    pub propagation: Duration,
    pub profile_missing_for: Duration,
    pub associate_error: Mutex<Option<AwsError>>,
    pub associate_calls: Mutex<u32>,
    started: Instant,
    associations: Mutex<Vec<Association>>,
}

impl FakeServiceCatalog {
    pub fn new(propagation: Duration, profile_missing_for: Duration) -> Self {
        Self {
            propagation,
            profile_missing_for,
            associate_error: Mutex::new(None),
            associate_calls: Mutex::new(0),
            started: Instant::now(),
            associations: Mutex::new(Vec::new()),
        }
    }

    pub fn associate_calls(&self) -> u32 {
        *self.associate_calls.lock().unwrap()
    }

    /// An association that is already visible
    pub fn insert(&self, budget_name: &str, resource_id: &str) {
        self.associations.lock().unwrap().push(Association {
            budget_name: budget_name.to_string(),
            resource_id: resource_id.to_string(),
            visible_at: Instant::now(),
            gone_at: None,
        });
    }

    /// Makes an association vanish without going through the API
    pub fn remove_out_of_band(&self, budget_name: &str, resource_id: &str) {
        self.associations
            .lock()
            .unwrap()
            .retain(|a| !(a.budget_name == budget_name && a.resource_id == resource_id));
    }
}

impl Default for FakeServiceCatalog {
    fn default() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

#[async_trait]
impl ServiceCatalogApi for FakeServiceCatalog {
    async fn associate_budget_with_resource(
        &self,
        budget_name: &str,
        resource_id: &str,
    ) -> Result<(), AwsError> {
        *self.associate_calls.lock().unwrap() += 1;

        if let Some(err) = self.associate_error.lock().unwrap().clone() {
            return Err(err);
        }
        if self.started.elapsed() < self.profile_missing_for {
            return Err(AwsError::exception(
                "InvalidParametersException",
                "Budget profile does not exist",
            ));
        }

        self.associations.lock().unwrap().push(Association {
            budget_name: budget_name.to_string(),
            resource_id: resource_id.to_string(),
            visible_at: Instant::now() + self.propagation,
            gone_at: None,
        });
        Ok(())
    }

    async fn disassociate_budget_from_resource(
        &self,
        budget_name: &str,
        resource_id: &str,
    ) -> Result<(), AwsError> {
        let mut associations = self.associations.lock().unwrap();
        let association = associations.iter_mut().find(|a| {
            a.budget_name == budget_name && a.resource_id == resource_id && a.gone_at.is_none()
        });

        match association {
            Some(a) => {
                a.gone_at = Some(Instant::now() + self.propagation);
                Ok(())
            }
            None => Err(AwsError::exception(
                "ResourceNotFoundException",
                "association not found",
            )),
        }
    }

    async fn list_budgets_for_resource(
        &self,
        resource_id: &str,
    ) -> Result<Vec<BudgetDetail>, AwsError> {
        let now = Instant::now();
        Ok(self
            .associations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.resource_id == resource_id)
            .filter(|a| now >= a.visible_at && a.gone_at.map_or(true, |gone| now < gone))
            .map(|a| BudgetDetail {
                budget_name: a.budget_name.clone(),
            })
            .collect())
    }
}

struct Image {
    version: ImageVersion,
    settles_at: Instant,
    deleting: bool,
}

/// SageMaker where image versions build for `build_time` and are torn down
/// over `delete_time`. A set `failure` makes the build end in CREATE_FAILED.
pub struct FakeSageMaker {
    pub build_time: Duration,
    pub delete_time: Duration,
    pub failure: Option<String>,
    pub client_tokens: Mutex<Vec<String>>,
    images: Mutex<HashMap<String, Image>>,
}

impl FakeSageMaker {
    pub fn new(build_time: Duration, delete_time: Duration) -> Self {
        Self {
            build_time,
            delete_time,
            failure: None,
            client_tokens: Mutex::new(Vec::new()),
            images: Mutex::new(HashMap::new()),
        }
    }

    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn contains(&self, image_name: &str) -> bool {
        self.images.lock().unwrap().contains_key(image_name)
    }
}

impl Default for FakeSageMaker {
    fn default() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

fn image_not_found(image_name: &str) -> AwsError {
    AwsError::exception(
        "ResourceNotFound",
        format!("Image {image_name} does not exist"),
    )
}

#[async_trait]
impl SageMakerApi for FakeSageMaker {
    async fn create_image_version(
        &self,
        input: CreateImageVersionInput,
    ) -> Result<String, AwsError> {
        self.client_tokens
            .lock()
            .unwrap()
            .push(input.client_token.clone());

        let mut images = self.images.lock().unwrap();
        let version = images.get(&input.image_name).map_or(1, |i| i.version.version + 1);
        let image_arn = format!(
            "arn:aws:sagemaker:{REGION}:{ACCOUNT}:image/{}",
            input.image_name
        );
        let arn = format!(
            "arn:aws:sagemaker:{REGION}:{ACCOUNT}:image-version/{}/{version}",
            input.image_name
        );

        images.insert(
            input.image_name.clone(),
            Image {
                version: ImageVersion {
                    image_version_arn: arn.clone(),
                    image_arn,
                    base_image: input.base_image,
                    container_image: None,
                    version,
                    status: image_version_status::CREATING.to_string(),
                    failure_reason: None,
                },
                settles_at: Instant::now() + self.build_time,
                deleting: false,
            },
        );
        Ok(arn)
    }

    async fn describe_image_version(&self, image_name: &str) -> Result<ImageVersion, AwsError> {
        let mut images = self.images.lock().unwrap();
        let image = images
            .get_mut(image_name)
            .ok_or_else(|| image_not_found(image_name))?;

        if Instant::now() >= image.settles_at {
            if image.deleting {
                images.remove(image_name);
                return Err(image_not_found(image_name));
            }
            if image.version.status == image_version_status::CREATING {
                match &self.failure {
                    Some(reason) => {
                        image.version.status = image_version_status::CREATE_FAILED.to_string();
                        image.version.failure_reason = Some(reason.clone());
                    }
                    None => {
                        image.version.status = image_version_status::CREATED.to_string();
                        image.version.container_image =
                            Some(format!("{}@sha256:feed", image.version.base_image));
                    }
                }
            }
        }

        Ok(image.version.clone())
    }

    async fn delete_image_version(&self, image_name: &str, version: i64) -> Result<(), AwsError> {
        let mut images = self.images.lock().unwrap();
        match images.get_mut(image_name) {
            Some(image) if image.version.version == version => {
                image.deleting = true;
                image.settles_at = Instant::now() + self.delete_time;
                image.version.status = image_version_status::DELETING.to_string();
                Ok(())
            }
            _ => Err(image_not_found(image_name)),
        }
    }
}

struct Table {
    description: GlobalTableDescription,
    settles_at: Instant,
}

/// DynamoDB where every global table change takes `transition`
pub struct FakeDynamoDb {
    pub transition: Duration,
    pub updates: Mutex<Vec<(Vec<String>, Vec<String>)>>,
    pub describe_errors: Mutex<Vec<AwsError>>,
    tables: Mutex<HashMap<String, Table>>,
}

impl FakeDynamoDb {
    pub fn new(transition: Duration) -> Self {
        Self {
            transition,
            updates: Mutex::new(Vec::new()),
            describe_errors: Mutex::new(Vec::new()),
            tables: Mutex::new(HashMap::new()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.lock().unwrap().contains_key(name)
    }

    pub fn updates(&self) -> Vec<(Vec<String>, Vec<String>)> {
        self.updates.lock().unwrap().clone()
    }
}

fn table_not_found(name: &str) -> AwsError {
    AwsError::exception(
        "GlobalTableNotFoundException",
        format!("Global table not found: {name}"),
    )
}

#[async_trait]
impl DynamoDbApi for FakeDynamoDb {
    async fn create_global_table(
        &self,
        name: &str,
        regions: &[String],
    ) -> Result<GlobalTableDescription, AwsError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.contains_key(name) {
            return Err(AwsError::exception(
                "GlobalTableAlreadyExistsException",
                format!("Global table already exists: {name}"),
            ));
        }

        let description = GlobalTableDescription {
            global_table_name: name.to_string(),
            global_table_arn: format!("arn:aws:dynamodb::{ACCOUNT}:global-table/{name}"),
            global_table_status: global_table_status::CREATING.to_string(),
            replication_group: regions.to_vec(),
        };
        tables.insert(
            name.to_string(),
            Table {
                description: description.clone(),
                settles_at: Instant::now() + self.transition,
            },
        );
        Ok(description)
    }

    async fn describe_global_table(&self, name: &str) -> Result<GlobalTableDescription, AwsError> {
        {
            let mut errors = self.describe_errors.lock().unwrap();
            if !errors.is_empty() {
                return Err(errors.remove(0));
            }
        }

        let mut tables = self.tables.lock().unwrap();
        let table = tables.get_mut(name).ok_or_else(|| table_not_found(name))?;

        if Instant::now() >= table.settles_at {
            if table.description.replication_group.is_empty() {
                tables.remove(name);
                return Err(table_not_found(name));
            }
            table.description.global_table_status = global_table_status::ACTIVE.to_string();
        }

        Ok(table.description.clone())
    }

    async fn update_global_table(
        &self,
        name: &str,
        add_regions: &[String],
        remove_regions: &[String],
    ) -> Result<(), AwsError> {
        self.updates
            .lock()
            .unwrap()
            .push((add_regions.to_vec(), remove_regions.to_vec()));

        let mut tables = self.tables.lock().unwrap();
        let table = tables.get_mut(name).ok_or_else(|| table_not_found(name))?;
        let description = &mut table.description;

        description
            .replication_group
            .retain(|r| !remove_regions.contains(r));
        description
            .replication_group
            .extend(add_regions.iter().cloned());
        description.global_table_status = if description.replication_group.is_empty() {
            global_table_status::DELETING.to_string()
        } else {
            global_table_status::UPDATING.to_string()
        };
        table.settles_at = Instant::now() + self.transition;
        Ok(())
    }
}

struct Group {
    family: String,
    description: String,
    parameters: BTreeMap<String, String>,
}

/// Redshift parameter groups with tags kept in a [`TagStore`]
#[derive(Default)]
pub struct FakeRedshift {
    pub tag_store: TagStore,
    pub modifications: Mutex<Vec<Vec<Parameter>>>,
    groups: Mutex<HashMap<String, Group>>,
}

impl FakeRedshift {
    pub fn arn(name: &str) -> String {
        format!("arn:aws:redshift:{REGION}:{ACCOUNT}:parametergroup:{name}")
    }

    pub fn modifications(&self) -> Vec<Vec<Parameter>> {
        self.modifications.lock().unwrap().clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.lock().unwrap().contains_key(name)
    }
}

fn group_not_found(name: &str) -> AwsError {
    AwsError::exception(
        "ClusterParameterGroupNotFound",
        format!("Parameter group {name} not found"),
    )
}

#[async_trait]
impl TaggingApi for FakeRedshift {
    async fn list_tags_for_resource(&self, arn: &str) -> Result<KeyValueTags, AwsError> {
        self.tag_store.list_tags_for_resource(arn).await
    }

    async fn tag_resource(&self, arn: &str, tags: &KeyValueTags) -> Result<(), AwsError> {
        self.tag_store.tag_resource(arn, tags).await
    }

    async fn untag_resource(&self, arn: &str, keys: &[String]) -> Result<(), AwsError> {
        self.tag_store.untag_resource(arn, keys).await
    }
}

#[async_trait]
impl RedshiftApi for FakeRedshift {
    async fn create_cluster_parameter_group(
        &self,
        input: CreateParameterGroupInput,
    ) -> Result<(), AwsError> {
        let mut groups = self.groups.lock().unwrap();
        if groups.contains_key(&input.name) {
            return Err(AwsError::exception(
                "ClusterParameterGroupAlreadyExists",
                format!("Parameter group {} already exists", input.name),
            ));
        }

        self.tag_store.set(&Self::arn(&input.name), input.tags);
        groups.insert(
            input.name,
            Group {
                family: input.family,
                description: input.description,
                parameters: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn describe_cluster_parameter_group(
        &self,
        name: &str,
    ) -> Result<ParameterGroup, AwsError> {
        let groups = self.groups.lock().unwrap();
        let group = groups.get(name).ok_or_else(|| group_not_found(name))?;

        Ok(ParameterGroup {
            name: name.to_string(),
            family: group.family.clone(),
            description: group.description.clone(),
            arn: Self::arn(name),
            tags: self.tag_store.get(&Self::arn(name)),
        })
    }

    async fn describe_cluster_parameters(&self, name: &str) -> Result<Vec<Parameter>, AwsError> {
        let groups = self.groups.lock().unwrap();
        let group = groups.get(name).ok_or_else(|| group_not_found(name))?;

        Ok(group
            .parameters
            .iter()
            .map(|(k, v)| Parameter::new(k.as_str(), v.as_str()))
            .collect())
    }

    async fn modify_cluster_parameter_group(
        &self,
        name: &str,
        parameters: &[Parameter],
    ) -> Result<(), AwsError> {
        self.modifications
            .lock()
            .unwrap()
            .push(parameters.to_vec());

        let mut groups = self.groups.lock().unwrap();
        let group = groups.get_mut(name).ok_or_else(|| group_not_found(name))?;
        for p in parameters {
            group.parameters.insert(p.name.clone(), p.value.clone());
        }
        Ok(())
    }

    async fn delete_cluster_parameter_group(&self, name: &str) -> Result<(), AwsError> {
        self.groups
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| group_not_found(name))
    }
}

/// Route 53 query logging configs
#[derive(Default)]
pub struct FakeRoute53 {
    pub delete_error: Mutex<Option<AwsError>>,
    configs: Mutex<HashMap<String, QueryLoggingConfig>>,
    next_id: Mutex<u32>,
}

impl FakeRoute53 {
    pub fn contains(&self, id: &str) -> bool {
        self.configs.lock().unwrap().contains_key(id)
    }

    pub fn remove_out_of_band(&self, id: &str) {
        self.configs.lock().unwrap().remove(id);
    }
}

fn query_logging_config_not_found(id: &str) -> AwsError {
    AwsError::service(
        "NoSuchQueryLoggingConfig",
        format!("No query logging configuration exists with the ID {id}"),
        404,
    )
}

#[async_trait]
impl Route53Api for FakeRoute53 {
    async fn create_query_logging_config(
        &self,
        hosted_zone_id: &str,
        log_group_arn: &str,
    ) -> Result<QueryLoggingConfig, AwsError> {
        let mut configs = self.configs.lock().unwrap();
        if configs.values().any(|c| c.hosted_zone_id == hosted_zone_id) {
            return Err(AwsError::exception(
                "QueryLoggingConfigAlreadyExists",
                format!("Hosted zone {hosted_zone_id} already has query logging"),
            ));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let config = QueryLoggingConfig {
            id: format!("87b2{:04x}-0000-4000-8000-000000000000", *next_id),
            hosted_zone_id: hosted_zone_id.to_string(),
            cloud_watch_logs_log_group_arn: log_group_arn.to_string(),
        };
        configs.insert(config.id.clone(), config.clone());
        Ok(config)
    }

    async fn get_query_logging_config(&self, id: &str) -> Result<QueryLoggingConfig, AwsError> {
        self.configs
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| query_logging_config_not_found(id))
    }

    async fn delete_query_logging_config(&self, id: &str) -> Result<(), AwsError> {
        if let Some(err) = self.delete_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.configs
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| query_logging_config_not_found(id))
    }
}

struct AttachedCertificate {
    listener_arn: String,
    certificate_arn: String,
    visible_at: Instant,
}

/// Load balancer listeners whose added certificates take `propagation` to
/// be listed. Certificates uploaded less than `certificate_missing_for` ago
/// are rejected as unknown.
pub struct FakeElbv2 {
    pub propagation: Duration,
    pub certificate_missing_for: Duration,
    pub add_calls: Mutex<u32>,
    started: Instant,
    listeners: Mutex<Vec<String>>,
    attached: Mutex<Vec<AttachedCertificate>>,
}

impl FakeElbv2 {
    pub fn new(propagation: Duration, certificate_missing_for: Duration) -> Self {
        Self {
            propagation,
            certificate_missing_for,
            add_calls: Mutex::new(0),
            started: Instant::now(),
            listeners: Mutex::new(Vec::new()),
            attached: Mutex::new(Vec::new()),
        }
    }

    pub fn listener(self, listener_arn: &str) -> Self {
        self.listeners.lock().unwrap().push(listener_arn.to_string());
        self
    }

    pub fn add_calls(&self) -> u32 {
        *self.add_calls.lock().unwrap()
    }

    pub fn is_attached(&self, listener_arn: &str, certificate_arn: &str) -> bool {
        self.attached
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.listener_arn == listener_arn && a.certificate_arn == certificate_arn)
    }

    pub fn delete_listener(&self, listener_arn: &str) {
        self.listeners.lock().unwrap().retain(|l| l != listener_arn);
        self.attached
            .lock()
            .unwrap()
            .retain(|a| a.listener_arn != listener_arn);
    }

    fn check_listener(&self, listener_arn: &str) -> Result<(), AwsError> {
        if self.listeners.lock().unwrap().iter().any(|l| l == listener_arn) {
            Ok(())
        } else {
            Err(AwsError::exception(
                "ListenerNotFound",
                format!("One or more listeners not found: {listener_arn}"),
            ))
        }
    }
}

#[async_trait]
impl Elbv2Api for FakeElbv2 {
    async fn add_listener_certificates(
        &self,
        listener_arn: &str,
        certificate_arns: &[String],
    ) -> Result<(), AwsError> {
        *self.add_calls.lock().unwrap() += 1;
        self.check_listener(listener_arn)?;

        if self.started.elapsed() < self.certificate_missing_for {
            return Err(AwsError::exception(
                "CertificateNotFound",
                "Certificate not found",
            ));
        }

        let mut attached = self.attached.lock().unwrap();
        for arn in certificate_arns {
            attached.push(AttachedCertificate {
                listener_arn: listener_arn.to_string(),
                certificate_arn: arn.clone(),
                visible_at: Instant::now() + self.propagation,
            });
        }
        Ok(())
    }

    async fn describe_listener_certificates(
        &self,
        listener_arn: &str,
    ) -> Result<Vec<Certificate>, AwsError> {
        self.check_listener(listener_arn)?;

        let now = Instant::now();
        let mut certificates = vec![Certificate {
            certificate_arn: format!("arn:aws:iam::{ACCOUNT}:server-certificate/default"),
            is_default: true,
        }];
        certificates.extend(
            self.attached
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.listener_arn == listener_arn && now >= a.visible_at)
                .map(|a| Certificate {
                    certificate_arn: a.certificate_arn.clone(),
                    is_default: false,
                }),
        );
        Ok(certificates)
    }

    async fn remove_listener_certificates(
        &self,
        listener_arn: &str,
        certificate_arns: &[String],
    ) -> Result<(), AwsError> {
        self.check_listener(listener_arn)?;
        self.attached.lock().unwrap().retain(|a| {
            !(a.listener_arn == listener_arn && certificate_arns.contains(&a.certificate_arn))
        });
        Ok(())
    }
}

/// SES receipt filters
#[derive(Default)]
pub struct FakeSes {
    filters: Mutex<Vec<ReceiptFilter>>,
}

impl FakeSes {
    pub fn contains(&self, name: &str) -> bool {
        self.filters.lock().unwrap().iter().any(|f| f.name == name)
    }

    pub fn remove_out_of_band(&self, name: &str) {
        self.filters.lock().unwrap().retain(|f| f.name != name);
    }
}

#[async_trait]
impl SesApi for FakeSes {
    async fn create_receipt_filter(&self, filter: ReceiptFilter) -> Result<(), AwsError> {
        let mut filters = self.filters.lock().unwrap();
        if filters.iter().any(|f| f.name == filter.name) {
            return Err(AwsError::exception(
                "AlreadyExists",
                format!("Filter {} already exists", filter.name),
            ));
        }
        filters.push(filter);
        Ok(())
    }

    async fn list_receipt_filters(&self) -> Result<Vec<ReceiptFilter>, AwsError> {
        Ok(self.filters.lock().unwrap().clone())
    }

    async fn delete_receipt_filter(&self, name: &str) -> Result<(), AwsError> {
        // SES reports success for unknown filters
        self.remove_out_of_band(name);
        Ok(())
    }
}

/// Fakes for every service plus a client wired to them
pub struct TestEnv {
    pub service_catalog: Arc<FakeServiceCatalog>,
    pub sagemaker: Arc<FakeSageMaker>,
    pub dynamodb: Arc<FakeDynamoDb>,
    pub redshift: Arc<FakeRedshift>,
    pub route53: Arc<FakeRoute53>,
    pub elbv2: Arc<FakeElbv2>,
    pub ses: Arc<FakeSes>,
    pub xray: Arc<TagStore>,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self {
            service_catalog: Arc::new(FakeServiceCatalog::default()),
            sagemaker: Arc::new(FakeSageMaker::default()),
            dynamodb: Arc::new(FakeDynamoDb::new(Duration::ZERO)),
            redshift: Arc::new(FakeRedshift::default()),
            route53: Arc::new(FakeRoute53::default()),
            elbv2: Arc::new(FakeElbv2::new(Duration::ZERO, Duration::ZERO)),
            ses: Arc::new(FakeSes::default()),
            xray: Arc::new(TagStore::default()),
        }
    }
}

impl TestEnv {
    pub fn services(&self) -> Services {
        Services {
            service_catalog: self.service_catalog.clone(),
            sagemaker: self.sagemaker.clone(),
            dynamodb: self.dynamodb.clone(),
            redshift: self.redshift.clone(),
            route53: self.route53.clone(),
            elbv2: self.elbv2.clone(),
            ses: self.ses.clone(),
            xray: self.xray.clone(),
        }
    }

    pub fn client(&self) -> AwsClient {
        self.client_with(ProviderConfig {
            region: Some(REGION.to_string()),
            ..Default::default()
        })
    }

    pub fn client_with(&self, config: ProviderConfig) -> AwsClient {
        AwsClient::new(config, self.services())
    }
}
