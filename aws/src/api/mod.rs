//! AWS API surface consumed by the resources
//!
//! One trait per service. Implementations wrap a real SDK client; the
//! resources only ever see these traits.

pub mod dynamodb;
pub mod elbv2;
pub mod error;
pub mod redshift;
pub mod route53;
pub mod sagemaker;
pub mod servicecatalog;
pub mod ses;
pub mod tagging;

pub use dynamodb::{global_table_status, DynamoDbApi, GlobalTableDescription};
pub use elbv2::{Certificate, Elbv2Api};
pub use error::AwsError;
pub use redshift::{CreateParameterGroupInput, Parameter, ParameterGroup, RedshiftApi};
pub use route53::{QueryLoggingConfig, Route53Api};
pub use sagemaker::{image_version_status, CreateImageVersionInput, ImageVersion, SageMakerApi};
pub use servicecatalog::{BudgetDetail, ServiceCatalogApi};
pub use ses::{ReceiptFilter, ReceiptFilterPolicy, SesApi};
pub use tagging::TaggingApi;
