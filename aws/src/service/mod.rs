//! Per-service resource implementations

pub mod dynamodb;
pub mod elbv2;
pub mod redshift;
pub mod route53;
pub mod sagemaker;
pub mod servicecatalog;
pub mod ses;
pub mod tags;
pub mod xray;
