//! Redshift

pub mod parameter_group;

pub use parameter_group::{ParameterGroupArgs, ParameterGroupResource, ParameterGroupState};
