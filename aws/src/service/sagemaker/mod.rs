//! SageMaker

pub mod image_version;
pub mod waiter;

pub use image_version::{ImageVersionResource, ImageVersionState};
