//! SES

pub mod receipt_filter;

pub use receipt_filter::{ReceiptFilterResource, ReceiptFilterState};
