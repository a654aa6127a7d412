//! DynamoDB

pub mod global_table;
pub mod waiter;

pub use global_table::{GlobalTableResource, GlobalTableState};
