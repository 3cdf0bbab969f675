//! Selection and deep-link synchronization
//!
//! Keeps "currently open detail view" consistent with the shareable query
//! string and with data arriving asynchronously.

pub mod machine;
pub mod query;

pub use machine::SelectionMachine;
pub use query::{apply_query_update, parse_detail_query};
