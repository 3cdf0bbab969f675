//! Ticket/project reconciliation
//!
//! Derives the unified display lists from the three raw collections and
//! routes mutations back to the correct backing store.

pub mod normalize;
pub mod ports;
pub mod service;

pub use normalize::build_workspace;
pub use service::ReconcileService;
