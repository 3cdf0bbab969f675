//! # Portico Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Reconciliation of raw records into the display model
//! - Invoice derivation rules
//! - Selection and deep-link synchronization
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `portico-domain`
//! - No HTTP or persistence code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod invoicing;
pub mod payments;
pub mod reconcile;
pub mod selection;
pub mod threads;

// Infrastructure ports
pub mod analytics_ports;

// Re-export specific items to avoid ambiguity
pub use analytics_ports::AnalyticsGateway;
pub use payments::ports::PaymentsGateway;
pub use payments::PaymentService;
pub use reconcile::ports::{ProjectsGateway, TicketsGateway, UsersGateway};
pub use reconcile::{build_workspace, ReconcileService};
pub use selection::machine::SelectionMachine;
pub use selection::query::{apply_query_update, parse_detail_query};
pub use threads::ports::CommentsGateway;
pub use threads::ThreadService;
