//! Invoice aggregate types
//!
//! Invoices are virtual: a project acts as the header and its linked tickets
//! are the line items. Nothing here is ever persisted as its own record.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Derived payment state of a project's invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum InvoiceStatus {
    Unpaid,
    Partial,
    Paid,
}

crate::impl_portal_status_conversions!(InvoiceStatus {
    Unpaid => "unpaid",
    Partial => "partial",
    Paid => "paid",
});

/// Invoice aggregate for one project, recomputed from raw records on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct InvoiceSummary {
    pub project_id: String,
    pub total: f64,
    pub status: InvoiceStatus,
    pub ticket_count: usize,
    pub paid_count: usize,
    /// True only while the project status literal is exactly `pending-payment`
    pub payment_enabled: bool,
}
