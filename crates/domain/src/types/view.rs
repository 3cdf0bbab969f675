//! Display-normalized view types
//!
//! [`ViewTicket`] is the one shape every list screen renders, derived from
//! either a ticket or a project record. Normalization rules live with the
//! type so they stay identical across screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{STATUS_NEW, STATUS_OPEN};
use crate::types::records::{PaymentStatus, RecordKind, RecordRef, RequestType};

/// Display priority bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum DisplayPriority {
    Urgent,
    High,
    Medium,
    Low,
}

crate::impl_portal_status_conversions!(DisplayPriority {
    Urgent => "urgent",
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl DisplayPriority {
    /// Maps a raw wire priority literal to its display bucket.
    ///
    /// `critical` becomes `urgent`, `high` stays `high`, `normal` becomes
    /// `medium`, and anything else (including unknown literals) is `low`.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "critical" => Self::Urgent,
            "high" => Self::High,
            "normal" => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Maps a stored status literal to its display form.
///
/// `new` is shown as `open`; every other value passes through unchanged. The
/// stored status is never rewritten, this is cosmetic only.
pub fn display_status(raw: &str) -> String {
    if raw == STATUS_NEW {
        STATUS_OPEN.to_string()
    } else {
        raw.to_string()
    }
}

/// Display-ready union of a ticket record and a project record
///
/// Every `ViewTicket` keeps the stable id of exactly one backing record and a
/// `source` tag identifying which store that id belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ViewTicket {
    pub id: String,
    pub source: RecordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<DisplayPriority>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    pub invoice_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ViewTicket {
    /// Tagged reference to the backing record, for routing update calls
    pub fn record_ref(&self) -> RecordRef {
        match self.source {
            RecordKind::Project => RecordRef::Project(self.id.clone()),
            RecordKind::Ticket => RecordRef::Ticket(self.id.clone()),
        }
    }

    /// Whether a deep-link value addresses this item (record id or ticket number)
    pub fn matches_link(&self, value: &str) -> bool {
        self.id == value || self.ticket_number.as_deref() == Some(value)
    }
}

/// Role-scoped derived lists consumed by every screen
///
/// `tickets` holds both partitions (support tickets and project requests);
/// the project-request view is a filtered slice of the same list, so a
/// project-request ticket shows up in both places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Workspace {
    pub projects: Vec<ViewTicket>,
    pub tickets: Vec<ViewTicket>,
}

impl Workspace {
    /// Tickets submitted as new-project requests
    pub fn project_requests(&self) -> Vec<&ViewTicket> {
        self.tickets
            .iter()
            .filter(|t| t.request_type == Some(RequestType::NewProject))
            .collect()
    }

    /// Looks an item up by id across both lists
    pub fn find(&self, reference: &RecordRef) -> Option<&ViewTicket> {
        let list = match reference.kind() {
            RecordKind::Project => &self.projects,
            RecordKind::Ticket => &self.tickets,
        };
        list.iter().find(|t| t.id == reference.id())
    }
}
