//! Selection state primitives
//!
//! Four screens carry an independent "currently open detail view"; an
//! [`Area`] key names which one. The selection machinery itself lives in the
//! core crate, these are the shared vocabulary types.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::types::records::{RecordKind, RecordRef};

/// Functional area owning one selection slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Area {
    AdminProjects,
    AdminTickets,
    ClientProjects,
    ClientTickets,
}

crate::impl_portal_status_conversions!(Area {
    AdminProjects => "admin-projects",
    AdminTickets => "admin-tickets",
    ClientProjects => "client-projects",
    ClientTickets => "client-tickets",
});

impl Area {
    /// Which record kind the area's list holds, and therefore which query
    /// parameter its deep links use
    pub fn kind(self) -> RecordKind {
        match self {
            Self::AdminProjects | Self::ClientProjects => RecordKind::Project,
            Self::AdminTickets | Self::ClientTickets => RecordKind::Ticket,
        }
    }

    /// All areas, in a stable order
    pub fn all() -> [Self; 4] {
        [
            Self::AdminProjects,
            Self::AdminTickets,
            Self::ClientProjects,
            Self::ClientTickets,
        ]
    }
}

/// Pending change to the shareable query string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "target", rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum QueryUpdate {
    /// Write the parameter for this record (clearing the sibling parameter)
    Set(RecordRef),
    /// Remove both detail parameters entirely
    Clear,
}
