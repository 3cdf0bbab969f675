//! Domain types and models
//!
//! Raw wire records come straight from the backend API (camelCase keys);
//! everything else is derived or display-facing.

pub mod analytics;
pub mod invoice;
pub mod payments;
pub mod records;
pub mod selection;
pub mod user;
pub mod view;

// Re-export the common types for convenience
pub use analytics::{AnalyticsPeriod, AnalyticsSummary, ExcludedIps, IpLookup, PageCount};
pub use invoice::{InvoiceStatus, InvoiceSummary};
pub use payments::{PaymentSession, PaymentVerification};
pub use records::{
    CommentRecord, NewComment, NewProject, NewTicket, PaymentStatus, ProjectRecord, ProjectUpdate,
    RecordKind, RecordRef, RecordSet, RequestType, TicketRecord, TicketUpdate, UserRecord,
};
pub use selection::{Area, QueryUpdate};
pub use user::{Role, Viewer};
pub use view::{display_status, DisplayPriority, ViewTicket, Workspace};
