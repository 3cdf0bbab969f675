//! Port interfaces for the remote record store
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use portico_domain::{
    NewProject, NewTicket, ProjectRecord, ProjectUpdate, Result, TicketRecord, TicketUpdate,
    UserRecord,
};

/// Trait for listing and mutating ticket records
#[async_trait]
pub trait TicketsGateway: Send + Sync {
    /// Fetch every ticket record; visibility filtering happens client-side
    async fn list_tickets(&self) -> Result<Vec<TicketRecord>>;

    /// Create a ticket record
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketRecord>;

    /// Apply a partial update to a ticket record
    async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> Result<TicketRecord>;
}

/// Trait for listing and mutating project records
#[async_trait]
pub trait ProjectsGateway: Send + Sync {
    /// Fetch every project record
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>>;

    /// Create a project record
    async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord>;

    /// Apply a partial update to a project record
    async fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<ProjectRecord>;
}

/// Trait for listing registered users
#[async_trait]
pub trait UsersGateway: Send + Sync {
    /// Fetch every user record, for contact backfill and admin management
    async fn list_users(&self) -> Result<Vec<UserRecord>>;
}
