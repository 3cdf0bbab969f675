//! Record store gateways backed by the portal REST API
//!
//! [`PortalApi`] implements the core record ports over [`PortalClient`].
//! Record ids are caller-supplied strings and are percent-encoded before
//! they are spliced into a path.

use std::sync::Arc;

use async_trait::async_trait;
use portico_core::{ProjectsGateway, TicketsGateway, UsersGateway};
use portico_domain::{
    NewProject, NewTicket, ProjectRecord, ProjectUpdate, Result, TicketRecord, TicketUpdate,
    UserRecord,
};

use super::client::PortalClient;

/// Gateway bundle for the backend record endpoints
///
/// One instance serves tickets, projects, and users; they share the client
/// and its configuration.
pub struct PortalApi {
    client: Arc<PortalClient>,
}

impl PortalApi {
    /// Create a gateway bundle over an existing client
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TicketsGateway for PortalApi {
    async fn list_tickets(&self) -> Result<Vec<TicketRecord>> {
        Ok(self.client.get("/tickets").await?)
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketRecord> {
        Ok(self.client.post("/tickets", ticket).await?)
    }

    async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> Result<TicketRecord> {
        let path = format!("/tickets/{}", urlencoding::encode(id));
        Ok(self.client.patch(&path, update).await?)
    }
}

#[async_trait]
impl ProjectsGateway for PortalApi {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
        Ok(self.client.get("/projects").await?)
    }

    async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord> {
        Ok(self.client.post("/projects", project).await?)
    }

    async fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<ProjectRecord> {
        let path = format!("/projects/{}", urlencoding::encode(id));
        Ok(self.client.patch(&path, update).await?)
    }
}

#[async_trait]
impl UsersGateway for PortalApi {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.client.get("/users").await?)
    }
}
