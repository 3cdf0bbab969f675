//! Reconciliation service - core business logic

use std::sync::Arc;

use portico_domain::{
    NewProject, NewTicket, ProjectRecord, ProjectUpdate, RecordRef, RecordSet, Result,
    TicketRecord, TicketUpdate,
};
use tracing::debug;

use super::ports::{ProjectsGateway, TicketsGateway, UsersGateway};

/// Loads raw records and routes mutations to the right backing store
pub struct ReconcileService {
    tickets: Arc<dyn TicketsGateway>,
    projects: Arc<dyn ProjectsGateway>,
    users: Arc<dyn UsersGateway>,
}

impl ReconcileService {
    /// Create a new reconciliation service
    pub fn new(
        tickets: Arc<dyn TicketsGateway>,
        projects: Arc<dyn ProjectsGateway>,
        users: Arc<dyn UsersGateway>,
    ) -> Self {
        Self { tickets, projects, users }
    }

    /// Fetches a fresh snapshot of all three raw collections.
    ///
    /// The collections are fetched independently; there is no transactional
    /// guarantee they are mutually consistent with each other.
    pub async fn load_all(&self) -> Result<RecordSet> {
        let (tickets, projects, users) = tokio::try_join!(
            self.tickets.list_tickets(),
            self.projects.list_projects(),
            self.users.list_users(),
        )?;
        Ok(RecordSet { tickets, projects, users })
    }

    /// Create a ticket record
    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketRecord> {
        self.tickets.create_ticket(ticket).await
    }

    /// Create a project record
    pub async fn create_project(&self, project: &NewProject) -> Result<ProjectRecord> {
        self.projects.create_project(project).await
    }

    /// Updates the status of the referenced record.
    ///
    /// The reference's kind tag is the only discriminator; the id string is
    /// never inspected. Callers are expected to reload afterwards.
    pub async fn update_status(&self, record: &RecordRef, status: &str) -> Result<()> {
        match record {
            RecordRef::Project(id) => {
                let update =
                    ProjectUpdate { status: Some(status.to_string()), ..ProjectUpdate::default() };
                self.projects.update_project(id, &update).await?;
            }
            RecordRef::Ticket(id) => {
                let update =
                    TicketUpdate { status: Some(status.to_string()), ..TicketUpdate::default() };
                self.tickets.update_ticket(id, &update).await?;
            }
        }
        Ok(())
    }

    /// Marks a project's invoice as approved
    pub async fn approve_invoice(&self, project_id: &str) -> Result<ProjectRecord> {
        let update = ProjectUpdate { invoice_approved: Some(1), ..ProjectUpdate::default() };
        self.projects.update_project(project_id, &update).await
    }

    /// Sets the proposal amount on a ticket.
    ///
    /// Non-finite and non-positive amounts are discarded without a network
    /// call; `Ok(None)` reports the no-op back to the caller.
    pub async fn set_proposal_amount(
        &self,
        ticket_id: &str,
        amount: f64,
    ) -> Result<Option<TicketRecord>> {
        if !amount.is_finite() || amount <= 0.0 {
            debug!(ticket_id, amount, "discarding invalid proposal amount");
            return Ok(None);
        }
        let update = TicketUpdate { proposal_amount: Some(amount), ..TicketUpdate::default() };
        let updated = self.tickets.update_ticket(ticket_id, &update).await?;
        Ok(Some(updated))
    }

    /// Marks a ticket as paid, stamping the payment time
    pub async fn mark_ticket_paid(
        &self,
        ticket_id: &str,
        paid_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<TicketRecord> {
        let update = TicketUpdate {
            payment_status: Some(portico_domain::PaymentStatus::Paid),
            paid_at: Some(paid_at),
            ..TicketUpdate::default()
        };
        self.tickets.update_ticket(ticket_id, &update).await
    }
}
