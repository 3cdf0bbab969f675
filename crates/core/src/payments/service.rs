//! Payment flow service - core business logic

use std::sync::Arc;

use portico_domain::{PaymentSession, PaymentVerification, PortalError, ProjectRecord, Result};
use tracing::info;

use super::ports::PaymentsGateway;
use crate::invoicing::payment_enabled;

/// Gates and drives the provider payment flow for project invoices
pub struct PaymentService {
    payments: Arc<dyn PaymentsGateway>,
}

impl PaymentService {
    /// Create a new payment service
    pub fn new(payments: Arc<dyn PaymentsGateway>) -> Self {
        Self { payments }
    }

    /// Starts the payment flow for a project's invoice.
    ///
    /// Refused unless the project status literal is exactly
    /// `pending-payment`; the same gate the payment UI uses.
    pub async fn start(&self, project: &ProjectRecord) -> Result<PaymentSession> {
        if !payment_enabled(project) {
            return Err(PortalError::InvalidInput(format!(
                "project {} is not awaiting payment",
                project.id
            )));
        }

        let session = self.payments.create_session(&project.id).await?;
        info!(project_id = %project.id, session_id = %session.session_id, "payment session created");
        Ok(session)
    }

    /// Verifies a session after the provider redirect returns
    pub async fn verify(&self, session_id: &str) -> Result<PaymentVerification> {
        self.payments.verify_session(session_id).await
    }
}
