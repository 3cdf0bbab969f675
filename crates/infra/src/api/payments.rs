//! Payment provider gateway backed by the portal REST API
//!
//! The backend brokers the actual provider session; this gateway only asks
//! it to create one and to verify the result after the redirect returns.

use std::sync::Arc;

use async_trait::async_trait;
use portico_core::PaymentsGateway;
use portico_domain::{PaymentSession, PaymentVerification, Result};
use serde::Serialize;

use super::client::PortalClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionBody<'a> {
    project_id: &'a str,
}

/// Gateway for the payment session endpoints
pub struct PaymentsApi {
    client: Arc<PortalClient>,
}

impl PaymentsApi {
    /// Create a gateway over an existing client
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentsGateway for PaymentsApi {
    async fn create_session(&self, project_id: &str) -> Result<PaymentSession> {
        let body = CreateSessionBody { project_id };
        Ok(self.client.post("/payments/session", &body).await?)
    }

    async fn verify_session(&self, session_id: &str) -> Result<PaymentVerification> {
        let path = format!("/payments/verify?session={}", urlencoding::encode(session_id));
        Ok(self.client.get(&path).await?)
    }
}
