//! Port interface for the payment provider

use async_trait::async_trait;
use portico_domain::{PaymentSession, PaymentVerification, Result};

/// Trait for creating and verifying provider payment sessions
#[async_trait]
pub trait PaymentsGateway: Send + Sync {
    /// Create a session for the project's invoice; returns the redirect URL
    async fn create_session(&self, project_id: &str) -> Result<PaymentSession>;

    /// Verify a session after the provider redirect returns
    async fn verify_session(&self, session_id: &str) -> Result<PaymentVerification>;
}
