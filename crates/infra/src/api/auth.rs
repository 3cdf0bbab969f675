//! API authentication
//!
//! Bearer-token authentication for the portal backend. Tokens are issued by
//! the backend session endpoint and handed to the client at construction
//! time; requests without a token run anonymously and are scoped server-side.

use async_trait::async_trait;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current access token
    ///
    /// Returns `None` when no session token is available, in which case
    /// requests are sent without an `Authorization` header.
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Token provider backed by a fixed token from configuration
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Create a provider for an optional configured token
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Create a provider that never supplies a token
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token.clone())
    }
}
