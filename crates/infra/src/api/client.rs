//! HTTP client for the portal backend API
//!
//! Every request is sent exactly once: there is no retry loop, request
//! deduplication, or cancellation. The only transport guard is the timeout
//! configured at construction time. Callers that want fresh data after a
//! mutation issue a full reload instead of patching local state.
//!
//! The backend wraps every payload in a `{ success, message, data }` envelope;
//! a response with `success: false` carries a human-readable message that is
//! surfaced verbatim, falling back to a generic line when absent.

use std::sync::Arc;
use std::time::Duration;

use portico_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECONDS};
use portico_domain::ApiConfig;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;

/// Fallback shown when the backend rejects a request without a message
const GENERIC_REJECTION: &str = "The request could not be completed";

/// Configuration for the portal API client
#[derive(Debug, Clone)]
pub struct PortalClientConfig {
    /// Base URL for the API (e.g., "https://api.portico.app/v1")
    pub base_url: String,
    /// Timeout applied to every request
    pub timeout: Duration,
}

impl Default for PortalClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECONDS),
        }
    }
}

impl From<&ApiConfig> for PortalClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Response envelope used by every backend endpoint
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Unwrap the envelope into its payload
    ///
    /// A `success: false` envelope becomes [`ApiError::Rejected`] carrying the
    /// backend message. A successful envelope without `data` is only valid for
    /// response types that deserialize from `null` (such as `()`).
    fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
            ));
        }

        match self.data {
            Some(data) => Ok(data),
            None => serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Client("Response envelope contained no data".to_string())
            }),
        }
    }
}

/// HTTP client for the portal backend
pub struct PortalClient {
    http: reqwest::Client,
    auth: Arc<dyn AccessTokenProvider>,
    config: PortalClientConfig,
}

impl PortalClient {
    /// Create a new portal client
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration
    /// * `auth` - Authentication provider
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn new(
        config: PortalClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, auth, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::default()
    }

    /// Execute a GET request
    ///
    /// # Arguments
    ///
    /// * `path` - API path (e.g., "/tickets")
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// response cannot be deserialized
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let result = self.request(Method::GET, path, None).await?;
        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a POST request
    ///
    /// # Arguments
    ///
    /// * `path` - API path
    /// * `body` - Request body
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = Self::to_body(body)?;
        let result = self.request(Method::POST, path, Some(body)).await?;
        info!(path = %path, "POST request successful");
        Ok(result)
    }

    /// Execute a PATCH request
    ///
    /// # Arguments
    ///
    /// * `path` - API path
    /// * `body` - Request body with the fields to update
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = Self::to_body(body)?;
        let result = self.request(Method::PATCH, path, Some(body)).await?;
        info!(path = %path, "PATCH request successful");
        Ok(result)
    }

    /// Execute a PUT request
    ///
    /// # Arguments
    ///
    /// * `path` - API path
    /// * `body` - Request body
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = Self::to_body(body)?;
        let result = self.request(Method::PUT, path, Some(body)).await?;
        info!(path = %path, "PUT request successful");
        Ok(result)
    }

    fn to_body<T: Serialize>(body: &T) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::Client(format!("Failed to serialize body: {}", e)))
    }

    /// Send a single request and decode the enveloped response
    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);

        debug!(url = %url, method = %method, "Sending request");

        let token = self.auth.access_token().await?;

        let mut request =
            self.http.request(method, &url).header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &url, body));
        }

        // 204/205 responses carry no body
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Client(format!(
                    "No content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        let envelope: ApiEnvelope<R> = response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("Failed to parse response: {}", e)))?;

        envelope.into_data()
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Network(format!("Request failed: {}", err))
        }
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status == StatusCode::NOT_FOUND {
            ApiError::NotFound(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}

/// Builder for the portal client
#[derive(Default)]
pub struct PortalClientBuilder {
    config: Option<PortalClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl PortalClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: PortalClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the portal client
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or client creation fails
    pub fn build(self) -> Result<PortalClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth =
            self.auth.ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;

        PortalClient::new(config, auth)
    }
}
