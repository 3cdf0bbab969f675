//! HTTP API layer
//!
//! Client, authentication, and gateway implementations for the Portico
//! backend REST API.

pub mod analytics;
pub mod auth;
pub mod client;
pub mod comments;
pub mod errors;
pub mod payments;
pub mod records;

pub use analytics::AnalyticsApi;
pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client::{PortalClient, PortalClientBuilder, PortalClientConfig};
pub use comments::CommentsApi;
pub use errors::{ApiError, ApiErrorCategory};
pub use payments::PaymentsApi;
pub use records::PortalApi;
