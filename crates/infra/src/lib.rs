//! # Portico Infrastructure
//!
//! Infrastructure adapters for the Portico portal: the HTTP client that talks
//! to the backend REST API, gateway implementations for the core service
//! ports, configuration loading, and error conversions.
//!
//! ## Structure
//!
//! - `api` - HTTP client, authentication, and gateway implementations
//! - `config` - Configuration loading from environment variables and files
//! - `errors` - Conversions between infrastructure and domain errors

pub mod api;
pub mod config;
pub mod errors;

// Re-export commonly used types
pub use api::{
    AccessTokenProvider, AnalyticsApi, ApiError, ApiErrorCategory, CommentsApi, PaymentsApi,
    PortalApi, PortalClient, PortalClientBuilder, PortalClientConfig, StaticTokenProvider,
};
pub use config::loader::{load, load_from_env, load_from_file};
