//! Conversions from transport errors into domain errors.
//!
//! Gateways return `portico_domain::Result`, so every [`ApiError`] leaving
//! the HTTP layer is folded into a [`PortalError`] here. Rejections keep the
//! backend message verbatim; transport-level failures collapse into the
//! network category, which callers treat as recoverable.

use portico_domain::PortalError;

use crate::api::ApiError;

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPortalError {
    fn into_portal(self) -> PortalError;
}

/* -------------------------------------------------------------------------- */
/* ApiError → PortalError */
/* -------------------------------------------------------------------------- */

impl IntoPortalError for ApiError {
    fn into_portal(self) -> PortalError {
        match self {
            ApiError::Auth(message) => PortalError::Auth(message),
            ApiError::NotFound(message) => PortalError::NotFound(message),
            ApiError::Rejected(message) => PortalError::Rejected(message),
            ApiError::Config(message) => PortalError::Config(message),
            ApiError::Client(message) => PortalError::InvalidInput(message),
            ApiError::RateLimit(message) | ApiError::Server(message) => {
                PortalError::Network(message)
            }
            ApiError::Network(message) => PortalError::Network(message),
            ApiError::Timeout(duration) => {
                PortalError::Network(format!("Request timed out after {:?}", duration))
            }
        }
    }
}

impl From<ApiError> for PortalError {
    fn from(value: ApiError) -> Self {
        value.into_portal()
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
