//! Payment provider types
//!
//! The provider redirect itself is an external collaborator; these are only
//! the shapes crossing our API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::types::records::PaymentStatus;

/// Freshly created payment session with the provider redirect URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentSession {
    pub session_id: String,
    pub url: String,
}

/// Result of verifying a payment session after the redirect returns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentVerification {
    pub session_id: String,
    pub paid: bool,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}
