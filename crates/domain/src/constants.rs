//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Remote API configuration
pub const DEFAULT_API_BASE_URL: &str = "https://api.portico.app/v1";
pub const DEFAULT_API_TIMEOUT_SECONDS: u64 = 30;

// Record statuses as stored by the backend
pub const STATUS_NEW: &str = "new";
pub const STATUS_OPEN: &str = "open";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_PENDING_PAYMENT: &str = "pending-payment";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CLOSED: &str = "closed";

// Query parameter keys for detail deep links
pub const QUERY_KEY_PROJECT: &str = "project";
pub const QUERY_KEY_TICKET: &str = "ticket";

// Comment thread configuration
pub const DEFAULT_COMMENT_MAX_LENGTH: usize = 2000;

// Analytics configuration
pub const DEFAULT_ANALYTICS_PERIOD: &str = "week";
