//! Structured logging helpers for command execution

use std::time::Duration;

use portico_domain::PortalError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"workspace::load_workspace"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the field names
/// consistent. Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `PortalError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &PortalError) -> &'static str {
    match error {
        PortalError::Config(_) => "config",
        PortalError::Network(_) => "network",
        PortalError::Auth(_) => "auth",
        PortalError::NotFound(_) => "not_found",
        PortalError::InvalidInput(_) => "invalid_input",
        PortalError::Rejected(_) => "rejected",
        PortalError::Internal(_) => "internal",
    }
}

/// Install the process-wide tracing subscriber.
///
/// Honors `RUST_LOG` when set and defaults to info-level output for the
/// portico crates otherwise. Calling twice is harmless; the second install
/// attempt is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portico=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}
