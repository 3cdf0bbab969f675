//! User directory command, admin-only

use std::time::Instant;

use portico_domain::{Result, UserRecord};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::access::ensure_admin;
use crate::utils::logging::{error_label, log_command_execution};

/// List every registered user.
///
/// Fetches live rather than serving the snapshot: the directory screen is
/// the one place where user records are the payload, not merge input.
pub async fn list_users(ctx: &AppContext) -> Result<Vec<UserRecord>> {
    let command_name = "users::list_users";
    let start = Instant::now();

    info!(command = command_name, "Listing users");

    let result = fetch_users(ctx).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn fetch_users(ctx: &AppContext) -> Result<Vec<UserRecord>> {
    ensure_admin(&ctx.viewer)?;
    ctx.users.list_users().await
}
