//! Comment thread commands
//!
//! Threads are append-only and fully re-fetched after every accepted post;
//! the draft map only exists so a failed post never loses the typed text.

use std::time::Instant;

use portico_domain::{Area, CommentRecord, Result};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Load the full comment thread for a ticket or project, oldest first.
pub async fn load_thread(ctx: &AppContext, target_id: &str) -> Result<Vec<CommentRecord>> {
    let command_name = "threads::load_thread";
    let start = Instant::now();

    info!(command = command_name, target_id, "Loading thread");

    let result = ctx.threads.load_thread(target_id).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// Post the typed text to a thread.
///
/// Blank or whitespace-only text is a local no-op: `Ok(None)`, no network
/// call, the UI keeps whatever it is showing. On failure the per-area draft
/// survives so the input can be restored; on success the draft clears and
/// the whole thread is re-fetched, grown by the accepted message.
pub async fn post_comment(
    ctx: &AppContext,
    area: Area,
    target_id: &str,
    text: &str,
) -> Result<Option<Vec<CommentRecord>>> {
    let command_name = "threads::post_comment";
    let start = Instant::now();

    info!(command = command_name, area = %area, target_id, "Posting comment");

    let result = submit_comment(ctx, area, target_id, text).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn submit_comment(
    ctx: &AppContext,
    area: Area,
    target_id: &str,
    text: &str,
) -> Result<Option<Vec<CommentRecord>>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    // The draft is kept until the backend accepts the message.
    ctx.session().drafts.insert(area, text.to_string());

    let author = ctx.viewer.display_name().to_string();
    let role = ctx.viewer.role.to_string();
    ctx.threads.post_message(target_id, &author, &role, text).await?;

    ctx.session().drafts.remove(&area);

    let thread = ctx.threads.load_thread(target_id).await?;
    Ok(Some(thread))
}

/// Remember the in-progress comment text for an area.
pub async fn set_draft(ctx: &AppContext, area: Area, text: String) -> Result<()> {
    let command_name = "threads::set_draft";
    let start = Instant::now();

    ctx.session().drafts.insert(area, text);
    log_command_execution(command_name, start.elapsed(), true);

    Ok(())
}

/// The remembered in-progress comment text for an area, empty when none.
pub async fn draft(ctx: &AppContext, area: Area) -> Result<String> {
    let command_name = "threads::draft";
    let start = Instant::now();

    let text = ctx.session().drafts.get(&area).cloned().unwrap_or_default();
    log_command_execution(command_name, start.elapsed(), true);

    Ok(text)
}
