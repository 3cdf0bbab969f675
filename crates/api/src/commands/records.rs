//! Record creation and mutation commands
//!
//! Every write follows the same contract: validate locally, send exactly
//! once, then refetch the whole snapshot. Nothing is applied optimistically,
//! so a failure needs no rollback.

use std::time::Instant;

use chrono::Utc;
use portico_domain::{Area, NewProject, NewTicket, PortalError, RecordRef, Result};
use tracing::{info, warn};

use crate::commands::workspace::{reload, QuerySync, WorkspaceView};
use crate::context::AppContext;
use crate::utils::access::{ensure_admin, visible_project};
use crate::utils::logging::{error_label, log_command_execution};

// =============================================================================
// Command: create_ticket
// =============================================================================

/// Submit a new support ticket or project request.
///
/// Required fields are checked for non-blank content before anything leaves
/// the process; the reloaded workspace carries the created record.
pub async fn create_ticket(ctx: &AppContext, new: NewTicket) -> Result<WorkspaceView> {
    let command_name = "records::create_ticket";
    let start = Instant::now();

    info!(command = command_name, "Creating ticket");

    let result = submit_ticket(ctx, &new).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn submit_ticket(ctx: &AppContext, new: &NewTicket) -> Result<WorkspaceView> {
    validate_new_ticket(new)?;
    ctx.reconcile.create_ticket(new).await?;
    reload(ctx).await
}

// =============================================================================
// Command: create_project
// =============================================================================

/// Create a project record.
pub async fn create_project(ctx: &AppContext, new: NewProject) -> Result<WorkspaceView> {
    let command_name = "records::create_project";
    let start = Instant::now();

    info!(command = command_name, "Creating project");

    let result = submit_project(ctx, &new).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn submit_project(ctx: &AppContext, new: &NewProject) -> Result<WorkspaceView> {
    validate_new_project(new)?;
    ctx.reconcile.create_project(new).await?;
    reload(ctx).await
}

// =============================================================================
// Command: update_status
// =============================================================================

/// Change the status of a ticket or project.
///
/// The reference's kind tag routes the call; on success the mutating detail
/// view closes and its query parameter is cleared. On failure the selection
/// stays open and nothing is reloaded.
pub async fn update_status(
    ctx: &AppContext,
    record: RecordRef,
    status: &str,
) -> Result<WorkspaceView> {
    let command_name = "records::update_status";
    let start = Instant::now();

    info!(command = command_name, id = record.id(), status, "Updating record status");

    let result = change_status(ctx, &record, status).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn change_status(ctx: &AppContext, record: &RecordRef, status: &str) -> Result<WorkspaceView> {
    ctx.reconcile.update_status(record, status).await?;

    let mut view = reload(ctx).await?;

    // Success closes the detail view that drove the mutation; a failure
    // returns above and leaves it open.
    let mut session = ctx.session();
    for area in Area::all() {
        let machine = session.machine_mut(area);
        if machine.selected().map(|t| t.id.as_str()) == Some(record.id()) {
            let update = machine.clear();
            view.query_updates.push(QuerySync { area, update });
        }
    }

    Ok(view)
}

// =============================================================================
// Command: set_proposal_amount
// =============================================================================

/// Attach a proposal amount to a ticket.
///
/// Non-finite and non-positive amounts are discarded silently: `Ok(None)`,
/// no network call, nothing reloaded. On success the open detail view keeps
/// its selection, re-patched from the write response.
pub async fn set_proposal_amount(
    ctx: &AppContext,
    ticket_id: &str,
    amount: f64,
) -> Result<Option<WorkspaceView>> {
    let command_name = "records::set_proposal_amount";
    let start = Instant::now();

    info!(command = command_name, ticket_id, amount, "Setting proposal amount");

    let result = send_proposal_amount(ctx, ticket_id, amount).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn send_proposal_amount(
    ctx: &AppContext,
    ticket_id: &str,
    amount: f64,
) -> Result<Option<WorkspaceView>> {
    let Some(updated) = ctx.reconcile.set_proposal_amount(ticket_id, amount).await? else {
        return Ok(None);
    };

    let view = reload(ctx).await?;

    // The PATCH response is authoritative for the open detail view; the
    // list fetch above could have raced it.
    let mut session = ctx.session();
    for area in Area::all() {
        let machine = session.machine_mut(area);
        let patched = machine.selected().filter(|t| t.id == updated.id).map(|selected| {
            let mut fresh = selected.clone();
            fresh.proposal_amount = updated.proposal_amount;
            fresh.updated_at = updated.updated_at;
            fresh
        });
        if let Some(patched) = patched {
            let _ = machine.select(patched);
        }
    }

    Ok(Some(view))
}

// =============================================================================
// Command: approve_invoice
// =============================================================================

/// Approve the invoice for one of the viewer's projects.
pub async fn approve_invoice(ctx: &AppContext, project_id: &str) -> Result<WorkspaceView> {
    let command_name = "records::approve_invoice";
    let start = Instant::now();

    info!(command = command_name, project_id, "Approving invoice");

    let result = send_invoice_approval(ctx, project_id).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn send_invoice_approval(ctx: &AppContext, project_id: &str) -> Result<WorkspaceView> {
    {
        let session = ctx.session();
        visible_project(&ctx.viewer, &session.records.projects, project_id)?;
    }

    ctx.reconcile.approve_invoice(project_id).await?;
    reload(ctx).await
}

// =============================================================================
// Command: mark_ticket_paid
// =============================================================================

/// Manually mark a ticket's invoice line as paid, stamping the current time.
///
/// Admin-only back-office override; the provider flow marks tickets paid
/// server-side without going through here.
pub async fn mark_ticket_paid(ctx: &AppContext, ticket_id: &str) -> Result<WorkspaceView> {
    let command_name = "records::mark_ticket_paid";
    let start = Instant::now();

    info!(command = command_name, ticket_id, "Marking ticket paid");

    let result = send_paid_mark(ctx, ticket_id).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn send_paid_mark(ctx: &AppContext, ticket_id: &str) -> Result<WorkspaceView> {
    ensure_admin(&ctx.viewer)?;
    ctx.reconcile.mark_ticket_paid(ticket_id, Utc::now()).await?;
    reload(ctx).await
}

// =============================================================================
// Validation
// =============================================================================

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortalError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

fn validate_new_ticket(new: &NewTicket) -> Result<()> {
    require("contact name", &new.contact_name)?;
    require("contact email", &new.contact_email)?;
    require("description", &new.description)?;
    require("priority", &new.priority)
}

fn validate_new_project(new: &NewProject) -> Result<()> {
    require("user id", &new.user_id)?;
    require("name", &new.name)?;
    require("project type", &new.project_type)?;
    require("description", &new.description)
}
