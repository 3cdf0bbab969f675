//! Selection and URL deep-link commands
//!
//! The query string is the shareable representation of "which detail view is
//! open". Writes flow machine → URL (select/clear return a [`QueryUpdate`]);
//! reads flow URL → machine (`restore_from_query`). The embedding router owns
//! the actual location bar.

use std::time::Instant;

use portico_core::parse_detail_query;
use portico_domain::{Area, PortalError, QueryUpdate, RecordKind, Result, ViewTicket};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Open the detail view for one list row.
///
/// The id may be a record id or a ticket number, matching what deep links
/// accept. Returns the query write mirroring the selection into the URL.
pub async fn select_record(ctx: &AppContext, area: Area, id: &str) -> Result<QueryUpdate> {
    let command_name = "selection::select_record";
    let start = Instant::now();

    info!(command = command_name, area = %area, id, "Selecting record");

    let result = apply_selection(ctx, area, id);
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// Close the area's detail view and drop its query parameter.
pub async fn clear_selection(ctx: &AppContext, area: Area) -> Result<QueryUpdate> {
    let command_name = "selection::clear_selection";
    let start = Instant::now();

    info!(command = command_name, area = %area, "Clearing selection");

    let update = ctx.session().machine_mut(area).clear();
    log_command_execution(command_name, start.elapsed(), true);

    Ok(update)
}

/// Mirror the URL query string into the area's selection.
///
/// Called on mount and on every parameter change the embedding router
/// reports. A parameter of this area's record kind becomes the pending deep
/// link and resolves immediately when data is already loaded; a query
/// without one closes the detail view, since the URL is the authority in
/// this direction. Returns the resulting selection.
pub async fn restore_from_query(
    ctx: &AppContext,
    area: Area,
    query: &str,
) -> Result<Option<ViewTicket>> {
    let command_name = "selection::restore_from_query";
    let start = Instant::now();

    info!(command = command_name, area = %area, "Restoring selection from query");

    let selected = apply_query(ctx, area, query);
    log_command_execution(command_name, start.elapsed(), true);

    Ok(selected)
}

/// Currently open detail item for the area, if any.
pub async fn current_selection(ctx: &AppContext, area: Area) -> Result<Option<ViewTicket>> {
    let command_name = "selection::current_selection";
    let start = Instant::now();

    let selected = ctx.session().machine(area).selected().cloned();
    log_command_execution(command_name, start.elapsed(), true);

    Ok(selected)
}

fn apply_selection(ctx: &AppContext, area: Area, id: &str) -> Result<QueryUpdate> {
    let mut session = ctx.session();

    let item = {
        let list = match area.kind() {
            RecordKind::Project => &session.workspace.projects,
            RecordKind::Ticket => &session.workspace.tickets,
        };
        list.iter().find(|t| t.matches_link(id)).cloned()
    }
    .ok_or_else(|| PortalError::NotFound(format!("record {id} is not in the {area} list")))?;

    Ok(session.machine_mut(area).select(item))
}

fn apply_query(ctx: &AppContext, area: Area, query: &str) -> Option<ViewTicket> {
    let mut session = ctx.session();

    match parse_detail_query(query).filter(|r| r.kind() == area.kind()) {
        Some(reference) => {
            let list = match area.kind() {
                RecordKind::Project => session.workspace.projects.clone(),
                RecordKind::Ticket => session.workspace.tickets.clone(),
            };
            let machine = session.machine_mut(area);
            machine.set_pending(reference);
            machine.resolve_pending(&list);
        }
        None => {
            // No parameter for this area means no detail view. The URL
            // already reflects that, so the Clear update is not propagated.
            let _ = session.machine_mut(area).clear();
        }
    }

    session.machine(area).selected().cloned()
}
