//! Workspace loading and invoice derivation commands

use std::time::Instant;

use portico_core::{build_workspace, invoicing};
use portico_domain::{Area, InvoiceSummary, QueryUpdate, RecordKind, Result, Workspace};
use serde::Serialize;
use tracing::{info, warn};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::context::{AppContext, SessionState};
use crate::utils::access::visible_project;
use crate::utils::logging::{error_label, log_command_execution};

/// One area's query-string correction emitted by a reload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct QuerySync {
    pub area: Area,
    pub update: QueryUpdate,
}

/// Fresh role-scoped workspace plus the URL corrections it requires
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WorkspaceView {
    pub workspace: Workspace,
    pub query_updates: Vec<QuerySync>,
}

/// Load the viewer's workspace from a fresh portal snapshot.
pub async fn load_workspace(ctx: &AppContext) -> Result<WorkspaceView> {
    let command_name = "workspace::load_workspace";
    let start = Instant::now();

    info!(command = command_name, "Loading workspace");

    let result = reload(ctx).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// Invoice aggregate for one project, derived from the cached snapshot.
///
/// Projects outside the viewer's scope read as not found.
pub async fn get_invoice(ctx: &AppContext, project_id: &str) -> Result<InvoiceSummary> {
    let command_name = "workspace::get_invoice";
    let start = Instant::now();

    info!(command = command_name, project_id, "Deriving invoice");

    let result = derive_invoice(ctx, project_id);
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// Refetches everything and rebuilds the derived state.
///
/// This is the single invalidation mechanism: every mutation command calls
/// back into it instead of editing the snapshot in place. Selections survive
/// the reload when their item does; vanished items surface as `Clear`
/// updates the UI must apply to the URL.
pub(crate) async fn reload(ctx: &AppContext) -> Result<WorkspaceView> {
    let records = ctx.reconcile.load_all().await?;
    let workspace =
        build_workspace(&ctx.viewer, &records.tickets, &records.projects, &records.users);

    let mut session = ctx.session();
    session.records = records;
    session.workspace = workspace.clone();
    let query_updates = refresh_selections(&mut session);

    Ok(WorkspaceView { workspace, query_updates })
}

/// Re-resolves every machine against the fresh lists, collecting the
/// query-string corrections for selections that no longer exist.
fn refresh_selections(session: &mut SessionState) -> Vec<QuerySync> {
    let SessionState { workspace, selections, .. } = session;

    let mut updates = Vec::new();
    for machine in selections.iter_mut() {
        let list = match machine.area().kind() {
            RecordKind::Project => workspace.projects.as_slice(),
            RecordKind::Ticket => workspace.tickets.as_slice(),
        };
        if let Some(update) = machine.refresh_after_reload(list) {
            updates.push(QuerySync { area: machine.area(), update });
        }
    }
    updates
}

fn derive_invoice(ctx: &AppContext, project_id: &str) -> Result<InvoiceSummary> {
    let session = ctx.session();
    let project = visible_project(&ctx.viewer, &session.records.projects, project_id)?;

    // Totals always run over the raw unscoped ticket list; visibility gates
    // the project lookup, never the arithmetic.
    Ok(invoicing::invoice_summary(project, &session.records.tickets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use portico_domain::{RecordRef, ViewTicket};

    fn item(id: &str, kind: RecordKind) -> ViewTicket {
        ViewTicket {
            id: id.to_string(),
            source: kind,
            ticket_number: None,
            request_type: None,
            contact_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            company: String::new(),
            website: None,
            description: String::new(),
            priority: None,
            status: "open".to_string(),
            user_id: None,
            proposal_amount: None,
            payment_status: None,
            paid_at: None,
            related_project_id: None,
            project_type: None,
            timeline: None,
            budget_range: None,
            invoice_approved: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_refresh_keeps_surviving_selections() {
        let mut session = SessionState::default();
        session.machine_mut(Area::AdminTickets).select(item("tkt_1", RecordKind::Ticket));
        session.workspace.tickets = vec![item("tkt_1", RecordKind::Ticket)];

        let updates = refresh_selections(&mut session);

        assert!(updates.is_empty());
        assert!(session.machine(Area::AdminTickets).selected().is_some());
    }

    #[test]
    fn test_refresh_clears_vanished_selections_per_area() {
        let mut session = SessionState::default();
        session.machine_mut(Area::AdminTickets).select(item("tkt_gone", RecordKind::Ticket));
        session.machine_mut(Area::AdminProjects).select(item("proj_1", RecordKind::Project));
        session.workspace.projects = vec![item("proj_1", RecordKind::Project)];
        session.workspace.tickets = vec![item("tkt_other", RecordKind::Ticket)];

        let updates = refresh_selections(&mut session);

        assert_eq!(
            updates,
            vec![QuerySync { area: Area::AdminTickets, update: QueryUpdate::Clear }]
        );
        assert!(session.machine(Area::AdminTickets).selected().is_none());
        assert!(session.machine(Area::AdminProjects).selected().is_some());
    }

    #[test]
    fn test_refresh_resolves_deep_links_that_were_waiting_for_data() {
        let mut session = SessionState::default();
        session
            .machine_mut(Area::ClientProjects)
            .set_pending(RecordRef::Project("proj_9".to_string()));
        session.workspace.projects = vec![item("proj_9", RecordKind::Project)];

        let updates = refresh_selections(&mut session);

        assert!(updates.is_empty());
        assert_eq!(
            session.machine(Area::ClientProjects).selected().map(|t| t.id.as_str()),
            Some("proj_9")
        );
    }
}
