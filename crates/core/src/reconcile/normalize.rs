//! Record reconciliation and display normalization
//!
//! Pure functions turning one snapshot of the three raw collections into the
//! role-scoped lists every screen consumes. No IO and no hidden state:
//! identical inputs always produce identical output, so the whole pipeline
//! can simply be re-run after every reload.

use portico_domain::{
    display_status, DisplayPriority, ProjectRecord, RecordKind, TicketRecord, UserRecord, Viewer,
    ViewTicket, Workspace,
};

/// Builds the role-scoped workspace from one snapshot of raw records.
///
/// Admins see every record. Other viewers see only projects they own and
/// tickets they own or whose contact email matches theirs. Scoping applies
/// to the raw records, before any contact backfill.
pub fn build_workspace(
    viewer: &Viewer,
    tickets: &[TicketRecord],
    projects: &[ProjectRecord],
    users: &[UserRecord],
) -> Workspace {
    let projects = projects
        .iter()
        .filter(|p| viewer.is_admin() || p.user_id == viewer.id)
        .map(|p| project_view(p, users))
        .collect();

    let tickets = tickets
        .iter()
        .filter(|t| {
            viewer.is_admin()
                || t.user_id.as_deref() == Some(viewer.id.as_str())
                || t.contact_email == viewer.email
        })
        .map(|t| ticket_view(t, users))
        .collect();

    Workspace { projects, tickets }
}

fn find_user<'a>(users: &'a [UserRecord], id: Option<&str>) -> Option<&'a UserRecord> {
    let id = id?;
    users.iter().find(|u| u.id == id)
}

/// Keeps the record's own value; falls back to the user's only when empty.
fn or_backfill(own: &str, fallback: Option<&str>) -> String {
    if own.is_empty() {
        fallback.unwrap_or_default().to_string()
    } else {
        own.to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn ticket_view(ticket: &TicketRecord, users: &[UserRecord]) -> ViewTicket {
    let user = find_user(users, ticket.user_id.as_deref());

    ViewTicket {
        id: ticket.id.clone(),
        source: RecordKind::Ticket,
        ticket_number: ticket.ticket_number.clone(),
        request_type: ticket.request_type,
        contact_name: or_backfill(&ticket.contact_name, user.map(|u| u.name.as_str())),
        contact_email: or_backfill(&ticket.contact_email, user.map(|u| u.email.as_str())),
        contact_phone: or_backfill(&ticket.contact_phone, user.map(|u| u.phone.as_str())),
        company: or_backfill(&ticket.company, user.map(|u| u.company.as_str())),
        website: ticket.website.clone(),
        description: ticket.description.clone(),
        priority: Some(DisplayPriority::from_wire(&ticket.priority)),
        status: display_status(&ticket.status),
        user_id: ticket.user_id.clone(),
        proposal_amount: ticket.proposal_amount,
        payment_status: Some(ticket.payment_status),
        paid_at: ticket.paid_at,
        related_project_id: ticket.related_project_id.clone(),
        project_type: None,
        timeline: None,
        budget_range: None,
        invoice_approved: false,
        created_at: ticket.created_at,
        updated_at: ticket.updated_at,
    }
}

fn project_view(project: &ProjectRecord, users: &[UserRecord]) -> ViewTicket {
    let user = users.iter().find(|u| u.id == project.user_id);

    // Contact info comes from the owning user; the project's own name and
    // website stand in when user data is absent.
    let contact_name = user
        .and_then(|u| non_empty(&u.name))
        .unwrap_or_else(|| project.name.clone());
    let company = user
        .and_then(|u| non_empty(&u.company))
        .or_else(|| project.website.clone())
        .unwrap_or_default();

    ViewTicket {
        id: project.id.clone(),
        source: RecordKind::Project,
        ticket_number: None,
        request_type: None,
        contact_name,
        contact_email: user.map(|u| u.email.clone()).unwrap_or_default(),
        contact_phone: user.map(|u| u.phone.clone()).unwrap_or_default(),
        company,
        website: project.website.clone(),
        description: project.description.clone(),
        priority: None,
        status: display_status(&project.status),
        user_id: Some(project.user_id.clone()),
        proposal_amount: None,
        payment_status: None,
        paid_at: None,
        related_project_id: None,
        project_type: non_empty(&project.project_type),
        timeline: project.timeline.clone(),
        budget_range: project.budget_range.clone(),
        invoice_approved: project.invoice_approved != 0,
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}
