//! Invoice derivation rules
//!
//! An invoice is virtual: the project is the header and every ticket whose
//! `related_project_id` points at it is a line item. All functions here are
//! pure joins over raw records, recomputed from scratch on demand.

use portico_domain::constants::STATUS_PENDING_PAYMENT;
use portico_domain::{InvoiceStatus, InvoiceSummary, PaymentStatus, ProjectRecord, TicketRecord};

fn linked<'a>(
    project_id: &'a str,
    tickets: &'a [TicketRecord],
) -> impl Iterator<Item = &'a TicketRecord> {
    tickets.iter().filter(move |t| t.related_project_id.as_deref() == Some(project_id))
}

/// Sum of proposal amounts over tickets linked to the project.
///
/// Missing amounts count as zero; no linked tickets gives a total of zero.
pub fn invoice_total(project_id: &str, tickets: &[TicketRecord]) -> f64 {
    linked(project_id, tickets).map(|t| t.proposal_amount.unwrap_or(0.0)).sum()
}

/// Derived payment status of the project's invoice.
///
/// Paid requires at least one linked ticket with every one of them paid;
/// partial requires at least one paid among several; everything else,
/// including zero linked tickets, is unpaid.
pub fn invoice_status(project_id: &str, tickets: &[TicketRecord]) -> InvoiceStatus {
    let mut linked_count = 0usize;
    let mut paid_count = 0usize;
    for ticket in linked(project_id, tickets) {
        linked_count += 1;
        if ticket.payment_status == PaymentStatus::Paid {
            paid_count += 1;
        }
    }

    if linked_count == 0 {
        InvoiceStatus::Unpaid
    } else if paid_count == linked_count {
        InvoiceStatus::Paid
    } else if paid_count > 0 {
        InvoiceStatus::Partial
    } else {
        InvoiceStatus::Unpaid
    }
}

/// Whether the payment flow may be offered for the project.
///
/// Enabled only while the stored status literal is exactly `pending-payment`.
pub fn payment_enabled(project: &ProjectRecord) -> bool {
    project.status == STATUS_PENDING_PAYMENT
}

/// Full invoice aggregate for one project.
pub fn invoice_summary(project: &ProjectRecord, tickets: &[TicketRecord]) -> InvoiceSummary {
    let linked_count = linked(&project.id, tickets).count();
    let paid_count = linked(&project.id, tickets)
        .filter(|t| t.payment_status == PaymentStatus::Paid)
        .count();

    InvoiceSummary {
        project_id: project.id.clone(),
        total: invoice_total(&project.id, tickets),
        status: invoice_status(&project.id, tickets),
        ticket_count: linked_count,
        paid_count,
        payment_enabled: payment_enabled(project),
    }
}
