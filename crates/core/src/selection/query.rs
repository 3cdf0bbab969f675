//! Deep-link query parameter handling
//!
//! The detail view is addressed by exactly two mutually exclusive query
//! parameters, `project` and `ticket`. Everything else in the query string
//! belongs to other features and must survive untouched.

use portico_domain::constants::{QUERY_KEY_PROJECT, QUERY_KEY_TICKET};
use portico_domain::{QueryUpdate, RecordRef};
use url::form_urlencoded;

/// Extracts the detail reference from a raw query string, if any.
///
/// `project` wins when both parameters are somehow present. Empty values are
/// treated as absent. A ticket value may be a record id or a ticket number;
/// resolution against the loaded list happens later.
pub fn parse_detail_query(query: &str) -> Option<RecordRef> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut project = None;
    let mut ticket = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            QUERY_KEY_PROJECT if project.is_none() => project = Some(value.into_owned()),
            QUERY_KEY_TICKET if ticket.is_none() => ticket = Some(value.into_owned()),
            _ => {}
        }
    }
    project.map(RecordRef::Project).or(ticket.map(RecordRef::Ticket))
}

/// Applies a selection change to a raw query string, returning the new one.
///
/// Both detail parameters are dropped first so they stay mutually exclusive
/// and a cleared selection leaves no empty-valued key behind. Unrelated
/// parameters keep their relative order.
pub fn apply_query_update(query: &str, update: &QueryUpdate) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == QUERY_KEY_PROJECT || key == QUERY_KEY_TICKET {
            continue;
        }
        serializer.append_pair(&key, &value);
    }
    if let QueryUpdate::Set(reference) = update {
        let key = match reference {
            RecordRef::Project(_) => QUERY_KEY_PROJECT,
            RecordRef::Ticket(_) => QUERY_KEY_TICKET,
        };
        serializer.append_pair(key, reference.id());
    }
    serializer.finish()
}
