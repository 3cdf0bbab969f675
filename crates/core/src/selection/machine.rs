//! Selection state machine
//!
//! One parameterized machine serves all four functional areas (admin and
//! client, projects and tickets); the area key is the only thing that
//! differs between instances, so their behavior cannot drift apart.

use portico_domain::{Area, QueryUpdate, RecordRef, ViewTicket};

/// Selection state for one functional area
///
/// Holds at most one selected item plus, transiently, a deep-link target
/// parsed from the URL that has not found its item yet.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    area: Area,
    selected: Option<ViewTicket>,
    pending: Option<RecordRef>,
}

impl SelectionMachine {
    /// Create a machine for one area, with nothing selected
    pub fn new(area: Area) -> Self {
        Self { area, selected: None, pending: None }
    }

    /// The area this machine belongs to
    pub fn area(&self) -> Area {
        self.area
    }

    /// Currently selected item, if any
    pub fn selected(&self) -> Option<&ViewTicket> {
        self.selected.as_ref()
    }

    /// User clicked a list row.
    ///
    /// Returns the query write that mirrors the new selection into the URL,
    /// always carrying the canonical record id.
    pub fn select(&mut self, item: ViewTicket) -> QueryUpdate {
        let update = QueryUpdate::Set(item.record_ref());
        self.selected = Some(item);
        self.pending = None;
        update
    }

    /// Explicit back/close action. The query parameter must be removed.
    pub fn clear(&mut self) -> QueryUpdate {
        self.selected = None;
        self.pending = None;
        QueryUpdate::Clear
    }

    /// Remembers a deep-link target until the matching item arrives.
    ///
    /// References of the wrong kind for this area are ignored; a `?project=`
    /// parameter means nothing to a ticket list.
    pub fn set_pending(&mut self, reference: RecordRef) {
        if reference.kind() == self.area.kind() {
            self.pending = Some(reference);
        }
    }

    /// Attempts to resolve a pending deep link against the area's list.
    ///
    /// Must be re-run on every list change, not just once: a link opened
    /// before the first load can only resolve once the list is non-empty.
    /// An unmatched link on a non-empty list is dropped; the URL is left
    /// alone and no detail view opens.
    pub fn resolve_pending(&mut self, list: &[ViewTicket]) {
        let Some(reference) = self.pending.as_ref() else {
            return;
        };
        if list.is_empty() {
            return;
        }
        if let Some(item) = list.iter().find(|item| item.matches_link(reference.id())) {
            self.selected = Some(item.clone());
        }
        self.pending = None;
    }

    /// Re-syncs the selection after a reload.
    ///
    /// A still-pending deep link gets another resolution attempt first. Then
    /// the previously selected id is looked up in the fresh list: when it
    /// still exists the fresh copy replaces the stale one, when it is gone
    /// the selection drops and the caller must clear the query parameter.
    pub fn refresh_after_reload(&mut self, list: &[ViewTicket]) -> Option<QueryUpdate> {
        self.resolve_pending(list);

        let selected_id = self.selected.as_ref()?.id.clone();
        match list.iter().find(|item| item.id == selected_id) {
            Some(fresh) => {
                self.selected = Some(fresh.clone());
                None
            }
            None => {
                self.selected = None;
                Some(QueryUpdate::Clear)
            }
        }
    }
}
