//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns the
//! paginated view and the debounce scheduler that feeds it, so the shell
//! only translates terminal events into calls on this type.

use crate::state::debounce::QueryDebouncer;
use crate::state::pagination::PaginatedFilterView;
use crate::state::search_input_handler;
use crate::state::SearchState;
use std::time::{Duration, Instant};
use tracing::debug;

// ===== FocusPane =====

/// Which area receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusPane {
    /// Record list and page bar.
    #[default]
    List,
    /// Search box.
    Search,
}

// ===== AppState =====

/// Application state. No terminal access.
///
/// # State Machine
///
/// - **Focus**: List ⇄ Search (via `start_search` / `cancel_search`)
/// - **Search box**: Inactive → Typing → Inactive
/// - **Filter**: every edit schedules a debounced query; Enter applies at once
#[derive(Debug, Clone)]
pub struct AppState {
    /// The pagination core. All record data lives here.
    view: PaginatedFilterView,

    /// Pending debounced query.
    debouncer: QueryDebouncer,

    /// Which area has keyboard focus.
    pub focus: FocusPane,

    /// Search box state.
    pub search: SearchState,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Entries skipped while loading, shown in the status bar.
    malformed_count: usize,

    /// Where the records came from (file path or `<stdin>`).
    source_label: String,
}

impl AppState {
    /// Create state focused on the record list with the search box closed.
    pub fn new(view: PaginatedFilterView, debouncer: QueryDebouncer) -> Self {
        Self {
            view,
            debouncer,
            focus: FocusPane::List,
            search: SearchState::Inactive,
            help_visible: false,
            malformed_count: 0,
            source_label: String::new(),
        }
    }

    /// Record where the data came from and how much of it was skipped.
    pub fn with_source_info(mut self, label: impl Into<String>, malformed_count: usize) -> Self {
        self.source_label = label.into();
        self.malformed_count = malformed_count;
        self
    }

    /// The paginated view.
    pub fn view(&self) -> &PaginatedFilterView {
        &self.view
    }

    /// Mutable access to the paginated view, for page navigation.
    pub fn view_mut(&mut self) -> &mut PaginatedFilterView {
        &mut self.view
    }

    /// The pending-query scheduler.
    pub fn debouncer(&self) -> &QueryDebouncer {
        &self.debouncer
    }

    /// Number of input entries skipped while loading.
    pub fn malformed_count(&self) -> usize {
        self.malformed_count
    }

    /// Where the records came from.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    // ===== Filtering =====

    /// Apply a query immediately, dropping anything pending.
    pub fn apply_query(&mut self, query: &str) {
        self.debouncer.cancel();
        let output = self.view.set_query(query);
        debug!(
            query,
            visible = output.visible.len(),
            pages = output.page_labels.len(),
            "Query applied"
        );
    }

    /// Fire the pending query if its quiet period is over.
    ///
    /// Returns true when the view changed.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        match self.debouncer.fire_if_due(now) {
            Some(query) => {
                self.apply_query(&query);
                true
            }
            None => false,
        }
    }

    /// Time until the pending query fires, if any.
    pub fn time_until_debounce(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    // ===== Search box =====

    /// Focus the search box, prefilled with the pending query if one is
    /// waiting, else the applied one.
    pub fn start_search(&mut self) {
        let prefill = self
            .debouncer
            .pending_query()
            .unwrap_or_else(|| self.view.query());
        self.search =
            search_input_handler::activate_search_input(std::mem::take(&mut self.search), prefill);
        self.focus = FocusPane::Search;
    }

    /// Leave the search box. A pending query still fires.
    pub fn cancel_search(&mut self) {
        self.search = search_input_handler::cancel_search(std::mem::take(&mut self.search));
        self.focus = FocusPane::List;
    }

    /// Apply the typed text now and clear the box.
    pub fn submit_search(&mut self) {
        let (search, submitted) =
            search_input_handler::submit_search(std::mem::take(&mut self.search));
        self.search = search;
        if let Some(query) = submitted {
            self.apply_query(&query);
        }
    }

    /// Clear the applied filter. Returns false when there was none.
    pub fn clear_filter(&mut self) -> bool {
        if self.view.query().is_empty() && !self.debouncer.is_pending() {
            return false;
        }
        self.apply_query("");
        true
    }

    /// Insert a character at the cursor and reschedule the query.
    pub fn type_char(&mut self, ch: char, now: Instant) {
        self.search = search_input_handler::handle_char_input(std::mem::take(&mut self.search), ch);
        self.schedule_typed_query(now);
    }

    /// Delete before the cursor and reschedule the query.
    pub fn backspace(&mut self, now: Instant) {
        self.search = search_input_handler::handle_backspace(std::mem::take(&mut self.search));
        self.schedule_typed_query(now);
    }

    /// Move the search cursor one character left.
    pub fn cursor_left(&mut self) {
        self.search = search_input_handler::handle_cursor_left(std::mem::take(&mut self.search));
    }

    /// Move the search cursor one character right.
    pub fn cursor_right(&mut self) {
        self.search = search_input_handler::handle_cursor_right(std::mem::take(&mut self.search));
    }

    fn schedule_typed_query(&mut self, now: Instant) {
        if let Some(text) = self.search.text() {
            self.debouncer.schedule(text, now);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
