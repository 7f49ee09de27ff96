//! Search box state machine.
//!
//! SearchState is a sum type for the search box:
//! - Inactive: box not focused; the applied filter (if any) stays in effect
//! - Typing: user is editing text in the box

/// Search box state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// Box not focused.
    #[default]
    Inactive,
    /// User is typing. `cursor` is a char index into `query`.
    Typing {
        /// Text typed so far.
        query: String,
        /// Char index into `query`.
        cursor: usize,
    },
}

impl SearchState {
    /// Text currently in the box, if typing.
    pub fn text(&self) -> Option<&str> {
        match self {
            SearchState::Typing { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }

    /// True while the search box is open.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
