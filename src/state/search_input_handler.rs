//! Search input handling (pure state transitions).
//!
//! Handles text editing for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//! Cursor positions are char indices, so multi-byte input is safe.

use crate::state::SearchState;

/// Byte offset of the `cursor`-th char in `s` (or `s.len()` past the end).
fn byte_offset(s: &str, cursor: usize) -> usize {
    s.char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            let offset = byte_offset(&query, cursor);
            query.insert(offset, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            let offset = byte_offset(&query, cursor - 1);
            query.remove(offset);
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Activate search input mode.
///
/// Transitions from Inactive to Typing, prefilled with the currently applied
/// query and the cursor at its end. No-op if already typing.
pub fn activate_search_input(state: SearchState, applied_query: &str) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: applied_query.to_string(),
            cursor: applied_query.chars().count(),
        },
        other => other,
    }
}

/// Leave the search box. The applied filter is untouched.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Submit the typed query immediately.
///
/// Returns the box cleared (still focused) and the text to apply.
/// Returns `None` for the text when not typing.
pub fn submit_search(state: SearchState) -> (SearchState, Option<String>) {
    match state {
        SearchState::Typing { query, .. } => (
            SearchState::Typing {
                query: String::new(),
                cursor: 0,
            },
            Some(query),
        ),
        other => (other, None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
