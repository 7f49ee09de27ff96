//! Tests for SearchState.

use super::*;

#[test]
fn default_is_inactive() {
    assert_eq!(SearchState::default(), SearchState::Inactive);
}

#[test]
fn inactive_has_no_text() {
    let state = SearchState::Inactive;
    assert_eq!(state.text(), None);
    assert!(!state.is_typing());
}

#[test]
fn typing_exposes_text() {
    let state = SearchState::Typing {
        query: "vat".to_string(),
        cursor: 3,
    };
    assert_eq!(state.text(), Some("vat"));
    assert!(state.is_typing());
}

#[test]
fn typing_with_empty_query_has_empty_text() {
    let state = SearchState::Typing {
        query: String::new(),
        cursor: 0,
    };
    assert_eq!(state.text(), Some(""));
}
