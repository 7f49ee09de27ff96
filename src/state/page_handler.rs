//! Page navigation handling (pure state transitions).
//!
//! Maps page-related KeyActions onto the pagination core.

use crate::model::KeyAction;
use crate::state::AppState;

/// Apply a page navigation action.
///
/// Digit labels only reach the core while page controls are visible, the same
/// way a page link can only be clicked once it is rendered. Returns true when
/// the active page changed.
pub fn handle_page_action(state: &mut AppState, action: KeyAction) -> bool {
    let view = state.view_mut();
    match action {
        KeyAction::NextPage => view.next_page(),
        KeyAction::PrevPage => view.prev_page(),
        KeyAction::FirstPage => view.first_page(),
        KeyAction::LastPage => view.last_page(),
        KeyAction::SelectPage(label) => {
            if !view.show_page_controls() {
                return false;
            }
            let before = view.active_page();
            view.select_page(label);
            view.active_page() != before
        }
        _ => false,
    }
}
