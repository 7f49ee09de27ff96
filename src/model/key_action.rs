//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Page navigation
    /// Go to the next page. Default: l/→/n/Page Down
    NextPage,
    /// Go to the previous page. Default: h/←/p/Page Up
    PrevPage,
    /// Go to the first page. Default: g/Home
    FirstPage,
    /// Go to the last page. Default: G/End
    LastPage,
    /// Select a page by its label (1-9).
    SelectPage(usize),

    // Search
    /// Focus the search box. Default: / or Ctrl+f
    StartSearch,
    /// Apply the typed query now and clear the box. Default: Enter
    SubmitSearch,
    /// Leave the search box, or clear the applied filter when browsing. Default: Esc
    CancelSearch,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// True for actions that move between pages.
    pub fn is_page_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::NextPage
                | KeyAction::PrevPage
                | KeyAction::FirstPage
                | KeyAction::LastPage
                | KeyAction::SelectPage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_page_carries_label() {
        match KeyAction::SelectPage(3) {
            KeyAction::SelectPage(n) => assert_eq!(n, 3),
            _ => panic!("SelectPage should match SelectPage variant"),
        }
    }

    #[test]
    fn page_navigation_classification() {
        assert!(KeyAction::NextPage.is_page_navigation());
        assert!(KeyAction::SelectPage(2).is_page_navigation());
        assert!(!KeyAction::StartSearch.is_page_navigation());
        assert!(!KeyAction::Quit.is_page_navigation());
    }

    #[test]
    fn actions_are_hashable_map_keys() {
        let mut set = std::collections::HashSet::new();
        set.insert(KeyAction::Help);
        set.insert(KeyAction::Help);
        set.insert(KeyAction::SelectPage(1));
        set.insert(KeyAction::SelectPage(2));
        assert_eq!(set.len(), 3);
    }
}
