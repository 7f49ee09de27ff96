//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings with option to override via configuration.
/// Bindings apply while the record list has focus; the search box consumes
/// text keys itself.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Page navigation
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage);

        // Direct page selection
        for (digit, label) in ('1'..='9').zip(1usize..) {
            bind(
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                KeyAction::SelectPage(label),
            );
        }

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::SubmitSearch);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::CancelSearch);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        Self { bindings }
    }
}
