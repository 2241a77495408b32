//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
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

        // Vim-style movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::MoveToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::MoveToBottom,
        );

        // Arrow keys
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::MoveUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::MoveDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::MoveToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::MoveToBottom,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );

        // Selection and focus
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::SelectRow,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::CycleFocus,
        );

        // Charts
        bindings.insert(
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            KeyAction::NextChart,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            KeyAction::PrevChart,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::DrawChart,
        );

        // Directory
        bindings.insert(
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            KeyAction::OpenDirectory,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::Reload,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        KeyBindings::default().get(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn vim_and_arrow_keys_move() {
        assert_eq!(
            action_for(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(KeyAction::MoveDown)
        );
        assert_eq!(
            action_for(KeyCode::Up, KeyModifiers::NONE),
            Some(KeyAction::MoveUp)
        );
        assert_eq!(
            action_for(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(KeyAction::MoveToBottom)
        );
    }

    #[test]
    fn lowercase_d_draws_and_ctrl_d_pages() {
        assert_eq!(
            action_for(KeyCode::Char('d'), KeyModifiers::NONE),
            Some(KeyAction::DrawChart)
        );
        assert_eq!(
            action_for(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(KeyAction::PageDown),
            "Ctrl+d must not draw a chart"
        );
    }

    #[test]
    fn brackets_cycle_chart_kind() {
        assert_eq!(
            action_for(KeyCode::Char(']'), KeyModifiers::NONE),
            Some(KeyAction::NextChart)
        );
        assert_eq!(
            action_for(KeyCode::Char('['), KeyModifiers::NONE),
            Some(KeyAction::PrevChart)
        );
    }

    #[test]
    fn quit_on_q_and_ctrl_c() {
        assert_eq!(
            action_for(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            action_for(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn unbound_key_has_no_action() {
        assert_eq!(action_for(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }
}
