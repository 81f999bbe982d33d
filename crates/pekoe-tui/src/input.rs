use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    GoToSection(usize),
    NextSection,
    PrevSection,
    ScrollToTop,  // Animated return to the top of the page
    ToggleMenu,   // Open/close the section menu overlay
    ToggleHours,  // Expand/collapse the hours accordion
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match app.mode {
        // Any key exits help
        Mode::Help => return Action::ExitMode,
        Mode::Menu => return handle_menu_mode(key, keymap),
        Mode::Normal => {}
    }

    let binding = KeyBinding::from_event(key);

    // 'g' double-press sequence
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap
                .get_pending_g_action()
                .cloned()
                .unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    // Number keys jump straight to a section, like the nav links
    if let (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) = (key.code, key.modifiers) {
        return Action::GoToSection(c as usize - '1' as usize);
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Key handling while the section menu overlay is open. Scrolling is
/// locked; only navigation out of the overlay and closing it work.
fn handle_menu_mode(key: KeyEvent, keymap: &Keymap) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoToSection(c as usize - '1' as usize)
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        _ => {
            // The toggle key closes the overlay again
            let binding = KeyBinding::from_event(key);
            match keymap.get(&binding) {
                Some(Action::ToggleMenu) => Action::ToggleMenu,
                _ => Action::None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pekoe_core::{AppConfig, Page};
    use std::sync::Arc;

    fn test_app() -> App {
        App::new(Arc::new(AppConfig::default()), Page::sample())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('t'), KeyModifiers::NONE), &app, &keymap),
            Action::ScrollToTop
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Tab, KeyModifiers::NONE), &app, &keymap),
            Action::NextSection
        );
    }

    #[test]
    fn test_backtab_triggers_prev_section() {
        let app = test_app();
        let keymap = Keymap::default();

        // Shift-Tab arrives from the terminal as BackTab
        assert_eq!(
            handle_key_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app, &keymap),
            Action::PrevSection
        );
        assert_eq!(
            handle_key_event(press(KeyCode::BackTab, KeyModifiers::NONE), &app, &keymap),
            Action::PrevSection
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        let keymap = Keymap::default();

        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);

        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_number_keys_map_to_sections() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(press(KeyCode::Char('1'), KeyModifiers::NONE), &app, &keymap),
            Action::GoToSection(0)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('5'), KeyModifiers::NONE), &app, &keymap),
            Action::GoToSection(4)
        );
    }

    #[test]
    fn test_menu_mode_locks_out_scrolling() {
        let mut app = test_app();
        app.toggle_menu();
        assert_eq!(app.mode, Mode::Menu);
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::None
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('3'), KeyModifiers::NONE), &app, &keymap),
            Action::GoToSection(2)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Esc, KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('m'), KeyModifiers::NONE), &app, &keymap),
            Action::ToggleMenu
        );
    }

    #[test]
    fn test_help_mode_any_key_exits() {
        let mut app = test_app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
    }
}
