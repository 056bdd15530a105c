//! src/controller/handlers/key_handler_orchestrator.rs
//! ============================================================================
//! # Key routing
//!
//! A key goes to the open view modal first, then to the focused panel's
//! modal, and only then to the key map for the current focus target. An
//! open modal swallows every key it does not understand.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::keymap::{KeyContext, KeyMap};
use crate::controller::actions::Action;
use crate::model::app_state::AppState;
use crate::model::focus::FocusTarget;
use crate::model::modal::Modal;
use crate::model::panel::PanelModal;

#[derive(Debug, Clone)]
pub struct KeyHandlerOrchestrator {
    keymap: KeyMap,
}

impl KeyHandlerOrchestrator {
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    pub fn handle_key(&self, state: &AppState, key: KeyEvent) -> Option<Action> {
        let action = match &state.modal {
            Modal::CreateItem(_) | Modal::CommandLine(_) => text_input_action(key),
            Modal::Warn(_) => confirm_or_cancel(key),
            Modal::HelpMenu => help_menu_action(key),
            Modal::None => self.panel_action(state, key),
        };

        trace!(
            marker = "KEY_ROUTED",
            operation_type = "input_handling",
            key = ?key,
            action = ?action,
            "Key routed"
        );
        action
    }

    fn panel_action(&self, state: &AppState, key: KeyEvent) -> Option<Action> {
        match state.panels.focused_panel().modal {
            PanelModal::Renaming(_) | PanelModal::Searching => text_input_action(key),
            PanelModal::SortOptions => sort_options_action(key),
            PanelModal::Browse => {
                let context = match state.panels.focus {
                    FocusTarget::FilePanel => KeyContext::FilePanel,
                    FocusTarget::SideBar => KeyContext::SideBar,
                    FocusTarget::ProcessBar | FocusTarget::Metadata => KeyContext::Global,
                };
                self.keymap.lookup(context, key)
            }
        }
    }
}

fn text_input_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Left => Some(Action::InputLeft),
        KeyCode::Right => Some(Action::InputRight),
        KeyCode::Home => Some(Action::InputHome),
        KeyCode::End => Some(Action::InputEnd),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

fn confirm_or_cancel(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

fn list_navigation(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ModalUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ModalDown),
        _ => None,
    }
}

fn help_menu_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::Cancel),
        _ => list_navigation(key),
    }
}

fn sort_options_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('R') => Some(Action::ToggleReverseSort),
        _ => confirm_or_cancel(key).or_else(|| list_navigation(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::keymap::default_bindings;
    use super::super::utils::*;
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    fn setup() -> (KeyHandlerOrchestrator, AppState) {
        let state = AppState::new(
            &Config::default(),
            PathBuf::from("/"),
            (120, 40),
            Vec::new(),
            Vec::new(),
        );
        (
            KeyHandlerOrchestrator::new(KeyMap::new(&default_bindings())),
            state,
        )
    }

    #[test]
    fn test_open_modal_captures_letters() {
        let (keys, mut state) = setup();
        assert_eq!(keys.handle_key(&state, key('q')), Some(Action::Quit));

        state.modal = Modal::CommandLine(crate::model::text_input::TextInput::new(""));
        assert_eq!(keys.handle_key(&state, key('q')), Some(Action::InputChar('q')));
        assert_eq!(keys.handle_key(&state, escape_key()), Some(Action::Cancel));
        assert_eq!(keys.handle_key(&state, ctrl('c')), None);
    }

    #[test]
    fn test_panel_modal_routes_before_keymap() {
        let (keys, mut state) = setup();
        state.panels.focused_panel_mut().open_search();
        assert_eq!(keys.handle_key(&state, key('n')), Some(Action::InputChar('n')));
        assert_eq!(keys.handle_key(&state, enter_key()), Some(Action::Confirm));

        state.panels.focused_panel_mut().confirm_search();
        state.panels.focused_panel_mut().open_sort_options();
        assert_eq!(keys.handle_key(&state, key('j')), Some(Action::ModalDown));
        assert_eq!(keys.handle_key(&state, key('R')), Some(Action::ToggleReverseSort));
        assert_eq!(keys.handle_key(&state, key('n')), None);
    }

    #[test]
    fn test_focus_target_selects_context() {
        let (keys, mut state) = setup();
        state.panels.focus_on_side_bar();
        assert_eq!(keys.handle_key(&state, key('j')), Some(Action::SidebarDown));
        assert_eq!(keys.handle_key(&state, key('s')), Some(Action::FocusOnSideBar));

        state.panels.focus_on_side_bar();
        state.panels.focus_on_process_bar();
        assert_eq!(keys.handle_key(&state, key('j')), None);
        assert_eq!(keys.handle_key(&state, key('p')), Some(Action::FocusOnProcessBar));
    }

    #[test]
    fn test_help_menu_keys() {
        let (keys, mut state) = setup();
        state.modal = Modal::HelpMenu;
        assert_eq!(keys.handle_key(&state, key('?')), Some(Action::Cancel));
        assert_eq!(
            keys.handle_key(&state, arrow_key(KeyCode::Down)),
            Some(Action::ModalDown)
        );
        assert_eq!(keys.handle_key(&state, key('n')), None);
    }
}
