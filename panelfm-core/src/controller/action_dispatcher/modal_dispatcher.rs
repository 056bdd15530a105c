//! Opening, editing and resolving modals.
//!
//! View-scoped modals (create-item, warn, help menu, command line) take
//! precedence over the focused panel's own modal. Confirm and cancel take
//! the modal out of the state before acting on it, so every path leaves
//! the view in browse mode.

use tracing::debug;

use crate::controller::actions::Action;
use crate::controller::effects::Effect;
use crate::model::app_state::{AppState, modal_input_width};
use crate::model::modal::{CommandRequest, CreateItemModal, CreateRequest, Modal, WarnModal};
use crate::model::panel::{PanelModal, RenameOutcome};
use crate::model::text_input::TextInput;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::OpenCreateItem => {
            if !state.modal.is_open() {
                let location = state.panels.focused_panel().location.clone();
                let width = modal_input_width(state.panels.terminal_size().0);
                state.modal = Modal::CreateItem(CreateItemModal::new(location, width));
            }
            Vec::new()
        }

        Action::OpenCommandLine => {
            if !state.modal.is_open() {
                let mut input = TextInput::new("");
                input.width = modal_input_width(state.panels.terminal_size().0);
                input.focus();
                state.modal = Modal::CommandLine(input);
            }
            Vec::new()
        }

        Action::OpenHelpMenu => {
            if !state.modal.is_open() {
                state.modal = Modal::HelpMenu;
            }
            Vec::new()
        }

        Action::OpenRename => {
            state.panels.focused_panel_mut().open_rename();
            Vec::new()
        }

        Action::OpenSortOptions => {
            state.panels.focused_panel_mut().open_sort_options();
            Vec::new()
        }

        Action::OpenSearch => {
            state.panels.focused_panel_mut().open_search();
            Vec::new()
        }

        Action::ToggleReverseSort => {
            state.panels.focused_panel_mut().toggle_reverse_sort();
            Vec::new()
        }

        Action::ModalUp => {
            if state.modal == Modal::HelpMenu {
                state.help_menu.list_up();
            } else if state.panels.focused_panel().modal == PanelModal::SortOptions {
                state.panels.focused_panel_mut().sort_options_list_up();
            }
            Vec::new()
        }

        Action::ModalDown => {
            if state.modal == Modal::HelpMenu {
                state.help_menu.list_down();
            } else if state.panels.focused_panel().modal == PanelModal::SortOptions {
                state.panels.focused_panel_mut().sort_options_list_down();
            }
            Vec::new()
        }

        Action::Confirm => confirm(state),

        Action::Cancel => {
            cancel(state);
            Vec::new()
        }

        edit if edit.is_input_edit() => {
            edit_active_input(state, &edit);
            Vec::new()
        }

        _ => Vec::new(),
    }
}

fn confirm(state: &mut AppState) -> Vec<Effect> {
    match std::mem::take(&mut state.modal) {
        Modal::None => confirm_panel_modal(state),

        Modal::CreateItem(modal) => match modal.request() {
            CreateRequest::Empty => {
                warn_empty_name(state);
                Vec::new()
            }
            request => vec![Effect::CreateItem {
                request,
                refresh: modal.location,
            }],
        },

        Modal::Warn(_) | Modal::HelpMenu => Vec::new(),

        Modal::CommandLine(input) => {
            let line = input.value();
            if line.trim().is_empty() {
                return Vec::new();
            }
            let request = CommandRequest::parse(line);
            debug!(
                marker = "COMMAND_LINE_SUBMITTED",
                operation_type = "command_line",
                line = %request.shell_line,
                open_panel = request.open_panel,
                "Command line submitted"
            );
            vec![Effect::RunCommand {
                line: request.shell_line,
                cwd: state.panels.focused_panel().location.clone(),
                open_panel: request.open_panel,
            }]
        }
    }
}

fn confirm_panel_modal(state: &mut AppState) -> Vec<Effect> {
    let panel = state.panels.focused_panel_mut();
    match panel.modal {
        PanelModal::Renaming(_) => match panel.confirm_rename() {
            RenameOutcome::Request { from, to } => vec![Effect::Rename {
                from,
                to,
                refresh: panel.location.clone(),
            }],
            RenameOutcome::EmptyName => {
                warn_empty_name(state);
                Vec::new()
            }
            RenameOutcome::NoTarget | RenameOutcome::NotRenaming => Vec::new(),
        },
        PanelModal::SortOptions => {
            panel.confirm_sort_options();
            Vec::new()
        }
        PanelModal::Searching => {
            panel.confirm_search();
            Vec::new()
        }
        PanelModal::Browse => Vec::new(),
    }
}

fn cancel(state: &mut AppState) {
    if std::mem::take(&mut state.modal) != Modal::None {
        return;
    }

    let panel = state.panels.focused_panel_mut();
    match panel.modal {
        PanelModal::Renaming(_) => panel.cancel_rename(),
        PanelModal::SortOptions => panel.cancel_sort_options(),
        PanelModal::Searching => panel.cancel_search(),
        PanelModal::Browse => {}
    }
}

fn warn_empty_name(state: &mut AppState) {
    state.modal = Modal::Warn(WarnModal {
        title: "Invalid name".into(),
        content: "The name cannot be empty".into(),
    });
}

fn apply_edit(input: &mut TextInput, edit: &Action) {
    match edit {
        Action::InputChar(ch) => input.insert_char(*ch),
        Action::InputBackspace => {
            input.delete_char_before();
        }
        Action::InputLeft => input.move_left(),
        Action::InputRight => input.move_right(),
        Action::InputHome => input.move_home(),
        Action::InputEnd => input.move_end(),
        _ => {}
    }
}

/// Route an edit to the view modal's input, else the rename prompt, else
/// the search bar.
fn edit_active_input(state: &mut AppState, edit: &Action) {
    if let Some(input) = state.modal.input_mut() {
        apply_edit(input, edit);
        return;
    }

    let panel = state.panels.focused_panel_mut();
    if let Some(input) = panel.rename_input_mut() {
        apply_edit(input, edit);
        return;
    }
    if panel.modal == PanelModal::Searching {
        panel.edit_search(|input| apply_edit(input, edit));
    }
}
