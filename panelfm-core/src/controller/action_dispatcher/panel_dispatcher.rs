//! Panel lifecycle, focus moves, the sidebar and pinned directories.

use std::path::PathBuf;

use tracing::info;

use super::load_directory;
use crate::controller::actions::Action;
use crate::controller::effects::Effect;
use crate::model::app_state::AppState;
use crate::model::pinned::toggle_pinned;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::CreateNewFilePanel => {
            let target = state.panels.pending_dir.clone();
            open_panel(state, target)
        }

        Action::OpenPanelAt(path) => {
            state.panels.pending_dir = path.clone();
            open_panel(state, path)
        }

        Action::CloseFilePanel => {
            state.panels.close_file_panel();
            Vec::new()
        }

        Action::ToggleFilePreviewPanel => {
            state.panels.toggle_file_preview_panel();
            Vec::new()
        }

        Action::ToggleFooter => {
            state.panels.toggle_footer();
            Vec::new()
        }

        Action::NextFilePanel => {
            state.panels.next_file_panel();
            Vec::new()
        }

        Action::PreviousFilePanel => {
            state.panels.previous_file_panel();
            Vec::new()
        }

        Action::FocusOnSideBar => {
            state.panels.focus_on_side_bar();
            Vec::new()
        }

        Action::FocusOnProcessBar => {
            state.panels.focus_on_process_bar();
            Vec::new()
        }

        Action::FocusOnMetadata => {
            state.panels.focus_on_metadata();
            Vec::new()
        }

        Action::SidebarUp => {
            let len = state.pinned.len();
            if len > 0 {
                state.sidebar_cursor = (state.sidebar_cursor + len - 1) % len;
            }
            Vec::new()
        }

        Action::SidebarDown => {
            let len = state.pinned.len();
            if len > 0 {
                state.sidebar_cursor = (state.sidebar_cursor + 1) % len;
            }
            Vec::new()
        }

        Action::OpenPinned => {
            let Some(target) = state.selected_pin().map(|pin| pin.path()) else {
                return Vec::new();
            };
            let target = state.panels.focused_panel_mut().change_directory(target);
            vec![load_directory(state, target)]
        }

        Action::PinDirectory => pin_directory(state),

        _ => Vec::new(),
    }
}

fn open_panel(state: &mut AppState, target: PathBuf) -> Vec<Effect> {
    if state.panels.create_new_file_panel(target.clone()) {
        vec![load_directory(state, target)]
    } else {
        Vec::new()
    }
}

fn pin_directory(state: &mut AppState) -> Vec<Effect> {
    let location = state.panels.focused_panel().location.clone();
    let pinned = toggle_pinned(&mut state.pinned, &location);
    state.clamp_sidebar_cursor();

    info!(
        marker = "PIN_TOGGLED",
        operation_type = "pinned",
        location = %location.display(),
        pinned,
        "Pinned directory toggled"
    );
    if pinned {
        state.ui.show_info("Directory pinned");
    } else {
        state.ui.show_info("Directory unpinned");
    }

    vec![Effect::SavePinned(state.pinned.clone())]
}
