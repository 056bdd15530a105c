//! src/controller/action_dispatcher.rs
//! ============================================================================
//! # Action dispatcher: the pure state transition
//!
//! [`dispatch`] applies one [`Action`] to the [`AppState`] and returns the
//! side effects it wants performed. It never touches the filesystem or
//! spawns processes; the executor does that and feeds results back in as
//! further actions.
//!
//! Actions are split by concern into sub-dispatchers:
//! - [`panel_dispatcher`]: panel lifecycle, focus, sidebar and pins
//! - [`navigation_dispatcher`]: cursor movement, directory changes, listings
//! - [`modal_dispatcher`]: opening, editing, confirming and cancelling modals

use std::time::Instant;

use tracing::trace;

use crate::controller::actions::Action;
use crate::controller::effects::Effect;
use crate::model::app_state::AppState;

pub mod modal_dispatcher;
pub mod navigation_dispatcher;
pub mod panel_dispatcher;

pub fn dispatch(state: &mut AppState, action: Action) -> Vec<Effect> {
    if action == Action::Tick {
        state.ui.update_notification(Instant::now());
        return Vec::new();
    }

    trace!(
        marker = "ACTION_DISPATCHED",
        operation_type = "dispatch",
        action = ?action,
        "Dispatching action"
    );
    state.ui.request_redraw();

    match action {
        Action::Quit => {
            state.should_quit = true;
            Vec::new()
        }

        Action::Resize(width, height) => {
            state.resize(width, height);
            Vec::new()
        }

        Action::Notify { message, level } => {
            state.ui.show_notification(message, level);
            Vec::new()
        }

        Action::CreateNewFilePanel
        | Action::CloseFilePanel
        | Action::ToggleFilePreviewPanel
        | Action::ToggleFooter
        | Action::NextFilePanel
        | Action::PreviousFilePanel
        | Action::FocusOnSideBar
        | Action::FocusOnProcessBar
        | Action::FocusOnMetadata
        | Action::SidebarUp
        | Action::SidebarDown
        | Action::OpenPinned
        | Action::PinDirectory
        | Action::OpenPanelAt(_) => panel_dispatcher::handle(state, action),

        Action::CursorUp
        | Action::CursorDown
        | Action::EnterSelected
        | Action::GoToParent
        | Action::ToggleHiddenFiles
        | Action::DirectoryLoaded { .. }
        | Action::RefreshPanelsAt(_) => navigation_dispatcher::handle(state, action),

        _ => modal_dispatcher::handle(state, action),
    }
}

/// Listing request for `path` under the current hidden-file setting.
pub(crate) fn load_directory(state: &AppState, path: std::path::PathBuf) -> Effect {
    Effect::LoadDirectory {
        path,
        show_hidden: state.show_hidden,
    }
}
