//! Cursor movement, directory changes and incoming listings.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use tracing::{debug, warn};

use super::load_directory;
use crate::controller::actions::Action;
use crate::controller::effects::Effect;
use crate::fs::dir_scanner::DirEntryInfo;
use crate::model::app_state::AppState;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::CursorUp => {
            state.panels.focused_panel_mut().cursor_up();
            Vec::new()
        }

        Action::CursorDown => {
            state.panels.focused_panel_mut().cursor_down();
            Vec::new()
        }

        Action::EnterSelected => {
            let target = state.panels.focused_panel_mut().enter_selected();
            target.map(|t| load_directory(state, t)).into_iter().collect()
        }

        Action::GoToParent => {
            let target = state.panels.focused_panel_mut().go_to_parent();
            target.map(|t| load_directory(state, t)).into_iter().collect()
        }

        Action::ToggleHiddenFiles => {
            state.show_hidden = !state.show_hidden;
            panel_locations(state)
                .into_iter()
                .map(|path| load_directory(state, path))
                .collect()
        }

        Action::RefreshPanelsAt(path) => {
            if state.panels.panels().iter().any(|p| p.is_at(&path)) {
                vec![load_directory(state, path)]
            } else {
                Vec::new()
            }
        }

        Action::DirectoryLoaded { path, result } => {
            apply_listing(state, &path, result);
            Vec::new()
        }

        _ => Vec::new(),
    }
}

/// Distinct panel locations in panel order.
fn panel_locations(state: &AppState) -> Vec<PathBuf> {
    let mut locations: Vec<PathBuf> = Vec::new();
    for panel in state.panels.panels() {
        if !locations.contains(&panel.location) {
            locations.push(panel.location.clone());
        }
    }
    locations
}

fn apply_listing(
    state: &mut AppState,
    path: &Path,
    result: Result<Vec<DirEntryInfo>, CompactString>,
) {
    let focused_here = state.panels.focused_panel().is_at(path);
    match result {
        Ok(entries) => {
            debug!(
                marker = "DIRECTORY_LISTING_APPLIED",
                operation_type = "navigation",
                path = %path.display(),
                count = entries.len(),
                "Applying directory listing"
            );
            for panel in state.panels.panels_mut() {
                if panel.is_at(path) {
                    panel.apply_listing(entries.clone());
                }
            }
        }
        Err(message) => {
            warn!(
                marker = "DIRECTORY_LISTING_FAILED",
                operation_type = "navigation",
                path = %path.display(),
                error = %message,
                "Directory listing failed"
            );
            for panel in state.panels.panels_mut() {
                if panel.is_at(path) {
                    panel.apply_listing_error(message.to_string());
                }
            }
            if focused_here {
                state.ui.show_error(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::dispatch;
    use super::super::test_support::{entry, state};
    use super::*;

    #[test]
    fn test_enter_and_parent_request_listings() {
        let mut state = state();
        // Sorted: docs, a.txt, b.txt
        let effects = dispatch(&mut state, Action::EnterSelected);
        assert_eq!(
            effects,
            vec![Effect::LoadDirectory {
                path: PathBuf::from("/w/docs"),
                show_hidden: false,
            }]
        );
        assert!(state.panels.focused_panel().loading);

        let effects = dispatch(&mut state, Action::GoToParent);
        assert_eq!(effects.len(), 1);
        assert_eq!(state.panels.focused_panel().location, PathBuf::from("/w"));
    }

    #[test]
    fn test_enter_on_file_is_noop() {
        let mut state = state();
        dispatch(&mut state, Action::CursorDown);
        assert!(dispatch(&mut state, Action::EnterSelected).is_empty());
        assert_eq!(state.panels.focused_panel().location, PathBuf::from("/w"));
    }

    #[test]
    fn test_listing_applies_to_every_panel_at_path() {
        let mut state = state();
        state.panels.pending_dir = PathBuf::from("/w");
        dispatch(&mut state, Action::CreateNewFilePanel);

        dispatch(
            &mut state,
            Action::DirectoryLoaded {
                path: PathBuf::from("/w"),
                result: Ok(vec![entry("/w", "only.txt", false)]),
            },
        );

        for panel in state.panels.panels() {
            assert_eq!(panel.elements().len(), 1);
            assert!(!panel.loading);
        }
    }

    #[test]
    fn test_listing_error_shows_status() {
        let mut state = state();
        dispatch(
            &mut state,
            Action::DirectoryLoaded {
                path: PathBuf::from("/w"),
                result: Err("This path does not exist".into()),
            },
        );
        let panel = state.panels.focused_panel();
        assert!(panel.elements().is_empty());
        assert_eq!(panel.last_error.as_deref(), Some("This path does not exist"));
        assert!(state.ui.notification.is_some());
    }

    #[test]
    fn test_toggle_hidden_reloads_distinct_locations() {
        let mut state = state();
        state.panels.pending_dir = PathBuf::from("/w");
        dispatch(&mut state, Action::CreateNewFilePanel);

        let effects = dispatch(&mut state, Action::ToggleHiddenFiles);
        assert!(state.show_hidden);
        assert_eq!(
            effects,
            vec![Effect::LoadDirectory {
                path: PathBuf::from("/w"),
                show_hidden: true,
            }]
        );
    }

    #[test]
    fn test_refresh_ignores_unshown_paths() {
        let mut state = state();
        let elsewhere = Action::RefreshPanelsAt(PathBuf::from("/elsewhere"));
        assert!(dispatch(&mut state, elsewhere).is_empty());
        let here = Action::RefreshPanelsAt(PathBuf::from("/w"));
        assert_eq!(dispatch(&mut state, here).len(), 1);
    }
}
