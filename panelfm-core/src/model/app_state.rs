//! src/model/app_state.rs
//! ============================================================================
//! # AppState: the single mutable aggregate
//!
//! Panels and focus, the open view-scoped modal, the help menu, pinned
//! directories and the status line. Transition handlers receive it by
//! `&mut` and nothing else holds it.

use std::path::PathBuf;

use crate::config::Config;
use crate::model::help_menu::{HelpEntry, HelpMenu};
use crate::model::modal::Modal;
use crate::model::panel_set::{LayoutConfig, PanelSet};
use crate::model::pinned::PinnedDirectory;
use crate::model::ui_state::UIState;

/// Rows kept free around the help overlay.
const HELP_MARGIN_ROWS: u16 = 4;

/// Overlay height for the help menu on a terminal of `height` rows.
pub fn help_menu_height(terminal_height: u16, entries: usize) -> usize {
    let available = usize::from(terminal_height.saturating_sub(HELP_MARGIN_ROWS));
    (entries + 2).min(available).max(3)
}

/// Width of the text input in the create-item and command-line overlays.
pub fn modal_input_width(terminal_width: u16) -> u16 {
    (terminal_width / 2).clamp(20, 72).saturating_sub(4)
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub panels: PanelSet,
    pub modal: Modal,
    pub help_menu: HelpMenu,
    pub pinned: Vec<PinnedDirectory>,
    pub sidebar_cursor: usize,
    pub ui: UIState,
    pub show_hidden: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(
        config: &Config,
        start_dir: PathBuf,
        terminal_size: (u16, u16),
        help_entries: Vec<HelpEntry>,
        pinned: Vec<PinnedDirectory>,
    ) -> Self {
        let layout = LayoutConfig {
            sidebar_width: config.sidebar_width,
            preview_width_divisor: config.file_preview_width,
        };
        let panels = PanelSet::new(
            start_dir,
            layout,
            config.preview_open_on_start,
            config.footer_visible_on_start,
            terminal_size,
        );
        let height = help_menu_height(terminal_size.1, help_entries.len());

        Self {
            panels,
            modal: Modal::None,
            help_menu: HelpMenu::new(help_entries, height),
            pinned,
            sidebar_cursor: 0,
            ui: UIState::new(config.status_message_duration),
            show_hidden: config.show_hidden,
            should_quit: false,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.panels.resize(width, height);
        self.help_menu
            .set_height(help_menu_height(height, self.help_menu.data.len()));
        let input_width = modal_input_width(width);
        if let Some(input) = self.modal.input_mut() {
            input.width = input_width;
        }
        self.ui.request_redraw();
    }

    pub fn selected_pin(&self) -> Option<&PinnedDirectory> {
        self.pinned.get(self.sidebar_cursor)
    }

    pub fn clamp_sidebar_cursor(&mut self) {
        if self.sidebar_cursor >= self.pinned.len() {
            self.sidebar_cursor = self.pinned.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_height_bounds() {
        assert_eq!(help_menu_height(40, 10), 12);
        assert_eq!(help_menu_height(20, 40), 16);
        assert_eq!(help_menu_height(4, 40), 3);
    }

    #[test]
    fn test_resize_updates_panels_and_help() {
        let entries = vec![HelpEntry::section("General"); 30];
        let mut state = AppState::new(
            &Config::default(),
            PathBuf::from("/"),
            (120, 40),
            entries,
            Vec::new(),
        );
        assert_eq!(state.help_menu.height, 32);

        state.resize(200, 20);
        assert_eq!(state.panels.terminal_size(), (200, 20));
        assert_eq!(state.help_menu.height, 16);
    }

    #[test]
    fn test_clamp_sidebar_cursor() {
        let mut state = AppState::new(
            &Config::default(),
            PathBuf::from("/"),
            (120, 40),
            Vec::new(),
            vec![PinnedDirectory::from_path(std::path::Path::new("/a"))],
        );
        state.sidebar_cursor = 3;
        state.clamp_sidebar_cursor();
        assert_eq!(state.sidebar_cursor, 0);
    }
}
