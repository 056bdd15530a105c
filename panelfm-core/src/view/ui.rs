//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the whole screen from `&AppState`; column
//! widths come from the panel set's geometry so the drawn panels always
//! match what the layout engine computed.

use ratatui::prelude::*;
use tracing::{instrument, trace};

use crate::model::app_state::AppState;
use crate::model::modal::Modal;
use crate::view::components::{
    FilePanelView, FooterView, HelpOverlay, InputPromptOverlay, PreviewView, SidebarView, StatusBar,
    WarnOverlay,
};
use crate::view::icons;

/// Columns each panel border adds to its inner width.
const BORDER_COLUMNS: u16 = 2;

#[derive(Debug, Default)]
pub struct UIRenderer {
    frames: u64,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, f: &mut Frame<'_>, state: &AppState) {
        let [body, footer, status] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(state.panels.footer_height()),
            Constraint::Length(1),
        ])
        .areas(f.area());

        self.draw_body(f, state, body);
        if state.panels.footer_visible {
            FooterView::render(f, state, footer);
        }
        StatusBar::render(f, state, status);
        self.draw_modal(f, state);

        self.frames += 1;
        trace!(
            marker = "FRAME_RENDERED",
            operation_type = "render",
            frame = self.frames,
            "Frame rendered"
        );
    }

    fn draw_body(&self, f: &mut Frame<'_>, state: &AppState, area: Rect) {
        let geometry = state.panels.geometry();
        let sidebar_width = state.panels.layout().sidebar_width;

        let mut constraints = Vec::with_capacity(geometry.panel_count + 2);
        if sidebar_width > 0 {
            constraints.push(Constraint::Length(sidebar_width));
        }
        constraints.extend(
            geometry
                .panel_widths()
                .into_iter()
                .map(|w| Constraint::Length(w.saturating_add(BORDER_COLUMNS))),
        );
        if state.panels.preview_open() {
            constraints.push(Constraint::Length(geometry.preview_width.saturating_add(BORDER_COLUMNS)));
        }

        let columns = Layout::horizontal(constraints).split(area);
        let mut columns = columns.iter().copied();

        if sidebar_width > 0
            && let Some(sidebar) = columns.next()
        {
            SidebarView::render(f, state, sidebar);
        }
        for panel in state.panels.panels() {
            if let Some(column) = columns.next() {
                FilePanelView::render(f, panel, column);
            }
        }
        if state.panels.preview_open()
            && let Some(preview) = columns.next()
        {
            PreviewView::render(f, state.panels.focused_panel().selected(), preview);
        }
    }

    fn draw_modal(&self, f: &mut Frame<'_>, state: &AppState) {
        let area = f.area();
        match &state.modal {
            Modal::None => {}
            Modal::CreateItem(modal) => InputPromptOverlay::render(
                f,
                "Create file or directory",
                "",
                "Enter to create • Esc to cancel",
                &modal.input,
                area,
            ),
            Modal::CommandLine(input) => {
                let prefix = format!("{} ", icons::TERMINAL_ICON);
                InputPromptOverlay::render(
                    f,
                    "Command line",
                    &prefix,
                    "Prefix with spf to open the output in a new panel",
                    input,
                    area,
                );
            }
            Modal::Warn(warn) => WarnOverlay::render(f, warn, area),
            Modal::HelpMenu => HelpOverlay::render(f, &state.help_menu, area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fs::dir_scanner::DirEntryInfo;
    use crate::model::modal::WarnModal;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;

    fn screen(state: &AppState) -> String {
        let (w, h) = state.panels.terminal_size();
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        let mut renderer = UIRenderer::new();
        terminal.draw(|f| renderer.render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(
            &Config::default(),
            PathBuf::from("/w"),
            (120, 30),
            Vec::new(),
            Vec::new(),
        );
        state.panels.focused_panel_mut().apply_listing(vec![DirEntryInfo {
            name: "readme.md".into(),
            location: PathBuf::from("/w/readme.md"),
            is_dir: false,
            size: 12,
            modified: 0,
        }]);
        state
    }

    #[test]
    fn test_renders_panel_listing_and_location() {
        let text = screen(&loaded_state());
        assert!(text.contains("readme.md"));
        assert!(text.contains(" /w "));
        assert!(text.contains("Pinned"));
    }

    #[test]
    fn test_renders_warn_modal() {
        let mut state = loaded_state();
        state.modal = Modal::Warn(WarnModal {
            title: "Invalid name".into(),
            content: "The name cannot be empty".into(),
        });
        let text = screen(&state);
        assert!(text.contains("Invalid name"));
        assert!(text.contains("The name cannot be empty"));
    }

    #[test]
    fn test_notification_replaces_location_in_status() {
        let mut state = loaded_state();
        state.ui.show_error("This path does not exist");
        assert!(screen(&state).contains("This path does not exist"));
    }

    #[test]
    fn test_every_panel_gets_a_column() {
        let mut state = loaded_state();
        state.panels.create_new_file_panel(PathBuf::from("/other"));
        let text = screen(&state);
        assert!(text.contains(" /w "));
        assert!(text.contains(" /other "));
    }
}
