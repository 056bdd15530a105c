//! src/view/components/footer.rs
//! ============================================================================
//! # Footer: process bar and metadata
//!
//! Both regions can take focus; their border shows which one holds it.

use bytesize::ByteSize;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::model::app_state::AppState;
use crate::model::focus::FocusTarget;
use crate::view::theme;

pub struct FooterView;

impl FooterView {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let [process_area, metadata_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

        Self::render_process_bar(frame, state, process_area);
        Self::render_metadata(frame, state, metadata_area);
    }

    fn render_process_bar(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let block = region_block(" Processes ", state.panels.focus == FocusTarget::ProcessBar);
        frame.render_widget(
            Paragraph::new("No running processes")
                .style(theme::hint_style())
                .block(block),
            area,
        );
    }

    fn render_metadata(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let block = region_block(" Metadata ", state.panels.focus == FocusTarget::Metadata);
        let Some(entry) = state.panels.focused_panel().selected() else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let modified = entry
            .modified_at()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        let size = if entry.is_dir {
            "-".to_string()
        } else {
            ByteSize::b(entry.size).to_string()
        };

        let rows = vec![
            Row::new(vec!["Name".to_string(), entry.name.clone()]),
            Row::new(vec!["Path".to_string(), entry.location.display().to_string()]),
            Row::new(vec!["Size".to_string(), size]),
            Row::new(vec!["Modified".to_string(), modified]),
        ];

        let table = Table::new(rows, [Constraint::Length(10), Constraint::Fill(1)])
            .style(theme::file_style())
            .block(block);
        frame.render_widget(table, area);
    }
}

fn region_block(title: &'static str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme::title_style())
        .border_style(theme::region_border_style(focused))
        .style(theme::base_style())
}
