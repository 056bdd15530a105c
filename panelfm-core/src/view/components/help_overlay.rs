//! Scrollable help menu built from the key map.
//!
//! The overlay is exactly `help_menu.height` rows tall, so its viewport
//! matches the rows the menu scrolls over.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::help_menu::HelpMenu;
use crate::view::components::popup;
use crate::view::theme;

const HOTKEY_COLUMNS: usize = 22;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, menu: &HelpMenu, area: Rect) {
        let height = u16::try_from(menu.height).unwrap_or(u16::MAX);
        let width = (area.width / 5 * 3).max(40);
        let overlay_area = popup::centered_fixed(area, width, height);
        frame.render_widget(Clear, overlay_area);

        let lines: Vec<Line> = menu
            .visible()
            .iter()
            .enumerate()
            .map(|(row, entry)| {
                let index = menu.render_index + row;
                if let Some(title) = &entry.sub_title {
                    return Line::styled(title.to_string(), theme::header_style());
                }
                let hotkeys = entry.hotkeys.join(" | ");
                let line = Line::from(vec![
                    Span::styled(format!(" {hotkeys:<HOTKEY_COLUMNS$}"), Style::default().fg(theme::CYAN)),
                    Span::raw(entry.description.to_string()),
                ]);
                if index == menu.cursor {
                    line.style(theme::cursor_style())
                } else {
                    line
                }
            })
            .collect();

        let position = format!(" {}/{} ", menu.cursor, menu.data.len().saturating_sub(1));
        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .title_style(theme::title_style())
                .title_bottom(Line::from(position).right_aligned())
                .border_style(theme::overlay_border_style())
                .style(theme::base_style()),
        );
        frame.render_widget(help, overlay_area);
    }
}
