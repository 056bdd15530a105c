//! Warning dialog; closed by Enter or Esc.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::modal::WarnModal;
use crate::view::components::popup;
use crate::view::theme;

pub struct WarnOverlay;

impl WarnOverlay {
    pub fn render(frame: &mut Frame<'_>, warn: &WarnModal, area: Rect) {
        let overlay_area = popup::centered_fixed(area, 44, 6);
        frame.render_widget(Clear, overlay_area);

        let text = vec![
            Line::raw(warn.content.as_str()),
            Line::default(),
            Line::styled("enter / esc to close", theme::hint_style()),
        ];
        let dialog = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", warn.title))
                    .title_alignment(Alignment::Center)
                    .title_style(Style::default().fg(theme::ORANGE).bold())
                    .border_style(theme::warn_border_style())
                    .style(theme::base_style()),
            );
        frame.render_widget(dialog, overlay_area);
    }
}
