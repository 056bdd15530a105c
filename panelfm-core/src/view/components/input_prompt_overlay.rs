//! ``src/view/components/input_prompt_overlay.rs``
//! ============================================================================
//! # `InputPromptOverlay`: centered one-line prompt for create-item and the
//! command line

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::text_input::TextInput;
use crate::view::components::{popup, text_line};
use crate::view::theme;

/// Border columns around the input.
const FRAME_COLUMNS: u16 = 4;

pub struct InputPromptOverlay;

impl InputPromptOverlay {
    pub fn render(frame: &mut Frame<'_>, title: &str, prefix: &str, hint: &str, input: &TextInput, area: Rect) {
        let width = input.width.saturating_add(FRAME_COLUMNS);
        let overlay_area = popup::centered_fixed(area, width, 3);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .title_alignment(Alignment::Center)
            .title_style(theme::title_style())
            .border_style(theme::overlay_border_style())
            .style(theme::base_style());
        let inner = block.inner(overlay_area).inner(Margin::new(1, 0));
        frame.render_widget(block, overlay_area);
        text_line::render(frame, input, prefix, inner);

        let hint_area = Rect {
            x: overlay_area.x,
            y: overlay_area.bottom(),
            width: overlay_area.width,
            height: 1,
        };
        if hint_area.y < area.bottom() {
            frame.render_widget(
                Paragraph::new(hint).style(theme::hint_style()).alignment(Alignment::Center),
                hint_area,
            );
        }
    }
}
