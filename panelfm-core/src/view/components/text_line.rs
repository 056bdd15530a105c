//! One-line rendering of a [`TextInput`] with a prefix, placeholder and
//! terminal cursor.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::text_input::TextInput;
use crate::view::theme;

pub fn render(frame: &mut Frame<'_>, input: &TextInput, prefix: &str, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let prefix_span = Span::styled(prefix.to_string(), theme::hint_style());
    let body = if input.value().is_empty() && input.is_focused() {
        Span::styled(input.placeholder, theme::hint_style())
    } else {
        Span::styled(input.value().to_string(), theme::input_style(input.is_focused()))
    };

    let line = Line::from(vec![prefix_span.clone(), body]);
    frame.render_widget(Paragraph::new(line), area);

    if input.is_focused() {
        let before_cursor = Span::raw(&input.value()[..input.cursor()]);
        let offset = u16::try_from(prefix_span.width() + before_cursor.width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}
