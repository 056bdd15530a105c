//! Preview pane for the focused panel's selected entry.

use bytesize::ByteSize;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::fs::dir_scanner::DirEntryInfo;
use crate::view::{icons, theme};

pub struct PreviewView;

impl PreviewView {
    pub fn render(frame: &mut Frame<'_>, selected: Option<&DirEntryInfo>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Preview ")
            .title_style(theme::title_style())
            .border_style(theme::region_border_style(false))
            .style(theme::base_style());

        let lines = match selected {
            Some(entry) => preview_lines(entry),
            None => vec![Line::styled("Nothing selected", theme::hint_style())],
        };

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn preview_lines(entry: &DirEntryInfo) -> Vec<Line<'static>> {
    let style = if entry.is_dir {
        theme::directory_style()
    } else {
        theme::file_style()
    };
    let kind = if entry.is_dir { "Directory" } else { "File" };

    let mut lines = vec![
        Line::styled(format!("{} {}", icons::entry_icon(entry), entry.name), style.bold()),
        Line::default(),
        Line::styled(kind, theme::hint_style()),
    ];
    if !entry.is_dir {
        lines.push(Line::raw(ByteSize::b(entry.size).to_string()));
    }
    lines
}
