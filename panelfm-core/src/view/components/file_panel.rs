//! src/view/components/file_panel.rs
//! ============================================================================
//! # File panel: search line, entry table, rename prompt and sort menu

use bytesize::ByteSize;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use crate::fs::dir_scanner::DirEntryInfo;
use crate::model::panel::{Panel, PanelModal};
use crate::model::sort_options::SortKey;
use crate::view::components::{popup, text_line};
use crate::view::{icons, theme};

pub struct FilePanelView;

impl FilePanelView {
    pub fn render(frame: &mut Frame<'_>, panel: &Panel, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", panel.location.display()))
            .title_style(theme::title_style())
            .border_style(theme::panel_border_style(panel.focus_type))
            .style(theme::base_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [search_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

        Self::render_search_line(frame, panel, search_area);

        if let Some(message) = &panel.last_error {
            frame.render_widget(Paragraph::new(message.as_str()).style(theme::error_style()), table_area);
        } else if panel.loading {
            frame.render_widget(Paragraph::new("Loading…").style(theme::hint_style()), table_area);
        } else {
            Self::render_entries(frame, panel, table_area);
        }

        if panel.modal == PanelModal::SortOptions {
            Self::render_sort_menu(frame, panel, area);
        }
    }

    fn render_search_line(frame: &mut Frame<'_>, panel: &Panel, area: Rect) {
        match &panel.modal {
            PanelModal::Renaming(rename) => {
                text_line::render(frame, &rename.input, "Rename: ", area);
            }
            _ => {
                let prefix = format!("{} ", icons::SEARCH_ICON);
                text_line::render(frame, &panel.search_bar, &prefix, area);
            }
        }
    }

    fn render_entries(frame: &mut Frame<'_>, panel: &Panel, area: Rect) {
        let elements = panel.elements();
        if elements.is_empty() {
            frame.render_widget(Paragraph::new("Empty directory").style(theme::hint_style()), area);
            return;
        }

        let header = Row::new(["Name", "Size", "Modified"]).style(theme::header_style());

        let rows: Vec<Row> = elements
            .iter()
            .skip(panel.render_index)
            .take(panel.viewport_rows)
            .map(entry_row)
            .collect();

        let widths = [Constraint::Fill(1), Constraint::Length(10), Constraint::Length(16)];
        let selected = panel.cursor.checked_sub(panel.render_index);
        let mut table_state = TableState::default().with_selected(selected);

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::cursor_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_sort_menu(frame: &mut Frame<'_>, panel: &Panel, area: Rect) {
        let options = &panel.sort_options;
        let height = u16::try_from(options.option_count()).unwrap_or(u16::MAX).saturating_add(2);
        let menu_area = popup::centered_fixed(area, 30.min(area.width), height.min(area.height));

        let items: Vec<ListItem> = SortKey::ALL
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let marker = if i == options.data.selected { "● " } else { "  " };
                ListItem::new(format!("{marker}{key}"))
            })
            .collect();

        let order = if options.data.reversed { " reversed " } else { " ascending " };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Sort by ")
                    .title_bottom(Line::from(order).right_aligned())
                    .border_style(theme::overlay_border_style())
                    .style(theme::base_style()),
            )
            .highlight_style(theme::cursor_style());

        let mut state = ListState::default().with_selected(Some(options.cursor));
        frame.render_widget(Clear, menu_area);
        frame.render_stateful_widget(list, menu_area, &mut state);
    }
}

fn entry_row(entry: &DirEntryInfo) -> Row<'static> {
    let style = if entry.is_dir {
        theme::directory_style()
    } else {
        theme::file_style()
    };
    let size = if entry.is_dir {
        String::new()
    } else {
        ByteSize::b(entry.size).to_string()
    };
    let modified = entry
        .modified_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    Row::new(vec![
        Cell::from(format!("{} {}", icons::entry_icon(entry), entry.name)),
        Cell::from(size),
        Cell::from(modified),
    ])
    .style(style)
}
