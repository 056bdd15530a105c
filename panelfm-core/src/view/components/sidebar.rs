//! src/view/components/sidebar.rs
//! ============================================================================
//! # Sidebar: pinned directories

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::app_state::AppState;
use crate::model::focus::FocusTarget;
use crate::view::{icons, theme};

pub struct SidebarView;

impl SidebarView {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let focused = state.panels.focus == FocusTarget::SideBar;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Pinned ")
            .title_style(theme::title_style())
            .border_style(theme::region_border_style(focused))
            .style(theme::base_style());

        if state.pinned.is_empty() {
            let hint = Paragraph::new("Press P to pin").style(theme::hint_style()).block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = state
            .pinned
            .iter()
            .map(|pin| ListItem::new(format!("{} {}", icons::PIN_ICON, pin.name)))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(theme::directory_style())
            .highlight_style(theme::cursor_style());

        // Only show the cursor while the sidebar owns the keyboard.
        let selected = focused.then_some(state.sidebar_cursor);
        let mut list_state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
