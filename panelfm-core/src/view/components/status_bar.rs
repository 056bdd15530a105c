//! src/view/components/status_bar.rs
//!
//! Bottom line: the transient notification on the left when one is live,
//! otherwise the focused location; focus and panel counts on the right.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::app_state::AppState;
use crate::model::focus::FocusTarget;
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let left = match &state.ui.notification {
            Some(notification) => Span::styled(
                format!(" {} ", notification.message),
                theme::notification_style(notification.level),
            ),
            None => Span::raw(format!(" {}", state.panels.focused_panel().location.display())),
        };

        let focus = match state.panels.focus {
            FocusTarget::FilePanel => "Panel",
            FocusTarget::SideBar => "Sidebar",
            FocusTarget::ProcessBar => "Processes",
            FocusTarget::Metadata => "Metadata",
        };
        let right = format!(
            "{focus} | {}/{} panels{} ",
            state.panels.len(),
            state.panels.max_panel_count(),
            if state.show_hidden { " | hidden" } else { "" },
        );
        let right_width = u16::try_from(right.len()).unwrap_or(u16::MAX);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(right_width)]).areas(area);

        frame.render_widget(Paragraph::new(Line::from(left)).style(theme::status_bar_style()), left_area);
        frame.render_widget(
            Paragraph::new(right)
                .style(theme::status_bar_style())
                .alignment(Alignment::Right),
            right_area,
        );
    }
}
