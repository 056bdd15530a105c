//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha palette and the styles built from it
//!
//! Colors follow the Catppuccin Mocha palette:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

use crate::model::panel::PanelFocus;
use crate::model::ui_state::NotificationLevel;

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn base_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

/// Border color tracks how strongly a panel holds focus.
pub fn panel_border_style(focus: PanelFocus) -> Style {
    match focus {
        PanelFocus::Primary => Style::default().fg(PURPLE),
        PanelFocus::Secondary => Style::default().fg(PINK),
        PanelFocus::None => Style::default().fg(COMMENT),
    }
}

pub fn region_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PURPLE)
    } else {
        Style::default().fg(COMMENT)
    }
}

pub fn title_style() -> Style {
    Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn directory_style() -> Style {
    Style::default().fg(CYAN)
}

pub fn file_style() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn cursor_style() -> Style {
    Style::default().bg(CURRENT_LINE).add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn error_style() -> Style {
    Style::default().fg(RED)
}

pub fn input_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOREGROUND)
    } else {
        Style::default().fg(COMMENT)
    }
}

pub fn overlay_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn warn_border_style() -> Style {
    Style::default().fg(ORANGE)
}

pub fn notification_style(level: NotificationLevel) -> Style {
    let fg = match level {
        NotificationLevel::Info => CYAN,
        NotificationLevel::Success => GREEN,
        NotificationLevel::Warning => YELLOW,
        NotificationLevel::Error => RED,
    };
    Style::default().fg(fg).bg(BACKGROUND).add_modifier(Modifier::BOLD)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(CURRENT_LINE).fg(FOREGROUND)
}
