//! src/model/focus.rs
//! ============================================================================
//! # Focus controller
//!
//! Exactly one region owns the keyboard: the focused file panel, the sidebar
//! or one of the two footer regions. While a non-panel region owns it, the
//! focused panel is demoted to secondary focus; handing focus back always
//! returns it to that panel as primary.

use tracing::debug;

use crate::model::panel::PanelFocus;
use crate::model::panel_set::PanelSet;

/// Owner of keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The panel at the panel set's focus index.
    #[default]
    FilePanel,
    SideBar,
    ProcessBar,
    Metadata,
}

impl FocusTarget {
    /// Focus type the focused panel takes under this target.
    pub const fn panel_focus_type(self) -> PanelFocus {
        match self {
            Self::FilePanel => PanelFocus::Primary,
            _ => PanelFocus::Secondary,
        }
    }

    pub const fn is_footer(self) -> bool {
        matches!(self, Self::ProcessBar | Self::Metadata)
    }
}

impl PanelSet {
    /// Hand focus to `region`, or back to the focused panel if `region`
    /// already holds it.
    fn toggle_region(&mut self, region: FocusTarget) {
        self.focus = if self.focus == region {
            FocusTarget::FilePanel
        } else {
            region
        };
        let focus_type = self.focus.panel_focus_type();
        self.focused_panel_mut().focus_type = focus_type;

        debug!(
            marker = "FOCUS_CHANGED",
            operation_type = "focus",
            focus = ?self.focus,
            panel = self.focus_index(),
            "Focus target changed"
        );
    }

    pub fn focus_on_side_bar(&mut self) {
        if self.layout().sidebar_width == 0 {
            return;
        }
        self.toggle_region(FocusTarget::SideBar);
    }

    pub fn focus_on_process_bar(&mut self) {
        if !self.footer_visible {
            return;
        }
        self.toggle_region(FocusTarget::ProcessBar);
    }

    pub fn focus_on_metadata(&mut self) {
        if !self.footer_visible {
            return;
        }
        self.toggle_region(FocusTarget::Metadata);
    }

    /// Show or hide the footer. Hiding it while a footer region holds focus
    /// gives focus back to the focused panel.
    pub fn toggle_footer(&mut self) {
        self.footer_visible = !self.footer_visible;
        if !self.footer_visible && self.focus.is_footer() {
            self.focus = FocusTarget::FilePanel;
            self.focused_panel_mut().focus_type = PanelFocus::Primary;
        }
        self.recompute_layout();
    }

    pub fn next_file_panel(&mut self) {
        let len = self.len();
        let next = (self.focus_index() + 1) % len;
        self.move_focus_to(next);
    }

    pub fn previous_file_panel(&mut self) {
        let len = self.len();
        let previous = (self.focus_index() + len - 1) % len;
        self.move_focus_to(previous);
    }

    fn move_focus_to(&mut self, index: usize) {
        self.focused_panel_mut().focus_type = PanelFocus::None;
        self.set_focus_index(index);
        let focus_type = self.focus.panel_focus_type();
        let panel = self.focused_panel_mut();
        panel.focus_type = focus_type;
        let location = panel.location.clone();
        self.pending_dir = location;
    }

    /// Exactly one panel is the focused one and it carries the focus type
    /// the current target implies; all others are unfocused.
    pub fn focus_is_consistent(&self) -> bool {
        self.panels().iter().enumerate().all(|(i, panel)| {
            if i == self.focus_index() {
                panel.focus_type == self.focus.panel_focus_type()
            } else {
                panel.focus_type == PanelFocus::None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::panel_set::{LayoutConfig, PanelSet};
    use std::path::PathBuf;

    fn set_with(n: usize) -> PanelSet {
        let mut set = PanelSet::new(
            PathBuf::from("/p0"),
            LayoutConfig {
                sidebar_width: 20,
                preview_width_divisor: 0,
            },
            false,
            true,
            (200, 40),
        );
        for i in 1..n {
            set.create_new_file_panel(PathBuf::from(format!("/p{i}")));
        }
        set
    }

    #[test]
    fn test_sidebar_toggle_returns_to_panel() {
        let mut set = set_with(2);
        set.focus_on_side_bar();
        assert_eq!(set.focus, FocusTarget::SideBar);
        assert_eq!(set.focused_panel().focus_type, PanelFocus::Secondary);
        assert!(set.focus_is_consistent());

        set.focus_on_side_bar();
        assert_eq!(set.focus, FocusTarget::FilePanel);
        assert_eq!(set.focused_panel().focus_type, PanelFocus::Primary);
    }

    #[test]
    fn test_sidebar_disabled_is_noop() {
        let mut set = PanelSet::new(
            PathBuf::from("/"),
            LayoutConfig {
                sidebar_width: 0,
                preview_width_divisor: 0,
            },
            false,
            true,
            (120, 40),
        );
        set.focus_on_side_bar();
        assert_eq!(set.focus, FocusTarget::FilePanel);
        assert_eq!(set.focused_panel().focus_type, PanelFocus::Primary);
    }

    #[test]
    fn test_footer_regions_require_visible_footer() {
        let mut set = set_with(1);
        set.toggle_footer();
        set.focus_on_process_bar();
        set.focus_on_metadata();
        assert_eq!(set.focus, FocusTarget::FilePanel);

        set.toggle_footer();
        set.focus_on_metadata();
        assert_eq!(set.focus, FocusTarget::Metadata);
        set.focus_on_process_bar();
        assert_eq!(set.focus, FocusTarget::ProcessBar);
        set.focus_on_process_bar();
        assert_eq!(set.focus, FocusTarget::FilePanel);
        assert_eq!(set.focused_panel().focus_type, PanelFocus::Primary);
    }

    #[test]
    fn test_hiding_footer_releases_focus() {
        let mut set = set_with(1);
        set.focus_on_process_bar();
        set.toggle_footer();
        assert_eq!(set.focus, FocusTarget::FilePanel);
        assert!(set.focus_is_consistent());
    }

    #[test]
    fn test_next_panel_full_cycle() {
        let mut set = set_with(4);
        let start = set.focus_index();
        let geometry = set.geometry();

        for _ in 0..set.len() {
            set.next_file_panel();
            assert!(set.focus_is_consistent());
        }

        assert_eq!(set.focus_index(), start);
        assert_eq!(set.geometry(), geometry);
        assert_eq!(set.pending_dir, set.focused_panel().location);
    }

    #[test]
    fn test_previous_panel_wraps() {
        let mut set = set_with(3);
        set.next_file_panel();
        assert_eq!(set.focus_index(), 0);
        set.previous_file_panel();
        assert_eq!(set.focus_index(), 2);
        assert_eq!(set.pending_dir, PathBuf::from("/p2"));
    }

    #[test]
    fn test_switching_panels_under_sidebar_focus_keeps_secondary() {
        let mut set = set_with(2);
        set.focus_on_side_bar();
        set.next_file_panel();
        assert_eq!(set.focus, FocusTarget::SideBar);
        assert_eq!(set.focused_panel().focus_type, PanelFocus::Secondary);
        assert!(set.focus_is_consistent());
    }
}
