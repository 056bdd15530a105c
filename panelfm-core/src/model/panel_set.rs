//! src/model/panel_set.rs
//! ============================================================================
//! # PanelSet: panel lifecycle and derived layout
//!
//! Ordered panels plus the focus index into them. The set is never empty
//! and the focus index is always valid. Every structural change (create,
//! close, preview toggle, resize, footer toggle) ends in
//! [`PanelSet::recompute_layout`], which refreshes geometry and pushes the
//! resulting widths into every panel.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::model::focus::FocusTarget;
use crate::model::layout::{Geometry, LayoutInput, compute_geometry};
use crate::model::panel::{Panel, PanelFocus};
use crate::model::sort_options::SortOptions;

/// Status line row at the bottom of the screen.
const STATUS_ROWS: u16 = 1;

/// Panel border rows plus its path header and search bar.
const PANEL_CHROME_ROWS: u16 = 4;

/// Layout settings taken from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// 0 disables the sidebar.
    pub sidebar_width: u16,
    /// 0 means "auto".
    pub preview_width_divisor: u16,
}

/// Footer rows for a terminal of `height` rows.
pub fn footer_height(height: u16, footer_visible: bool) -> u16 {
    if footer_visible {
        (height / 3).clamp(6, 12).min(height.saturating_sub(8))
    } else {
        0
    }
}

#[derive(Debug, Clone)]
pub struct PanelSet {
    panels: Vec<Panel>,
    focus_index: usize,
    pub focus: FocusTarget,
    pub footer_visible: bool,
    preview_open: bool,
    /// Where the next panel opens by default; follows panel switches.
    pub pending_dir: PathBuf,
    layout: LayoutConfig,
    terminal_width: u16,
    terminal_height: u16,
    geometry: Geometry,
}

impl PanelSet {
    #[must_use]
    pub fn new(
        location: PathBuf,
        layout: LayoutConfig,
        preview_open: bool,
        footer_visible: bool,
        (terminal_width, terminal_height): (u16, u16),
    ) -> Self {
        let mut set = Self {
            panels: vec![Panel::new(
                location.clone(),
                SortOptions::default(),
                PanelFocus::Primary,
            )],
            focus_index: 0,
            focus: FocusTarget::FilePanel,
            footer_visible,
            preview_open,
            pending_dir: location,
            layout,
            terminal_width,
            terminal_height,
            geometry: Geometry::default(),
        };
        set.recompute_layout();
        set
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [Panel] {
        &mut self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub const fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub(crate) fn set_focus_index(&mut self, index: usize) {
        debug_assert!(index < self.panels.len());
        self.focus_index = index.min(self.panels.len() - 1);
    }

    pub fn focused_panel(&self) -> &Panel {
        &self.panels[self.focus_index]
    }

    pub fn focused_panel_mut(&mut self) -> &mut Panel {
        &mut self.panels[self.focus_index]
    }

    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub const fn max_panel_count(&self) -> usize {
        self.geometry.max_panel_count
    }

    pub const fn layout(&self) -> LayoutConfig {
        self.layout
    }

    pub const fn preview_open(&self) -> bool {
        self.preview_open
    }

    pub const fn terminal_size(&self) -> (u16, u16) {
        (self.terminal_width, self.terminal_height)
    }

    /// Open a panel at `target_dir` after the existing ones and focus it.
    /// No-op when the panel bound is reached. Returns whether a panel opened.
    pub fn create_new_file_panel(&mut self, target_dir: PathBuf) -> bool {
        if self.panels.len() >= self.geometry.max_panel_count {
            debug!(
                marker = "PANEL_CREATE_AT_LIMIT",
                operation_type = "panel_lifecycle",
                max = self.geometry.max_panel_count,
                "Panel limit reached, not creating a panel"
            );
            return false;
        }

        let sort_options = self.focused_panel().sort_options;
        let focus_type = self.focus.panel_focus_type();
        self.focused_panel_mut().focus_type = PanelFocus::None;

        self.panels
            .push(Panel::new(target_dir.clone(), sort_options, focus_type));
        self.focus_index = self.panels.len() - 1;
        self.recompute_layout();

        info!(
            marker = "PANEL_CREATED",
            operation_type = "panel_lifecycle",
            location = %target_dir.display(),
            count = self.panels.len(),
            "File panel created"
        );
        true
    }

    /// Close the focused panel. No-op on the last panel.
    pub fn close_file_panel(&mut self) -> bool {
        if self.panels.len() == 1 {
            return false;
        }

        let closed = self.panels.remove(self.focus_index);
        if self.focus_index != 0 {
            self.focus_index -= 1;
        }
        let focus_type = self.focus.panel_focus_type();
        self.focused_panel_mut().focus_type = focus_type;
        self.recompute_layout();

        info!(
            marker = "PANEL_CLOSED",
            operation_type = "panel_lifecycle",
            location = %closed.location.display(),
            count = self.panels.len(),
            "File panel closed"
        );
        true
    }

    pub fn toggle_file_preview_panel(&mut self) {
        self.preview_open = !self.preview_open;
        self.geometry.preview_width = 0;
        self.recompute_layout();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.recompute_layout();
    }

    pub fn footer_height(&self) -> u16 {
        footer_height(self.terminal_height, self.footer_visible)
    }

    /// Rows available for entries inside each panel.
    pub fn panel_viewport_rows(&self) -> usize {
        usize::from(
            self.terminal_height
                .saturating_sub(self.footer_height())
                .saturating_sub(STATUS_ROWS)
                .saturating_sub(PANEL_CHROME_ROWS),
        )
    }

    /// Re-derive geometry and apply it to every panel.
    pub(crate) fn recompute_layout(&mut self) {
        self.geometry = compute_geometry(LayoutInput {
            terminal_width: self.terminal_width,
            sidebar_width: self.layout.sidebar_width,
            preview_open: self.preview_open,
            preview_width_divisor: self.layout.preview_width_divisor,
            panel_count: self.panels.len(),
        });

        let search_width = self.geometry.search_bar_width();
        let rows = self.panel_viewport_rows();
        for panel in &mut self.panels {
            panel.search_bar.width = search_width;
            panel.set_viewport_rows(rows);
        }
    }
}
