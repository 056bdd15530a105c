//! src/model/layout.rs
//! ============================================================================
//! # Panel layout: derived horizontal geometry
//!
//! Geometry is never stored authoritatively. It is recomputed from the
//! terminal width, sidebar width, preview toggle and panel count after every
//! structural change (panel added or removed, preview toggled, resize).

/// Fixed columns reserved around the panel row (outer borders).
pub const FIXED_COLUMNS: u16 = 4;

/// Border columns each additional panel adds.
pub const PANEL_BORDER_COLUMNS: u16 = 2;

/// Narrowest panel that is still usable.
pub const MIN_PANEL_WIDTH: u16 = 20;

/// Columns the search bar loses to its prompt and padding.
pub const SEARCH_BAR_PADDING: u16 = 4;

/// Inputs to the layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    pub terminal_width: u16,
    /// 0 disables the sidebar.
    pub sidebar_width: u16,
    pub preview_open: bool,
    /// Preview width divisor; 0 means "auto" (share equally with the panels).
    pub preview_width_divisor: u16,
    /// Number of panels, at least 1.
    pub panel_count: usize,
}

/// Derived geometry for the panel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub panel_width: u16,
    pub preview_width: u16,
    pub max_panel_count: usize,
    /// Columns left over by the integer division of the panel width.
    pub remainder: u16,
    pub panel_count: usize,
}

impl Geometry {
    /// Width of every panel's search bar.
    #[must_use]
    pub const fn search_bar_width(&self) -> u16 {
        self.panel_width.saturating_sub(SEARCH_BAR_PADDING)
    }

    /// Per-panel widths with the division remainder spread over the leading
    /// panels, so the row fills its space exactly.
    #[must_use]
    pub fn panel_widths(&self) -> Vec<u16> {
        (0..self.panel_count)
            .map(|i| {
                if i < usize::from(self.remainder) {
                    self.panel_width + 1
                } else {
                    self.panel_width
                }
            })
            .collect()
    }
}

/// Columns taken by borders between and around `panel_count` panels.
#[must_use]
pub fn separator_columns(panel_count: usize) -> u16 {
    let extra = u16::try_from(panel_count.saturating_sub(1)).unwrap_or(u16::MAX);
    FIXED_COLUMNS.saturating_add(PANEL_BORDER_COLUMNS.saturating_mul(extra))
}

/// Compute panel width, preview width and the panel bound.
///
/// Pure and idempotent. Narrow terminals saturate to zero widths rather than
/// underflowing, and the panel bound never drops below one.
#[must_use]
pub fn compute_geometry(input: LayoutInput) -> Geometry {
    let n = input.panel_count.max(1);
    let n16 = u16::try_from(n).unwrap_or(u16::MAX);
    let available = input.terminal_width.saturating_sub(input.sidebar_width);

    let preview_width = if !input.preview_open {
        0
    } else if input.preview_width_divisor == 0 {
        // The preview takes the share of one extra panel.
        available
            .saturating_sub(separator_columns(n + 1))
            / n16.saturating_add(1)
    } else {
        available / input.preview_width_divisor
    };

    let panel_space = available
        .saturating_sub(preview_width)
        .saturating_sub(separator_columns(n));
    let panel_width = panel_space / n16;
    let remainder = panel_space % n16;

    let max_panel_count = usize::from(available.saturating_sub(preview_width) / MIN_PANEL_WIDTH).max(1);

    Geometry {
        panel_width,
        preview_width,
        max_panel_count,
        remainder,
        panel_count: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(width: u16, sidebar: u16, preview: bool, divisor: u16, n: usize) -> LayoutInput {
        LayoutInput {
            terminal_width: width,
            sidebar_width: sidebar,
            preview_open: preview,
            preview_width_divisor: divisor,
            panel_count: n,
        }
    }

    #[test]
    fn test_widths_fill_row_exactly() {
        for width in [80u16, 120, 173, 240] {
            for sidebar in [0u16, 20] {
                for (preview, divisor) in [(false, 0), (true, 0), (true, 3)] {
                    let first = compute_geometry(input(width, sidebar, preview, divisor, 1));
                    for n in 1..=first.max_panel_count {
                        let g = compute_geometry(input(width, sidebar, preview, divisor, n));
                        let total: u16 = g.panel_widths().iter().sum::<u16>() + separator_columns(n);
                        assert_eq!(
                            total,
                            width - sidebar - g.preview_width,
                            "width={width} sidebar={sidebar} preview={preview} n={n}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_auto_preview_matches_panel_share() {
        let g = compute_geometry(input(120, 20, true, 0, 1));
        // (120 - 20 - (4 + 2)) / 2
        assert_eq!(g.preview_width, 47);
        // (120 - 20 - 47 - 4) / 1
        assert_eq!(g.panel_width, 49);
        assert_eq!(g.max_panel_count, 2);
        assert_eq!(g.search_bar_width(), 45);
    }

    #[test]
    fn test_fixed_preview_divisor() {
        let g = compute_geometry(input(120, 0, true, 3, 2));
        assert_eq!(g.preview_width, 40);
        assert_eq!(g.panel_width, (120 - 40 - 6) / 2);
        assert_eq!(g.max_panel_count, 4);
    }

    #[test]
    fn test_closed_preview_has_zero_width() {
        let g = compute_geometry(input(100, 20, false, 0, 2));
        assert_eq!(g.preview_width, 0);
        assert_eq!(g.panel_width, (100 - 20 - 6) / 2);
        assert_eq!(g.max_panel_count, 4);
    }

    #[test]
    fn test_tiny_terminal_saturates() {
        let g = compute_geometry(input(10, 20, true, 0, 3));
        assert_eq!(g.panel_width, 0);
        assert_eq!(g.preview_width, 0);
        assert_eq!(g.max_panel_count, 1);
        assert_eq!(g.search_bar_width(), 0);
    }

    #[test]
    fn test_idempotent() {
        let i = input(150, 20, true, 0, 3);
        assert_eq!(compute_geometry(i), compute_geometry(i));
    }
}
