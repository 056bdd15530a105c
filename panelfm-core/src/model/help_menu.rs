//! Scrollable help menu state.
//!
//! Rows are either key bindings or section sub-titles. The cursor never
//! rests on a sub-title row, and row 0 is the leading section title so the
//! first selectable row is 1.

use compact_str::CompactString;

/// Rows taken by the overlay border (top and bottom).
const BORDER_ROWS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub hotkeys: Vec<CompactString>,
    pub description: CompactString,
    /// Non-empty for section header rows.
    pub sub_title: Option<CompactString>,
}

impl HelpEntry {
    pub fn binding<I, S>(hotkeys: I, description: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            hotkeys: hotkeys.into_iter().map(Into::into).collect(),
            description: description.into(),
            sub_title: None,
        }
    }

    pub fn section(title: &str) -> Self {
        Self {
            hotkeys: Vec::new(),
            description: CompactString::default(),
            sub_title: Some(title.into()),
        }
    }

    pub const fn is_sub_title(&self) -> bool {
        self.sub_title.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpMenu {
    pub data: Vec<HelpEntry>,
    pub cursor: usize,
    /// First row drawn in the viewport.
    pub render_index: usize,
    /// Overlay height including its border rows.
    pub height: usize,
}

impl HelpMenu {
    pub fn new(data: Vec<HelpEntry>, height: usize) -> Self {
        Self {
            data,
            cursor: 1,
            render_index: 0,
            height,
        }
    }

    /// Rows of entries visible at once.
    pub fn visible_rows(&self) -> usize {
        self.height.saturating_sub(BORDER_ROWS).max(1)
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        let rows = self.visible_rows();
        if self.cursor >= self.render_index + rows {
            self.render_index = self.cursor + 1 - rows;
        }
    }

    fn is_sub_title(&self, idx: usize) -> bool {
        self.data.get(idx).is_some_and(HelpEntry::is_sub_title)
    }

    fn jump_to_end(&mut self) {
        self.cursor = self.data.len().saturating_sub(1);
        self.render_index = self.data.len().saturating_sub(self.visible_rows());
    }

    const fn jump_to_start(&mut self) {
        self.cursor = 1;
        self.render_index = 0;
    }

    pub fn list_up(&mut self) {
        if self.data.is_empty() {
            return;
        }

        if self.cursor > 1 {
            self.cursor -= 1;
            if self.cursor < self.render_index {
                self.render_index -= 1;
                if self.is_sub_title(self.cursor) {
                    self.render_index = self.render_index.saturating_sub(1);
                }
            }
            if self.is_sub_title(self.cursor) {
                self.cursor -= 1;
            }
            if self.cursor == 0 {
                self.jump_to_end();
            } else if self.cursor < self.render_index {
                self.render_index = self.cursor;
            }
        } else {
            self.jump_to_end();
        }
    }

    pub fn list_down(&mut self) {
        if self.data.is_empty() {
            return;
        }

        if self.cursor < self.data.len() - 1 {
            self.cursor += 1;
            if self.cursor > self.render_index + self.visible_rows() - 1 {
                self.render_index += 1;
                if self.is_sub_title(self.cursor) {
                    self.render_index += 1;
                }
            }
            if self.is_sub_title(self.cursor) {
                self.cursor += 1;
            }
            if self.cursor >= self.data.len() {
                self.jump_to_start();
            } else if self.cursor >= self.render_index + self.visible_rows() {
                self.render_index = self.cursor + 1 - self.visible_rows();
            }
        } else {
            self.jump_to_start();
        }
    }

    /// Rows currently inside the viewport.
    pub fn visible(&self) -> &[HelpEntry] {
        let start = self.render_index.min(self.data.len());
        let end = (start + self.visible_rows()).min(self.data.len());
        &self.data[start..end]
    }
}
