//! Per-panel sort selection and the sort-options menu cursor.
//!
//! The menu cursor is decoupled from the committed `selected` key: `cancel`
//! restores the cursor from `selected`, while `toggle_reverse` flips
//! `reversed` immediately whether or not the menu is open.

use std::cmp::Ordering;

use crate::fs::dir_scanner::DirEntryInfo;

/// Keys a panel can be sorted by, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    DateModified,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Size, Self::DateModified];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::DateModified => "Date Modified",
        }
    }

    fn compare(self, a: &DirEntryInfo, b: &DirEntryInfo) -> Ordering {
        match self {
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::Size => a.size.cmp(&b.size),
            Self::DateModified => a.modified.cmp(&b.modified),
        }
        .then_with(|| a.name.cmp(&b.name))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Committed sort state shared with new panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortData {
    /// Index into [`SortKey::ALL`].
    pub selected: usize,
    pub reversed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    pub data: SortData,
    /// Menu cursor; only committed by `confirm`.
    pub cursor: usize,
}

impl SortOptions {
    pub const fn option_count(&self) -> usize {
        SortKey::ALL.len()
    }

    pub fn selected_key(&self) -> SortKey {
        SortKey::ALL
            .get(self.data.selected)
            .copied()
            .unwrap_or_default()
    }

    pub const fn list_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else {
            self.cursor = self.option_count() - 1;
        }
    }

    pub const fn list_down(&mut self) {
        if self.cursor < self.option_count() - 1 {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
    }

    pub const fn confirm(&mut self) {
        self.data.selected = self.cursor;
    }

    pub const fn cancel(&mut self) {
        self.cursor = self.data.selected;
    }

    pub const fn toggle_reverse(&mut self) {
        self.data.reversed = !self.data.reversed;
    }

    /// Sort entries in place: directories first, then by the selected key.
    pub fn sort_entries(&self, entries: &mut [DirEntryInfo]) {
        let key = self.selected_key();
        let reversed = self.data.reversed;

        entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => {
                let ord = key.compare(a, b);
                if reversed { ord.reverse() } else { ord }
            }
        });
    }
}
