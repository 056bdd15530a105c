//! src/model/panel.rs
//! ============================================================================
//! # Panel: one file-browsing unit
//!
//! A panel owns its location, listing, sort selection, search bar and the
//! per-panel modals (rename, sort-options, search). Only one per-panel modal
//! is active at a time; every exit path takes the modal out of the panel
//! first, so the panel is back in browse mode whatever happens next.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::fs::dir_scanner::DirEntryInfo;
use crate::model::sort_options::SortOptions;
use crate::model::text_input::TextInput;

/// How strongly a panel holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    /// Receives keys.
    Primary,
    /// Focused panel while another region (sidebar, footer) holds the keys.
    Secondary,
    #[default]
    None,
}

/// Rename prompt state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameState {
    /// Index into the panel's visible elements.
    pub target: usize,
    pub input: TextInput,
}

/// Per-panel modal; at most one is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelModal {
    #[default]
    Browse,
    Renaming(RenameState),
    SortOptions,
    Searching,
}

/// Cursor position remembered per visited directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryRecord {
    pub cursor: usize,
    pub render_index: usize,
}

/// Result of confirming the rename prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Request { from: PathBuf, to: PathBuf },
    EmptyName,
    NoTarget,
    NotRenaming,
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub location: PathBuf,
    pub sort_options: SortOptions,
    pub focus_type: PanelFocus,
    pub search_bar: TextInput,
    pub modal: PanelModal,
    pub directory_record: HashMap<PathBuf, DirectoryRecord>,
    /// Full listing of `location`, sorted.
    entries: Vec<DirEntryInfo>,
    /// Entries matching the search query, in display order.
    elements: Vec<DirEntryInfo>,
    pub cursor: usize,
    pub render_index: usize,
    pub viewport_rows: usize,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Panel {
    #[must_use]
    pub fn new(location: PathBuf, sort_options: SortOptions, focus_type: PanelFocus) -> Self {
        Self {
            location,
            sort_options,
            focus_type,
            search_bar: TextInput::new("Search..."),
            modal: PanelModal::Browse,
            directory_record: HashMap::new(),
            entries: Vec::new(),
            elements: Vec::new(),
            cursor: 0,
            render_index: 0,
            viewport_rows: 1,
            loading: true,
            last_error: None,
        }
    }

    pub fn elements(&self) -> &[DirEntryInfo] {
        &self.elements
    }

    pub fn selected(&self) -> Option<&DirEntryInfo> {
        self.elements.get(self.cursor)
    }

    pub fn is_browsing(&self) -> bool {
        self.modal == PanelModal::Browse
    }

    /* ----------------------------- listing ------------------------------ */

    /// Install a fresh listing of `location`. After a directory change the
    /// remembered cursor for that directory is restored; a refresh of the
    /// current directory keeps the cursor where it is.
    pub fn apply_listing(&mut self, entries: Vec<DirEntryInfo>) {
        self.entries = entries;
        self.sort_options.sort_entries(&mut self.entries);
        self.last_error = None;

        if self.loading {
            let record = self
                .directory_record
                .get(&self.location)
                .copied()
                .unwrap_or_default();
            self.cursor = record.cursor;
            self.render_index = record.render_index;
        }
        self.loading = false;
        self.refresh_elements();
    }

    pub fn apply_listing_error(&mut self, message: String) {
        self.entries.clear();
        self.loading = false;
        self.last_error = Some(message);
        self.refresh_elements();
    }

    /// Re-derive the visible elements after a sort or query change.
    pub fn refresh_elements(&mut self) {
        let query = self.search_bar.value().to_lowercase();
        self.elements = if query.is_empty() {
            self.entries.clone()
        } else {
            self.entries
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&query))
                .cloned()
                .collect()
        };
        self.clamp_cursor();
    }

    pub fn resort(&mut self) {
        self.sort_options.sort_entries(&mut self.entries);
        self.refresh_elements();
    }

    fn clamp_cursor(&mut self) {
        let len = self.elements.len();
        if len == 0 {
            self.cursor = 0;
            self.render_index = 0;
            return;
        }
        if self.cursor >= len {
            self.cursor = len - 1;
        }
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let rows = self.viewport_rows.max(1);
        if self.cursor < self.render_index {
            self.render_index = self.cursor;
        } else if self.cursor >= self.render_index + rows {
            self.render_index = self.cursor + 1 - rows;
        }
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.scroll_to_cursor();
    }

    /* ---------------------------- navigation ---------------------------- */

    pub fn cursor_up(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.elements.len() - 1
        } else {
            self.cursor - 1
        };
        self.scroll_to_cursor();
    }

    pub fn cursor_down(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.cursor = if self.cursor + 1 >= self.elements.len() {
            0
        } else {
            self.cursor + 1
        };
        self.scroll_to_cursor();
    }

    /// Switch to `location`, remembering where the cursor was. Returns the
    /// directory that now needs a listing.
    pub fn change_directory(&mut self, location: PathBuf) -> PathBuf {
        self.directory_record.insert(
            self.location.clone(),
            DirectoryRecord {
                cursor: self.cursor,
                render_index: self.render_index,
            },
        );
        debug!(
            marker = "PANEL_CHANGE_DIRECTORY",
            operation_type = "navigation",
            from = %self.location.display(),
            to = %location.display(),
            "Panel changing directory"
        );
        self.location = location;
        self.search_bar.reset();
        self.entries.clear();
        self.elements.clear();
        self.cursor = 0;
        self.render_index = 0;
        self.loading = true;
        self.location.clone()
    }

    /// Enter the selected directory; files are left alone.
    pub fn enter_selected(&mut self) -> Option<PathBuf> {
        let target = self.selected().filter(|e| e.is_dir)?.location.clone();
        Some(self.change_directory(target))
    }

    pub fn go_to_parent(&mut self) -> Option<PathBuf> {
        let parent = self.location.parent()?.to_path_buf();
        Some(self.change_directory(parent))
    }

    pub fn is_at(&self, location: &Path) -> bool {
        self.location == location
    }

    /* ------------------------------ rename ------------------------------ */

    /// Open the rename prompt for the selected entry. No-op without a
    /// selection or while another panel modal is active.
    pub fn open_rename(&mut self) -> bool {
        if !self.is_browsing() {
            return false;
        }
        let Some(entry) = self.selected() else {
            return false;
        };

        let mut input = TextInput::new("New name");
        input.width = self.search_bar.width;
        input.set_value(entry.name.as_str());
        input.focus();

        self.modal = PanelModal::Renaming(RenameState {
            target: self.cursor,
            input,
        });
        true
    }

    pub fn rename_input_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.modal {
            PanelModal::Renaming(state) => Some(&mut state.input),
            _ => None,
        }
    }

    pub fn cancel_rename(&mut self) {
        if matches!(self.modal, PanelModal::Renaming(_)) {
            self.modal = PanelModal::Browse;
        }
    }

    /// Close the rename prompt and describe the rename to perform. The
    /// prompt is closed on every outcome.
    pub fn confirm_rename(&mut self) -> RenameOutcome {
        let PanelModal::Renaming(state) = std::mem::take(&mut self.modal) else {
            return RenameOutcome::NotRenaming;
        };

        // Joined under `location` even when typed with a leading separator.
        let new_name = state.input.value().trim_start_matches(std::path::is_separator);
        if new_name.trim().is_empty() {
            return RenameOutcome::EmptyName;
        }

        let Some(entry) = self.elements.get(state.target) else {
            warn!(
                marker = "RENAME_TARGET_MISSING",
                operation_type = "rename",
                target = state.target,
                "Rename target vanished before confirmation"
            );
            return RenameOutcome::NoTarget;
        };

        RenameOutcome::Request {
            from: entry.location.clone(),
            to: self.location.join(new_name),
        }
    }

    /* --------------------------- sort options --------------------------- */

    pub fn open_sort_options(&mut self) -> bool {
        if !self.is_browsing() {
            return false;
        }
        self.modal = PanelModal::SortOptions;
        true
    }

    pub fn cancel_sort_options(&mut self) {
        if self.modal == PanelModal::SortOptions {
            self.modal = PanelModal::Browse;
            self.sort_options.cancel();
        }
    }

    pub fn confirm_sort_options(&mut self) {
        if self.modal == PanelModal::SortOptions {
            self.modal = PanelModal::Browse;
            self.sort_options.confirm();
            self.resort();
        }
    }

    pub fn sort_options_list_up(&mut self) {
        self.sort_options.list_up();
    }

    pub fn sort_options_list_down(&mut self) {
        self.sort_options.list_down();
    }

    /// Flip the reversed flag right away, menu open or not.
    pub fn toggle_reverse_sort(&mut self) {
        self.sort_options.toggle_reverse();
        self.resort();
    }

    /* ------------------------------ search ------------------------------ */

    pub fn open_search(&mut self) -> bool {
        if !self.is_browsing() {
            return false;
        }
        self.modal = PanelModal::Searching;
        self.search_bar.focus();
        true
    }

    /// Leave the search bar and drop the filter.
    pub fn cancel_search(&mut self) {
        if self.modal == PanelModal::Searching {
            self.modal = PanelModal::Browse;
        }
        self.search_bar.reset();
        self.refresh_elements();
    }

    /// Leave the search bar but keep filtering by the query.
    pub fn confirm_search(&mut self) {
        if self.modal == PanelModal::Searching {
            self.modal = PanelModal::Browse;
        }
        self.search_bar.blur();
    }

    /// Apply an edit to the search query and re-filter.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut TextInput)) {
        edit(&mut self.search_bar);
        self.refresh_elements();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(dir: &str, name: &str, is_dir: bool) -> DirEntryInfo {
        DirEntryInfo {
            name: name.into(),
            location: PathBuf::from(dir).join(name),
            is_dir,
            size: name.len() as u64,
            modified: 0,
        }
    }

    fn loaded_panel() -> Panel {
        let mut panel = Panel::new(PathBuf::from("/w"), SortOptions::default(), PanelFocus::Primary);
        panel.apply_listing(vec![
            entry("/w", "notes.txt", false),
            entry("/w", "src", true),
            entry("/w", "Cargo.toml", false),
        ]);
        panel
    }

    #[test]
    fn test_listing_sorted_dirs_first() {
        let panel = loaded_panel();
        let names: Vec<_> = panel.elements().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["src", "Cargo.toml", "notes.txt"]);
        assert!(!panel.loading);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut panel = loaded_panel();
        panel.cursor_up();
        assert_eq!(panel.cursor, 2);
        panel.cursor_down();
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn test_directory_record_restores_cursor() {
        let mut panel = loaded_panel();
        panel.cursor = 0;
        let target = panel.enter_selected().unwrap();
        assert_eq!(target, PathBuf::from("/w/src"));
        assert!(panel.loading);

        panel.apply_listing(vec![entry("/w/src", "main.rs", false)]);
        let parent = panel.go_to_parent().unwrap();
        assert_eq!(parent, PathBuf::from("/w"));

        panel.cursor = 2;
        panel.apply_listing(vec![
            entry("/w", "notes.txt", false),
            entry("/w", "src", true),
            entry("/w", "Cargo.toml", false),
        ]);
        // Restored from the record written when entering /w/src.
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn test_record_is_clamped_to_listing() {
        let mut panel = loaded_panel();
        panel.directory_record.insert(
            PathBuf::from("/w"),
            DirectoryRecord {
                cursor: 10,
                render_index: 8,
            },
        );
        panel.loading = true;
        panel.apply_listing(vec![entry("/w", "only", false)]);
        assert_eq!(panel.cursor, 0);
        assert_eq!(panel.render_index, 0);
    }

    #[test]
    fn test_refresh_keeps_cursor() {
        let mut panel = loaded_panel();
        panel.cursor = 2;
        panel.directory_record.insert(PathBuf::from("/w"), DirectoryRecord::default());
        panel.apply_listing(vec![
            entry("/w", "notes.txt", false),
            entry("/w", "src", true),
            entry("/w", "Cargo.toml", false),
            entry("/w", "new.txt", false),
        ]);
        assert_eq!(panel.cursor, 2);
    }

    #[test]
    fn test_rename_confirm_resets_state() {
        let mut panel = loaded_panel();
        panel.cursor = 1;
        assert!(panel.open_rename());
        assert_eq!(panel.rename_input_mut().unwrap().value(), "Cargo.toml");

        let input = panel.rename_input_mut().unwrap();
        input.set_value("Build.toml");

        let outcome = panel.confirm_rename();
        assert_eq!(
            outcome,
            RenameOutcome::Request {
                from: PathBuf::from("/w/Cargo.toml"),
                to: PathBuf::from("/w/Build.toml"),
            }
        );
        assert!(panel.is_browsing());
    }

    #[test]
    fn test_rename_empty_name_still_closes() {
        let mut panel = loaded_panel();
        panel.open_rename();
        panel.rename_input_mut().unwrap().set_value("   ");
        assert_eq!(panel.confirm_rename(), RenameOutcome::EmptyName);
        assert!(panel.is_browsing());
        assert_eq!(panel.confirm_rename(), RenameOutcome::NotRenaming);
    }

    #[test]
    fn test_rename_stays_under_location() {
        let mut panel = loaded_panel();
        panel.cursor = 2;
        panel.open_rename();
        panel.rename_input_mut().unwrap().set_value("/etc/evil.txt");
        assert_eq!(
            panel.confirm_rename(),
            RenameOutcome::Request {
                from: PathBuf::from("/w/notes.txt"),
                to: PathBuf::from("/w/etc/evil.txt"),
            }
        );

        panel.open_rename();
        panel.rename_input_mut().unwrap().set_value("sub/dir/notes.txt");
        assert_eq!(
            panel.confirm_rename(),
            RenameOutcome::Request {
                from: PathBuf::from("/w/notes.txt"),
                to: PathBuf::from("/w/sub/dir/notes.txt"),
            }
        );

        panel.open_rename();
        panel.rename_input_mut().unwrap().set_value("//");
        assert_eq!(panel.confirm_rename(), RenameOutcome::EmptyName);
    }

    #[test]
    fn test_rename_keeps_surrounding_spaces() {
        let mut panel = loaded_panel();
        panel.cursor = 2;
        panel.open_rename();
        panel.rename_input_mut().unwrap().set_value(" notes.txt ");
        assert_eq!(
            panel.confirm_rename(),
            RenameOutcome::Request {
                from: PathBuf::from("/w/notes.txt"),
                to: PathBuf::from("/w/ notes.txt "),
            }
        );
    }

    #[test]
    fn test_rename_requires_selection() {
        let mut panel = Panel::new(PathBuf::from("/e"), SortOptions::default(), PanelFocus::Primary);
        panel.apply_listing(Vec::new());
        assert!(!panel.open_rename());
        assert!(panel.is_browsing());
    }

    #[test]
    fn test_only_one_panel_modal() {
        let mut panel = loaded_panel();
        assert!(panel.open_search());
        assert!(!panel.open_sort_options());
        assert!(!panel.open_rename());
        assert_eq!(panel.modal, PanelModal::Searching);
    }

    #[test]
    fn test_search_confirm_keeps_filter_cancel_drops_it() {
        let mut panel = loaded_panel();
        panel.open_search();
        panel.edit_search(|input| input.set_value("toml"));
        assert_eq!(panel.elements().len(), 1);

        panel.confirm_search();
        assert!(panel.is_browsing());
        assert!(!panel.search_bar.is_focused());
        assert_eq!(panel.elements().len(), 1);

        panel.open_search();
        panel.cancel_search();
        assert!(panel.is_browsing());
        assert_eq!(panel.search_bar.value(), "");
        assert_eq!(panel.elements().len(), 3);
    }

    #[test]
    fn test_sort_options_confirm_resorts() {
        let mut panel = loaded_panel();
        panel.open_sort_options();
        panel.sort_options_list_down();
        panel.confirm_sort_options();
        assert!(panel.is_browsing());

        // Size sort: name lengths 9 and 10 for the two files.
        let names: Vec<_> = panel.elements().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["src", "notes.txt", "Cargo.toml"]);
    }

    #[test]
    fn test_sort_options_cancel_discards_cursor() {
        let mut panel = loaded_panel();
        panel.open_sort_options();
        panel.sort_options_list_up();
        panel.cancel_sort_options();
        assert_eq!(panel.sort_options.cursor, 0);
        assert_eq!(panel.sort_options.data.selected, 0);
    }
}
