//! src/view/icons.rs
//! ============================================================================
//! # Nerd Font glyphs for entries, pins and prompts

use crate::fs::dir_scanner::DirEntryInfo;

pub const FOLDER_ICON: &str = "";
pub const FILE_ICON: &str = "";
pub const PIN_ICON: &str = "";
pub const SEARCH_ICON: &str = "";
pub const TERMINAL_ICON: &str = "";

pub fn entry_icon(entry: &DirEntryInfo) -> &'static str {
    if entry.is_dir { FOLDER_ICON } else { FILE_ICON }
}
