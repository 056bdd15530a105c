//! Pinned directories shown in the sidebar.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedDirectory {
    pub location: String,
    pub name: String,
}

impl PinnedDirectory {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            location: path.to_string_lossy().into_owned(),
            name,
        }
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.location)
    }
}

/// Remove every entry at `location`; if nothing was removed, pin it.
/// Returns true when the location is pinned afterwards.
pub fn toggle_pinned(list: &mut Vec<PinnedDirectory>, location: &Path) -> bool {
    let key = location.to_string_lossy();
    let before = list.len();
    list.retain(|p| p.location != key);
    if list.len() == before {
        list.push(PinnedDirectory::from_path(location));
        true
    } else {
        false
    }
}
