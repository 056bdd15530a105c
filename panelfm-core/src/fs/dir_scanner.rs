//! src/fs/dir_scanner.rs
//! ============================================================================
//! # Directory scanner
//!
//! Reads one directory level into [`DirEntryInfo`] records. Entries whose
//! metadata cannot be read are skipped with a warning rather than failing
//! the whole listing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use crate::error::AppError;

/// One listed directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub location: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    /// Unix timestamp (seconds) of the last modification.
    pub modified: i64,
}

impl DirEntryInfo {
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.modified, 0)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List `path` without recursing. Order is unspecified; panels sort.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn scan_directory(path: &Path, show_hidden: bool) -> Result<Vec<DirEntryInfo>, AppError> {
    let read_dir = fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(path.to_path_buf())
        } else {
            AppError::file_operation_failed("read_dir", path, e.to_string())
        }
    })?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    marker = "DIR_SCAN_ENTRY_FAILED",
                    operation_type = "dir_scan",
                    error = %e,
                    "Skipping unreadable directory entry"
                );
                continue;
            }
        };

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && is_hidden(&name) {
            continue;
        }

        let location = dir_entry.path();
        // Follow symlinks so a link to a directory can be entered.
        let metadata = match fs::metadata(&location).or_else(|_| dir_entry.metadata()) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(
                    marker = "DIR_SCAN_METADATA_FAILED",
                    operation_type = "dir_scan",
                    path = %location.display(),
                    error = %e,
                    "Skipping entry without metadata"
                );
                continue;
            }
        };

        let modified = metadata
            .modified()
            .map(|t| DateTime::<Utc>::from(t).timestamp())
            .unwrap_or_default();

        entries.push(DirEntryInfo {
            name,
            location,
            is_dir: metadata.is_dir(),
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified,
        });
    }

    debug!(
        marker = "DIR_SCAN_COMPLETE",
        operation_type = "dir_scan",
        count = entries.len(),
        "Directory scanned"
    );

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_directory() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        fs::write(path.join("file1.txt"), b"hello").unwrap();
        fs::write(path.join("file2.txt"), b"").unwrap();
        fs::write(path.join(".hidden"), b"").unwrap();
        fs::create_dir(path.join("subdir")).unwrap();

        temp_dir
    }

    #[test]
    fn test_scan_skips_hidden() {
        let temp_dir = create_test_directory();
        let entries = scan_directory(temp_dir.path(), false).unwrap();
        assert_eq!(entries.len(), 3);

        let file1 = entries.iter().find(|e| e.name == "file1.txt").unwrap();
        assert_eq!(file1.size, 5);
        assert!(!file1.is_dir);
        assert!(file1.modified_at().is_some());

        let subdir = entries.iter().find(|e| e.name == "subdir").unwrap();
        assert!(subdir.is_dir);
        assert_eq!(subdir.location, temp_dir.path().join("subdir"));
    }

    #[test]
    fn test_scan_with_hidden() {
        let temp_dir = create_test_directory();
        let entries = scan_directory(temp_dir.path(), true).unwrap();
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = scan_directory(&temp_dir.path().join("gone"), false).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
