//! src/operators/file_ops.rs
//! ============================================================================
//! # File operations used by the create-item and rename prompts

use std::path::{Path, PathBuf};

use tokio::fs as TokioFs;
use tracing::{info, instrument};

use crate::error::AppError;

/// First path of the form `stem (n).ext` that does not exist yet, or `path`
/// itself when it is free.
pub async fn rename_if_duplicate(path: &Path) -> Result<PathBuf, AppError> {
    if !exists(path).await? {
        return Ok(path.to_path_buf());
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1u32;
    loop {
        let candidate = parent.join(format!("{stem} ({counter}){extension}"));
        if !exists(&candidate).await? {
            return Ok(candidate);
        }
        counter += 1;
    }
}

async fn exists(path: &Path) -> Result<bool, AppError> {
    TokioFs::try_exists(path)
        .await
        .map_err(|e| AppError::file_operation_failed("stat", path, e.to_string()))
}

/// Create an empty file at a non-colliding variant of `path`, creating
/// missing parents first. Returns the path actually created.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn create_file(path: &Path) -> Result<PathBuf, AppError> {
    let target = rename_if_duplicate(path).await?;
    if let Some(parent) = target.parent() {
        TokioFs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file_operation_failed("mkdir", parent, e.to_string()))?;
    }
    TokioFs::File::create(&target)
        .await
        .map_err(|e| AppError::file_operation_failed("create", &target, e.to_string()))?;

    info!(
        marker = "FILE_CREATED",
        operation_type = "file_ops",
        path = %target.display(),
        "File created"
    );
    Ok(target)
}

/// Create `path` and every missing parent.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn create_directory(path: &Path) -> Result<PathBuf, AppError> {
    TokioFs::create_dir_all(path)
        .await
        .map_err(|e| AppError::file_operation_failed("mkdir", path, e.to_string()))?;

    info!(
        marker = "DIRECTORY_CREATED",
        operation_type = "file_ops",
        path = %path.display(),
        "Directory created"
    );
    Ok(path.to_path_buf())
}

#[instrument(level = "debug", skip_all, fields(from = %from.display(), to = %to.display()))]
pub async fn rename(from: &Path, to: &Path) -> Result<(), AppError> {
    TokioFs::rename(from, to)
        .await
        .map_err(|e| AppError::file_operation_failed("rename", from, e.to_string()))?;

    info!(
        marker = "ENTRY_RENAMED",
        operation_type = "file_ops",
        from = %from.display(),
        to = %to.display(),
        "Entry renamed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_rename_if_duplicate_free_path_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("b.txt");
        assert_eq!(rename_if_duplicate(&path).await.unwrap(), path);
    }

    #[tokio::test]
    async fn test_rename_if_duplicate_appends_counter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("b.txt");
        std::fs::write(&path, "").unwrap();
        assert_eq!(
            rename_if_duplicate(&path).await.unwrap(),
            dir.path().join("b (1).txt")
        );

        std::fs::write(dir.path().join("b (1).txt"), "").unwrap();
        assert_eq!(
            rename_if_duplicate(&path).await.unwrap(),
            dir.path().join("b (2).txt")
        );
    }

    #[tokio::test]
    async fn test_rename_if_duplicate_without_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Makefile");
        std::fs::write(&path, "").unwrap();
        assert_eq!(
            rename_if_duplicate(&path).await.unwrap(),
            dir.path().join("Makefile (1)")
        );
    }

    #[tokio::test]
    async fn test_create_file_makes_parents() {
        let dir = TempDir::new().unwrap();
        let created = create_file(&dir.path().join("a/b/c.txt")).await.unwrap();
        assert_eq!(created, dir.path().join("a/b/c.txt"));
        assert!(created.is_file());

        let again = create_file(&dir.path().join("a/b/c.txt")).await.unwrap();
        assert_eq!(again, dir.path().join("a/b/c (1).txt"));
    }

    #[tokio::test]
    async fn test_create_directory_and_rename() {
        let dir = TempDir::new().unwrap();
        let created = create_directory(&dir.path().join("x/y")).await.unwrap();
        assert!(created.is_dir());

        let to = dir.path().join("x/z");
        rename(&created, &to).await.unwrap();
        assert!(to.is_dir());
        assert!(!created.exists());
    }

    #[tokio::test]
    async fn test_rename_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let err = rename(&dir.path().join("nope"), &dir.path().join("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::FileOperationFailed { .. }));
    }
}
