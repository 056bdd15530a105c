//! src/operators/command_runner.rs
//! ============================================================================
//! # Command line collaborator
//!
//! Runs one line through the platform shell in a given directory and hands
//! back the combined output. Also resolves the output of an `spf` line into
//! the directory a new panel should open at.

use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::fs as TokioFs;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use crate::error::AppError;

pub trait CommandRunner {
    /// Run `line` with `cwd` as working directory. Returns stdout followed
    /// by stderr, or `ExternalCmd` when the command cannot start or exits
    /// unsuccessfully.
    fn run(&self, line: &str, cwd: &Path) -> impl Future<Output = Result<String, AppError>>;
}

/// `sh -c` on Unix, `powershell.exe -Command` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    fn command(line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("powershell.exe");
            cmd.arg("-Command").arg(line);
            cmd
        } else {
            let mut cmd = Command::new("/bin/sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    #[instrument(level = "debug", skip(self), fields(cwd = %cwd.display()))]
    async fn run(&self, line: &str, cwd: &Path) -> Result<String, AppError> {
        let output = Self::command(line)
            .current_dir(cwd)
            .output()
            .await
            .map_err(|e| AppError::external_cmd(line, None, e.to_string()))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            warn!(
                marker = "COMMAND_FAILED",
                operation_type = "command_line",
                command = line,
                code = ?output.status.code(),
                output = %combined,
                "Shell command exited unsuccessfully"
            );
            return Err(AppError::external_cmd(line, output.status.code(), combined));
        }

        debug!(
            marker = "COMMAND_COMPLETED",
            operation_type = "command_line",
            command = line,
            "Shell command completed"
        );
        Ok(combined)
    }
}

/// Turn the echoed output of an `spf` line into a directory: relative
/// output is taken against `cwd` (empty output is `cwd` itself), the path
/// must exist, and a file is replaced by its parent.
pub async fn resolve_spf_output(output: &str, cwd: &Path) -> Result<PathBuf, AppError> {
    let trimmed = output.trim();
    let raw = PathBuf::from(trimmed);
    let path = if trimmed.is_empty() {
        cwd.to_path_buf()
    } else if raw.is_absolute() {
        raw
    } else {
        cwd.join(raw)
    };

    let metadata = TokioFs::metadata(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(path.clone())
        } else {
            AppError::path_resolution_failed(&path, e.to_string())
        }
    })?;

    if metadata.is_dir() {
        return Ok(path);
    }
    path.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::path_resolution_failed(&path, "no parent directory"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_resolve_directory_as_is() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_spf_output(&format!("{}\n", dir.path().display()), Path::new("/"))
            .await
            .unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[tokio::test]
    async fn test_resolve_file_to_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("f.txt"), "").unwrap();
        let resolved = resolve_spf_output("f.txt", dir.path()).await.unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[tokio::test]
    async fn test_resolve_missing_path() {
        let err = resolve_spf_output("/no/such/path", Path::new("/"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "This path does not exist");
    }

    #[tokio::test]
    async fn test_resolve_empty_output_is_cwd() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_spf_output("  \n", dir.path()).await.unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shell_runs_in_cwd_and_combines_output() {
        let dir = TempDir::new().unwrap();
        let out = ShellCommandRunner
            .run("pwd; echo oops 1>&2", dir.path())
            .await
            .unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        assert!(out.contains(&canonical.display().to_string()));
        assert!(out.contains("oops"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shell_failure_is_external_cmd() {
        let err = ShellCommandRunner
            .run("echo boom; exit 3", Path::new("/"))
            .await
            .unwrap_err();
        match err {
            AppError::ExternalCmd { code, output, .. } => {
                assert_eq!(code, Some(3));
                assert!(output.contains("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
