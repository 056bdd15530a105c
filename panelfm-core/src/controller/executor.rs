//! src/controller/executor.rs
//! ============================================================================
//! # Effect executor
//!
//! Performs the I/O the dispatcher asks for and turns each outcome into
//! follow-up actions. Failures never escape: they are logged and become a
//! short status message. Effects run to completion before the caller reads
//! the next event, so a long shell command holds the whole loop.

use std::path::Path;

use tracing::{error, info, warn};

use crate::controller::actions::Action;
use crate::controller::effects::Effect;
use crate::error::AppError;
use crate::fs::dir_scanner::scan_directory;
use crate::model::modal::CreateRequest;
use crate::model::ui_state::NotificationLevel;
use crate::operators::command_runner::{CommandRunner, resolve_spf_output};
use crate::operators::file_ops;
use crate::operators::pinned_store::PinnedStore;

pub struct EffectExecutor<R, S> {
    runner: R,
    pinned_store: S,
}

impl<R: CommandRunner, S: PinnedStore> EffectExecutor<R, S> {
    pub fn new(runner: R, pinned_store: S) -> Self {
        Self {
            runner,
            pinned_store,
        }
    }

    pub async fn execute(&self, effect: Effect) -> Vec<Action> {
        match effect {
            Effect::LoadDirectory { path, show_hidden } => {
                let result = scan_directory(&path, show_hidden).map_err(|e| {
                    warn!(
                        marker = "LOAD_DIRECTORY_FAILED",
                        operation_type = "dir_scan",
                        path = %path.display(),
                        error = %e,
                        "Failed to list directory"
                    );
                    e.user_message().into()
                });
                vec![Action::DirectoryLoaded { path, result }]
            }

            Effect::CreateItem { request, refresh } => {
                let outcome = match &request {
                    CreateRequest::File(path) => file_ops::create_file(path).await,
                    CreateRequest::Directory(path) => file_ops::create_directory(path).await,
                    CreateRequest::Empty => return Vec::new(),
                };
                match outcome {
                    Ok(_) => vec![Action::RefreshPanelsAt(refresh)],
                    Err(e) => vec![failure("create", &e)],
                }
            }

            Effect::Rename { from, to, refresh } => match file_ops::rename(&from, &to).await {
                Ok(()) => vec![Action::RefreshPanelsAt(refresh)],
                Err(e) => vec![failure("rename", &e)],
            },

            Effect::RunCommand {
                line,
                cwd,
                open_panel,
            } => self.run_command(&line, &cwd, open_panel).await,

            Effect::SavePinned(list) => {
                if let Err(e) = self.pinned_store.save(&list).await {
                    error!(
                        marker = "PINNED_SAVE_FAILED",
                        operation_type = "pinned",
                        error = %e,
                        "Failed to write pinned directories"
                    );
                }
                Vec::new()
            }
        }
    }

    async fn run_command(&self, line: &str, cwd: &Path, open_panel: bool) -> Vec<Action> {
        info!(
            marker = "COMMAND_LINE_RUN",
            operation_type = "command_line",
            command = line,
            cwd = %cwd.display(),
            "Running command line"
        );

        let output = match self.runner.run(line, cwd).await {
            Ok(output) => output,
            Err(e) => return vec![failure("command", &e)],
        };

        if !open_panel {
            return vec![Action::RefreshPanelsAt(cwd.to_path_buf())];
        }

        match resolve_spf_output(&output, cwd).await {
            Ok(target) => vec![Action::OpenPanelAt(target)],
            Err(e) => vec![failure("resolve", &e)],
        }
    }
}

fn failure(operation: &'static str, e: &AppError) -> Action {
    error!(
        marker = "EFFECT_FAILED",
        operation_type = "effect",
        operation,
        error = %e,
        "Effect failed"
    );
    Action::Notify {
        message: e.user_message().into(),
        level: NotificationLevel::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pinned::PinnedDirectory;
    use crate::operators::command_runner::ShellCommandRunner;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Echoes a fixed output, or fails.
    struct FakeRunner {
        output: Result<String, ()>,
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl FakeRunner {
        fn ok(output: &str) -> Self {
            Self {
                output: Ok(output.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                output: Err(()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        async fn run(&self, line: &str, cwd: &Path) -> Result<String, AppError> {
            self.calls
                .borrow_mut()
                .push((line.to_string(), cwd.to_path_buf()));
            self.output
                .clone()
                .map_err(|()| AppError::external_cmd(line, Some(1), "boom"))
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Vec<Vec<PinnedDirectory>>>,
    }

    impl PinnedStore for MemoryStore {
        async fn load(&self) -> Result<Vec<PinnedDirectory>, AppError> {
            Ok(self.saved.borrow().last().cloned().unwrap_or_default())
        }

        async fn save(&self, list: &[PinnedDirectory]) -> Result<(), AppError> {
            self.saved.borrow_mut().push(list.to_vec());
            Ok(())
        }
    }

    fn notify_message(actions: &[Action]) -> Option<&str> {
        actions.iter().find_map(|a| match a {
            Action::Notify { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_spf_opens_panel_at_echoed_directory() {
        let dir = TempDir::new().unwrap();
        let projects = dir.path().join("projects");
        std::fs::create_dir(&projects).unwrap();

        let runner = FakeRunner::ok(&format!("{}\n", projects.display()));
        let executor = EffectExecutor::new(runner, MemoryStore::default());

        let actions = executor
            .execute(Effect::RunCommand {
                line: "echo ~/projects".into(),
                cwd: dir.path().to_path_buf(),
                open_panel: true,
            })
            .await;

        assert_eq!(actions, vec![Action::OpenPanelAt(projects)]);
        let calls = executor.runner.calls.borrow();
        assert_eq!(calls[0], ("echo ~/projects".to_string(), dir.path().to_path_buf()));
    }

    #[tokio::test]
    async fn test_spf_missing_path_reports_and_opens_nothing() {
        let executor = EffectExecutor::new(FakeRunner::ok("/no/such/path\n"), MemoryStore::default());
        let actions = executor
            .execute(Effect::RunCommand {
                line: "echo /no/such/path".into(),
                cwd: PathBuf::from("/"),
                open_panel: true,
            })
            .await;

        assert_eq!(notify_message(&actions), Some("This path does not exist"));
        assert!(!actions.iter().any(|a| matches!(a, Action::OpenPanelAt(_))));
    }

    #[tokio::test]
    async fn test_command_failure_is_short_message() {
        let executor = EffectExecutor::new(FakeRunner::failing(), MemoryStore::default());
        let actions = executor
            .execute(Effect::RunCommand {
                line: "false".into(),
                cwd: PathBuf::from("/"),
                open_panel: false,
            })
            .await;
        assert_eq!(notify_message(&actions), Some("command failed (see log)"));
    }

    #[tokio::test]
    async fn test_plain_command_refreshes_cwd() {
        let executor = EffectExecutor::new(FakeRunner::ok(""), MemoryStore::default());
        let actions = executor
            .execute(Effect::RunCommand {
                line: "touch x".into(),
                cwd: PathBuf::from("/w"),
                open_panel: false,
            })
            .await;
        assert_eq!(actions, vec![Action::RefreshPanelsAt(PathBuf::from("/w"))]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_real_shell_spf_dot_opens_cwd() {
        let dir = TempDir::new().unwrap();
        let executor = EffectExecutor::new(ShellCommandRunner, MemoryStore::default());
        let actions = executor
            .execute(Effect::RunCommand {
                line: "echo .".into(),
                cwd: dir.path().to_path_buf(),
                open_panel: true,
            })
            .await;

        match actions.as_slice() {
            [Action::OpenPanelAt(path)] => {
                assert_eq!(path.canonicalize().unwrap(), dir.path().canonicalize().unwrap());
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_file_then_refresh() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        let executor = EffectExecutor::new(FakeRunner::ok(""), MemoryStore::default());

        let actions = executor
            .execute(Effect::CreateItem {
                request: CreateRequest::File(dir.path().join("b.txt")),
                refresh: dir.path().to_path_buf(),
            })
            .await;

        assert_eq!(actions, vec![Action::RefreshPanelsAt(dir.path().to_path_buf())]);
        assert!(dir.path().join("b (1).txt").is_file());
    }

    #[tokio::test]
    async fn test_rename_failure_reports() {
        let dir = TempDir::new().unwrap();
        let executor = EffectExecutor::new(FakeRunner::ok(""), MemoryStore::default());
        let actions = executor
            .execute(Effect::Rename {
                from: dir.path().join("missing"),
                to: dir.path().join("other"),
                refresh: dir.path().to_path_buf(),
            })
            .await;
        assert_eq!(notify_message(&actions), Some("file operation failed (see log)"));
    }

    #[tokio::test]
    async fn test_load_directory_reports_missing() {
        let executor = EffectExecutor::new(FakeRunner::ok(""), MemoryStore::default());
        let actions = executor
            .execute(Effect::LoadDirectory {
                path: PathBuf::from("/no/such/dir"),
                show_hidden: false,
            })
            .await;
        assert_eq!(
            actions,
            vec![Action::DirectoryLoaded {
                path: PathBuf::from("/no/such/dir"),
                result: Err("This path does not exist".into()),
            }]
        );
    }

    #[tokio::test]
    async fn test_save_pinned_writes_full_list() {
        let executor = EffectExecutor::new(FakeRunner::ok(""), MemoryStore::default());
        let list = vec![PinnedDirectory::from_path(Path::new("/a"))];
        assert!(executor.execute(Effect::SavePinned(list.clone())).await.is_empty());
        assert_eq!(executor.pinned_store.load().await.unwrap(), list);
    }
}
