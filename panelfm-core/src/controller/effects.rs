//! Side-effect requests produced by the dispatcher and carried out by
//! [`EffectExecutor`](crate::controller::executor::EffectExecutor).

use std::path::PathBuf;

use crate::model::modal::CreateRequest;
use crate::model::pinned::PinnedDirectory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDirectory {
        path: PathBuf,
        show_hidden: bool,
    },

    /// Create a file or directory, then refresh panels at `refresh`.
    CreateItem {
        request: CreateRequest,
        refresh: PathBuf,
    },

    Rename {
        from: PathBuf,
        to: PathBuf,
        refresh: PathBuf,
    },

    /// Run a command line in `cwd`. With `open_panel`, the output is a
    /// path and a panel opens there.
    RunCommand {
        line: String,
        cwd: PathBuf,
        open_panel: bool,
    },

    /// Replace the stored pinned list.
    SavePinned(Vec<PinnedDirectory>),
}
