//! src/controller/actions.rs
//! ============================================================================
//! # Actions: everything the core can be asked to do
//!
//! Key presses are mapped to actions by the handlers; effect results come
//! back as actions too, so every state change goes through one dispatcher.

use std::path::PathBuf;

use compact_str::CompactString;

use crate::fs::dir_scanner::DirEntryInfo;
use crate::model::ui_state::NotificationLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    /// Terminal resized to (width, height).
    Resize(u16, u16),

    /// Periodic tick; expires status messages.
    Tick,

    // Panel lifecycle and focus
    CreateNewFilePanel,
    CloseFilePanel,
    ToggleFilePreviewPanel,
    ToggleFooter,
    NextFilePanel,
    PreviousFilePanel,
    FocusOnSideBar,
    FocusOnProcessBar,
    FocusOnMetadata,

    // Navigation inside the focused panel
    CursorUp,
    CursorDown,
    EnterSelected,
    GoToParent,
    ToggleHiddenFiles,

    // Sidebar
    SidebarUp,
    SidebarDown,
    OpenPinned,
    PinDirectory,

    // Modals
    OpenCreateItem,
    OpenRename,
    OpenSortOptions,
    ToggleReverseSort,
    OpenSearch,
    OpenHelpMenu,
    OpenCommandLine,

    /// Move the cursor of the open list modal (sort options, help menu).
    ModalUp,
    ModalDown,

    /// Confirm the open modal.
    Confirm,
    /// Cancel the open modal.
    Cancel,

    // Editing the active text input
    InputChar(char),
    InputBackspace,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,

    // Results fed back from effects
    DirectoryLoaded {
        path: PathBuf,
        result: Result<Vec<DirEntryInfo>, CompactString>,
    },

    /// Re-list every panel showing `path`.
    RefreshPanelsAt(PathBuf),

    /// Open a new panel at `path`, as the `spf` command line does.
    OpenPanelAt(PathBuf),

    Notify {
        message: CompactString,
        level: NotificationLevel,
    },
}

impl Action {
    /// Text-editing actions go to whichever input currently has focus.
    pub const fn is_input_edit(&self) -> bool {
        matches!(
            self,
            Self::InputChar(_)
                | Self::InputBackspace
                | Self::InputLeft
                | Self::InputRight
                | Self::InputHome
                | Self::InputEnd
        )
    }
}
