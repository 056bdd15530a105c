//! View-scoped modals: create-item prompt, warning, help menu and command
//! line. The tag of [`Modal`] is the single source of truth for which one is
//! open, so two of them can never be open together.

use std::path::{PathBuf, is_separator};

use compact_str::CompactString;

use crate::model::text_input::TextInput;

/// Prefix that turns a command line into "open a panel at this path".
pub const SPF_PREFIX: &str = "spf ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemModal {
    /// Directory the typed path is relative to.
    pub location: PathBuf,
    pub input: TextInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarnModal {
    pub title: CompactString,
    pub content: CompactString,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    CreateItem(CreateItemModal),
    Warn(WarnModal),
    HelpMenu,
    CommandLine(TextInput),
}

impl Modal {
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Text input owned by the open modal, if it has one.
    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Self::CreateItem(modal) => Some(&mut modal.input),
            Self::CommandLine(input) => Some(input),
            _ => None,
        }
    }
}

/// What confirming the create-item prompt asks the filesystem to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRequest {
    /// Create an empty file, renaming on collision.
    File(PathBuf),
    /// Create the directory and its parents.
    Directory(PathBuf),
    Empty,
}

impl CreateItemModal {
    pub fn new(location: PathBuf, width: u16) -> Self {
        let mut input = TextInput::new("Add \"/\" transitively to create a directory");
        input.width = width;
        input.focus();
        Self { location, input }
    }

    /// A trailing separator means "directory"; anything else is a file.
    /// Leading separators are treated as relative to `location`.
    pub fn request(&self) -> CreateRequest {
        let value = self.input.value();
        let relative = value.trim_start_matches(is_separator);
        if relative.trim_end_matches(is_separator).trim().is_empty() {
            return CreateRequest::Empty;
        }

        let path = self.location.join(relative);
        if value.ends_with(is_separator) {
            CreateRequest::Directory(path)
        } else {
            CreateRequest::File(path)
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Text handed to the shell.
    pub shell_line: String,
    /// Output names a directory to open in a new panel.
    pub open_panel: bool,
}

impl CommandRequest {
    /// `spf <path>` becomes `echo <path>` so the shell expands `~`,
    /// variables and relative paths.
    pub fn parse(line: &str) -> Self {
        match line.strip_prefix(SPF_PREFIX) {
            Some(rest) => Self {
                shell_line: format!("echo {rest}"),
                open_panel: true,
            },
            None => Self {
                shell_line: line.to_string(),
                open_panel: false,
            },
        }
    }
}
