//! src/controller/handlers/keymap.rs
//! ============================================================================
//! # Key map
//!
//! One binding table drives both key lookup and the help menu. Bindings are
//! grouped by the focus context they apply in; global bindings apply in
//! every context unless the context binds the same key itself.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};

use super::utils::*;
use crate::controller::actions::Action;
use crate::model::help_menu::HelpEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    FilePanel,
    SideBar,
}

impl KeyContext {
    const fn title(self) -> &'static str {
        match self {
            Self::Global => "General",
            Self::FilePanel => "File panel",
            Self::SideBar => "Sidebar",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub context: KeyContext,
    pub keys: Vec<KeyEvent>,
    pub action: Action,
    pub description: &'static str,
}

fn bind(context: KeyContext, keys: Vec<KeyEvent>, action: Action, description: &'static str) -> Binding {
    Binding {
        context,
        keys,
        action,
        description,
    }
}

pub fn default_bindings() -> Vec<Binding> {
    use KeyContext::*;

    vec![
        bind(Global, vec![key('q'), ctrl('c')], Action::Quit, "Quit"),
        bind(Global, vec![key('?')], Action::OpenHelpMenu, "Open help menu"),
        bind(Global, vec![key(':')], Action::OpenCommandLine, "Open command line"),
        bind(Global, vec![key('n')], Action::CreateNewFilePanel, "Open a new file panel"),
        bind(Global, vec![key('w')], Action::CloseFilePanel, "Close the focused file panel"),
        bind(Global, vec![tab_key(), key('L')], Action::NextFilePanel, "Focus the next file panel"),
        bind(
            Global,
            vec![back_tab_key(), key('H')],
            Action::PreviousFilePanel,
            "Focus the previous file panel",
        ),
        bind(Global, vec![key('f')], Action::ToggleFilePreviewPanel, "Toggle file preview"),
        bind(Global, vec![key('F')], Action::ToggleFooter, "Toggle footer"),
        bind(Global, vec![key('s')], Action::FocusOnSideBar, "Focus sidebar"),
        bind(Global, vec![key('p')], Action::FocusOnProcessBar, "Focus process bar"),
        bind(Global, vec![key('m')], Action::FocusOnMetadata, "Focus metadata"),
        bind(Global, vec![key('P')], Action::PinDirectory, "Pin or unpin the current directory"),
        bind(
            FilePanel,
            vec![arrow_key(KeyCode::Up), key('k')],
            Action::CursorUp,
            "Move cursor up",
        ),
        bind(
            FilePanel,
            vec![arrow_key(KeyCode::Down), key('j')],
            Action::CursorDown,
            "Move cursor down",
        ),
        bind(
            FilePanel,
            vec![enter_key(), arrow_key(KeyCode::Right), key('l')],
            Action::EnterSelected,
            "Enter directory",
        ),
        bind(
            FilePanel,
            vec![arrow_key(KeyCode::Left), key('h'), backspace_key()],
            Action::GoToParent,
            "Go to parent directory",
        ),
        bind(FilePanel, vec![ctrl('n')], Action::OpenCreateItem, "Create file or directory"),
        bind(FilePanel, vec![ctrl('r')], Action::OpenRename, "Rename selected entry"),
        bind(FilePanel, vec![key('/')], Action::OpenSearch, "Search in panel"),
        bind(FilePanel, vec![key('o')], Action::OpenSortOptions, "Open sort options"),
        bind(FilePanel, vec![key('R')], Action::ToggleReverseSort, "Reverse sort order"),
        bind(FilePanel, vec![key('.')], Action::ToggleHiddenFiles, "Toggle hidden files"),
        bind(
            SideBar,
            vec![arrow_key(KeyCode::Up), key('k')],
            Action::SidebarUp,
            "Previous pinned directory",
        ),
        bind(
            SideBar,
            vec![arrow_key(KeyCode::Down), key('j')],
            Action::SidebarDown,
            "Next pinned directory",
        ),
        bind(SideBar, vec![enter_key()], Action::OpenPinned, "Open pinned directory"),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: HashMap<KeyContext, HashMap<KeyEvent, Action>>,
}

impl KeyMap {
    pub fn new(table: &[Binding]) -> Self {
        let mut bindings: HashMap<KeyContext, HashMap<KeyEvent, Action>> = HashMap::new();
        for binding in table {
            let context = bindings.entry(binding.context).or_default();
            for key in &binding.keys {
                context.insert(normalize(*key), binding.action.clone());
            }
        }
        Self { bindings }
    }

    /// Context binding first, then the global one.
    pub fn lookup(&self, context: KeyContext, key: KeyEvent) -> Option<Action> {
        let key = normalize(key);
        [context, KeyContext::Global]
            .into_iter()
            .find_map(|ctx| self.bindings.get(&ctx)?.get(&key).cloned())
    }
}

/// Help rows: a section title per context followed by its bindings, then
/// the fixed prompt keys.
pub fn help_entries(table: &[Binding]) -> Vec<HelpEntry> {
    let mut entries = Vec::new();
    for context in [KeyContext::Global, KeyContext::FilePanel, KeyContext::SideBar] {
        entries.push(HelpEntry::section(context.title()));
        entries.extend(
            table
                .iter()
                .filter(|b| b.context == context)
                .map(|b| HelpEntry::binding(b.keys.iter().map(describe_key), b.description)),
        );
    }

    entries.push(HelpEntry::section("Prompts and menus"));
    entries.push(HelpEntry::binding(["enter"], "Confirm"));
    entries.push(HelpEntry::binding(["esc"], "Cancel"));
    entries.push(HelpEntry::binding(["up", "k"], "Previous option"));
    entries.push(HelpEntry::binding(["down", "j"], "Next option"));
    entries.push(HelpEntry::binding(["R"], "Reverse sort order (sort menu)"));
    entries
}
