pub mod error;
pub use error::AppError;

pub mod config;
pub use config::Config;

pub mod logging;
pub use logging::{LoggerBuilder, LoggerConfig};

pub mod fs {
    pub mod dir_scanner;
    pub use dir_scanner::{DirEntryInfo, scan_directory};
}

pub mod model {
    pub mod layout;
    pub use layout::{Geometry, LayoutInput, compute_geometry};

    pub mod focus;
    pub use focus::FocusTarget;

    pub mod panel;
    pub use panel::{Panel, PanelFocus, PanelModal};

    pub mod panel_set;
    pub use panel_set::PanelSet;

    pub mod text_input;
    pub use text_input::TextInput;

    pub mod sort_options;
    pub use sort_options::{SortKey, SortOptions};

    pub mod help_menu;
    pub use help_menu::{HelpEntry, HelpMenu};

    pub mod modal;
    pub use modal::{CommandRequest, CreateItemModal, CreateRequest, Modal, WarnModal};

    pub mod pinned;
    pub use pinned::PinnedDirectory;

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, UIState};

    pub mod app_state;
    pub use app_state::AppState;
}

pub mod operators {
    pub mod file_ops;

    pub mod command_runner;
    pub use command_runner::{CommandRunner, ShellCommandRunner};

    pub mod pinned_store;
    pub use pinned_store::{JsonPinnedStore, PinnedStore};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod effects;
    pub use effects::Effect;

    pub mod action_dispatcher;
    pub use action_dispatcher::dispatch;

    pub mod handlers;

    pub mod executor;
    pub use executor::EffectExecutor;

    pub mod event_loop;
    pub use event_loop::EventLoop;
}

pub mod view {
    pub mod icons;

    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod popup;
        pub mod text_line;

        pub mod file_panel;
        pub use file_panel::FilePanelView;
        pub mod sidebar;
        pub use sidebar::SidebarView;
        pub mod preview;
        pub use preview::PreviewView;
        pub mod footer;
        pub use footer::FooterView;
        pub mod status_bar;
        pub use status_bar::StatusBar;
        pub mod input_prompt_overlay;
        pub use input_prompt_overlay::InputPromptOverlay;
        pub mod warn_overlay;
        pub use warn_overlay::WarnOverlay;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
    }
}
