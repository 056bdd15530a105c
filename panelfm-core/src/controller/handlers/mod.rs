pub mod key_handler_orchestrator;
pub use key_handler_orchestrator::KeyHandlerOrchestrator;

pub mod keymap;
pub use keymap::{Binding, KeyContext, KeyMap, default_bindings, help_entries};

pub mod utils;
pub use utils::*;
