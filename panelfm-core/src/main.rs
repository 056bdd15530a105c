//! src/main.rs
//! Terminal entry point: config, logging, terminal setup, then the event loop.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    path::PathBuf,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{self as crossterm_terminal, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};

use panelfm_core::{
    config::Config,
    controller::{
        actions::Action,
        event_loop::EventLoop,
        executor::EffectExecutor,
        handlers::{KeyHandlerOrchestrator, KeyMap, default_bindings, help_entries},
    },
    logging::LoggerBuilder,
    model::app_state::AppState,
    operators::{
        command_runner::ShellCommandRunner,
        pinned_store::{JsonPinnedStore, PinnedStore},
    },
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic_handler();

    let (config, config_error) = match Config::load().await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _log_guard = LoggerBuilder::new()
        .with_config(config.logging.clone())
        .build()
        .context("Failed to initialize logging")?;
    info!(marker = "APP_START", operation_type = "startup", "Starting panelfm");
    if let Some(e) = config_error {
        warn!(
            marker = "CONFIG_LOAD_FAILED",
            operation_type = "startup",
            error = %e,
            "Failed to load config, using defaults"
        );
    }

    let start_dir = start_directory(&config).await?;
    let store = JsonPinnedStore::new(config.pinned_path().context("Failed to resolve pinned file")?);
    let pinned = store.load().await.unwrap_or_else(|e| {
        warn!(
            marker = "PINNED_LOAD_FAILED",
            operation_type = "startup",
            error = %e,
            "Failed to read pinned directories"
        );
        Vec::new()
    });

    let bindings = default_bindings();
    let size = crossterm_terminal::size().context("Failed to read terminal size")?;
    let state = AppState::new(&config, start_dir.clone(), size, help_entries(&bindings), pinned);
    let mut event_loop = EventLoop::new(
        state,
        KeyHandlerOrchestrator::new(KeyMap::new(&bindings)),
        EffectExecutor::new(ShellCommandRunner, store),
    );

    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;
    event_loop.process(Action::RefreshPanelsAt(start_dir)).await;
    let outcome = event_loop.run(&mut terminal).await;
    cleanup_terminal(&mut terminal)?;

    outcome.context("Application runtime error")?;
    info!(marker = "APP_EXIT", operation_type = "shutdown", "Application exited cleanly");
    Ok(())
}

async fn start_directory(config: &Config) -> Result<PathBuf> {
    let dir = match &config.default_directory {
        Some(dir) => dir.clone(),
        None => PathBuf::from("."),
    };
    tokio::fs::canonicalize(&dir)
        .await
        .with_context(|| format!("Failed to resolve start directory {}", dir.display()))
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!(marker = "TERMINAL_SETUP", operation_type = "startup", "Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!(marker = "TERMINAL_CLEANUP", operation_type = "shutdown", "Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
