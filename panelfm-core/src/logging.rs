//! src/logging.rs
//! ============================================================================
//! # Logging: structured JSON log file for the TUI
//!
//! The terminal belongs to the UI, so every record goes to a rolling JSONL
//! file through a non-blocking writer. Handlers log with the `marker` and
//! `operation_type` fields so a session can be filtered per subsystem.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use compact_str::CompactString;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log directory; the platform data dir when unset.
    pub log_dir: Option<PathBuf>,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub max_log_files: usize,
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_file_prefix: CompactString::const_new("panelfm"),
            log_level: CompactString::const_new("info"),
            max_log_files: 10,
            rotation: LogRotation::Daily,
        }
    }
}

impl LoggerConfig {
    /// Resolve the directory log files are written to.
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }

        let proj_dirs = ProjectDirs::from("org", "panelfm", "PanelFM")
            .context("Could not determine data directory for logs")?;
        Ok(proj_dirs.data_local_dir().join("logs"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log directory: {0}")]
    InvalidLogDirectory(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn validate_config(config: &LoggerConfig) -> Result<(), LoggingError> {
    if config.log_file_prefix.is_empty() {
        return Err(LoggingError::ConfigError(
            "log_file_prefix must not be empty".into(),
        ));
    }

    if config.max_log_files == 0 {
        return Err(LoggingError::ConfigError(
            "max_log_files must be at least 1".into(),
        ));
    }

    parse_level(&config.log_level)?;
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level)
        .map_err(|e| LoggingError::ConfigError(format!("invalid log level {level:?}: {e}")))
}

fn setup_log_directory(dir: &Path) -> Result<(), LoggingError> {
    if dir.exists() && !dir.is_dir() {
        return Err(LoggingError::InvalidLogDirectory(
            dir.display().to_string(),
        ));
    }

    std::fs::create_dir_all(dir)?;
    Ok(())
}

// Logger builder
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the global subscriber. Keep the guard alive until exit or
    /// buffered records are lost.
    pub fn build(self) -> Result<WorkerGuard> {
        validate_config(&self.config)?;

        let log_dir = self.config.resolved_log_dir()?;
        setup_log_directory(&log_dir)?;

        let rotation = match self.config.rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Daily => Rotation::DAILY,
        };

        let file_appender = RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(self.config.log_file_prefix.as_str())
            .filename_suffix("jsonl")
            .max_log_files(self.config.max_log_files)
            .build(&log_dir)
            .context("Failed to create file appender")?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let filter = EnvFilter::from_default_env()
            .add_directive(parse_level(&self.config.log_level)?.into());

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(json_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        Ok(guard)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
