//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings the panel core reads: sidebar and
//! preview geometry, startup toggles, the status-line duration and the
//! pinned-directory file. Settings are TOML at the platform config path
//! resolved with the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;
use crate::logging::LoggerConfig;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "panelfm";
const APPLICATION: &str = "PanelFM";

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // Backward compatibility - missing keys fall back to defaults
pub struct Config {
    /// Sidebar width in columns; 0 disables the sidebar.
    pub sidebar_width: u16,

    /// Preview width divisor; 0 shares space equally with the panels.
    pub file_preview_width: u16,

    pub preview_open_on_start: bool,

    pub footer_visible_on_start: bool,

    pub show_hidden: bool,

    /// Directory of the first panel; the process working directory if unset.
    pub default_directory: Option<PathBuf>,

    /// How long a transient status message stays on screen.
    #[serde(with = "humantime_serde")]
    pub status_message_duration: Duration,

    /// Override for the pinned-directory JSON file.
    pub pinned_file: Option<PathBuf>,

    pub logging: LoggerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_width: 20,
            file_preview_width: 0,
            preview_open_on_start: true,
            footer_visible_on_start: true,
            show_hidden: false,
            default_directory: None,
            status_message_duration: Duration::from_secs(1),
            pinned_file: None,
            logging: LoggerConfig::default(),
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the app config dir, or writes and
    /// returns defaults when no file exists yet.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Loads config from an explicit path.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        let io_err = |source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await.map_err(io_err)?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Location of the pinned-directory list.
    pub fn pinned_path(&self) -> Result<PathBuf, AppError> {
        match &self.pinned_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::project_dirs()?.data_dir().join("pinned.json")),
        }
    }

    fn project_dirs() -> Result<ProjectDirs, AppError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or_else(|| AppError::Other("Could not determine config directory.".into()))
    }
}
