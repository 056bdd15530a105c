//! Persistence of the pinned-directory list as a JSON array.

use std::future::Future;
use std::path::PathBuf;

use tokio::fs as TokioFs;
use tracing::{debug, info};

use crate::error::AppError;
use crate::model::pinned::PinnedDirectory;

pub trait PinnedStore {
    fn load(&self) -> impl Future<Output = Result<Vec<PinnedDirectory>, AppError>>;

    /// Replace the stored list with `list`.
    fn save(&self, list: &[PinnedDirectory]) -> impl Future<Output = Result<(), AppError>>;
}

#[derive(Debug, Clone)]
pub struct JsonPinnedStore {
    path: PathBuf,
}

impl JsonPinnedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PinnedStore for JsonPinnedStore {
    /// A missing file is an empty list.
    async fn load(&self) -> Result<Vec<PinnedDirectory>, AppError> {
        let bytes = match TokioFs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    marker = "PINNED_FILE_MISSING",
                    operation_type = "pinned",
                    path = %self.path.display(),
                    "No pinned file yet"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, list: &[PinnedDirectory]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(list)?;
        TokioFs::write(&self.path, json).await?;

        info!(
            marker = "PINNED_SAVED",
            operation_type = "pinned",
            path = %self.path.display(),
            count = list.len(),
            "Pinned directories written"
        );
        Ok(())
    }
}
