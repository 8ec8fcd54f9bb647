//! Runtime configuration.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::api::{Result, RuntimeError};
use crate::oracle::SpecialistTable;
use crate::repository::{FileGameRepository, GameRepository, InMemoryGameRepo};

/// Configuration for running games.
///
/// Every field is optional in JSON; missing fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Directory for saved games. Games are kept in memory when unset.
    pub save_dir: Option<PathBuf>,

    /// JSON specialist table. No specialists are available when unset.
    pub specialists_path: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(RuntimeError::ConfigParse)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RuntimeError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json)
    }

    /// Builds the repository the configuration asks for.
    pub async fn repository(&self) -> Result<Arc<dyn GameRepository>> {
        match &self.save_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "saving games to disk");
                Ok(Arc::new(FileGameRepository::new(dir).await?))
            }
            None => Ok(Arc::new(InMemoryGameRepo::new())),
        }
    }

    pub async fn specialists(&self) -> Result<SpecialistTable> {
        match &self.specialists_path {
            Some(path) => SpecialistTable::load(path).await,
            None => Ok(SpecialistTable::default()),
        }
    }
}
