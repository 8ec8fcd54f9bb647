//! File-based GameRepository implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use galaxy_core::GameState;
use tokio::fs;

use super::error::{RepositoryError, Result};
use super::traits::GameRepository;

/// Stores each game as `{game_id}.json` under a base directory.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crashed save never leaves a truncated game behind.
pub struct FileGameRepository {
    base_dir: PathBuf,
}

impl FileGameRepository {
    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn game_path(&self, game_id: &str) -> Result<PathBuf> {
        let valid = !game_id.is_empty()
            && game_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidGameId(game_id.to_owned()));
        }
        Ok(self.base_dir.join(format!("{game_id}.json")))
    }
}

#[async_trait]
impl GameRepository for FileGameRepository {
    async fn save(&self, game_id: &str, state: &GameState) -> Result<()> {
        let path = self.game_path(game_id)?;
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec(state)?;
        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!(game_id, path = %path.display(), "saved game");
        Ok(())
    }

    async fn load(&self, game_id: &str) -> Result<Option<GameState>> {
        let path = self.game_path(game_id)?;

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let state: GameState = serde_json::from_slice(&bytes)?;

        tracing::debug!(game_id, path = %path.display(), "loaded game");
        Ok(Some(state))
    }

    async fn exists(&self, game_id: &str) -> Result<bool> {
        let path = self.game_path(game_id)?;
        Ok(fs::try_exists(&path).await?)
    }
}
