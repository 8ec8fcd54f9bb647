//! Repository contract for saving and loading game state.

use async_trait::async_trait;
use galaxy_core::GameState;

use super::error::Result;

/// Durable storage for whole games.
///
/// A save replaces whatever was stored for the game before; there is no
/// history. Callers mutate the in-memory state first and save afterwards, so
/// a failed save leaves memory ahead of storage.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Persist the full state of `game_id`.
    async fn save(&self, game_id: &str, state: &GameState) -> Result<()>;

    /// Load the last saved state of `game_id`, if any.
    async fn load(&self, game_id: &str) -> Result<Option<GameState>>;

    /// Check whether a game has been saved.
    async fn exists(&self, game_id: &str) -> Result<bool> {
        Ok(self.load(game_id).await?.is_some())
    }
}
