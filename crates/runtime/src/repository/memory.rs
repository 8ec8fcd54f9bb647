//! In-memory GameRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use galaxy_core::GameState;

use super::error::{RepositoryError, Result};
use super::traits::GameRepository;

/// In-memory implementation of GameRepository.
pub struct InMemoryGameRepo {
    games: RwLock<HashMap<String, GameState>>,
    saves: RwLock<usize>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful saves, across all games.
    pub fn save_count(&self) -> Result<usize> {
        self.saves
            .read()
            .map(|saves| *saves)
            .map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl Default for InMemoryGameRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepo {
    async fn save(&self, game_id: &str, state: &GameState) -> Result<()> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.insert(game_id.to_owned(), state.clone());

        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *saves += 1;
        Ok(())
    }

    async fn load(&self, game_id: &str) -> Result<Option<GameState>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(game_id).cloned())
    }

    async fn exists(&self, game_id: &str) -> Result<bool> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.contains_key(game_id))
    }
}
