//! Carries out the side effects returned by carrier transitions.

use std::sync::Arc;

use galaxy_core::{Effect, GameState};

use crate::api::{AchievementSink, Result};
use crate::repository::GameRepository;

/// Executes effects against the game repository and the achievement store.
///
/// Effects run strictly in order. The first failure stops the remaining
/// effects and is returned unchanged; nothing already done is undone.
#[derive(Clone)]
pub struct EffectExecutor {
    repository: Arc<dyn GameRepository>,
    achievements: Arc<dyn AchievementSink>,
}

impl EffectExecutor {
    pub fn new(
        repository: Arc<dyn GameRepository>,
        achievements: Arc<dyn AchievementSink>,
    ) -> Self {
        Self {
            repository,
            achievements,
        }
    }

    pub fn repository(&self) -> &Arc<dyn GameRepository> {
        &self.repository
    }

    pub async fn execute(
        &self,
        game_id: &str,
        state: &GameState,
        effects: &[Effect],
    ) -> Result<()> {
        for effect in effects {
            self.execute_one(game_id, state, effect).await?;
        }
        Ok(())
    }

    async fn execute_one(&self, game_id: &str, state: &GameState, effect: &Effect) -> Result<()> {
        match *effect {
            Effect::SaveGame => {
                self.repository.save(game_id, state).await?;
            }
            Effect::GiftsSent { user, ships } => {
                self.achievements.increment_gifts_sent(user, ships).await?;
            }
            Effect::GiftsReceived { user, ships } => {
                self.achievements
                    .increment_gifts_received(user, ships)
                    .await?;
            }
        }

        tracing::debug!(game_id, ?effect, "effect executed");
        Ok(())
    }
}
