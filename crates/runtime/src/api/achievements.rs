//! Player achievement counters touched by the carrier rules.
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use galaxy_core::UserId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AchievementError {
    #[error("achievement store lock was poisoned")]
    LockPoisoned,
}

/// Tracks per-user achievement counters.
///
/// Implementations talk to the user store, which lives outside any single game.
#[async_trait]
pub trait AchievementSink: Send + Sync {
    async fn increment_gifts_sent(&self, user: UserId, ships: u32) -> Result<(), AchievementError>;

    async fn increment_gifts_received(
        &self,
        user: UserId,
        ships: u32,
    ) -> Result<(), AchievementError>;
}

/// Gift totals for one user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GiftTotals {
    pub sent: u64,
    pub received: u64,
}

/// Keeps achievement counters in memory.
#[derive(Default)]
pub struct InMemoryAchievements {
    totals: RwLock<HashMap<UserId, GiftTotals>>,
}

impl InMemoryAchievements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn totals(&self, user: UserId) -> Result<GiftTotals, AchievementError> {
        let totals = self
            .totals
            .read()
            .map_err(|_| AchievementError::LockPoisoned)?;
        Ok(totals.get(&user).copied().unwrap_or_default())
    }

    fn update(
        &self,
        user: UserId,
        apply: impl FnOnce(&mut GiftTotals),
    ) -> Result<(), AchievementError> {
        let mut totals = self
            .totals
            .write()
            .map_err(|_| AchievementError::LockPoisoned)?;
        apply(totals.entry(user).or_default());
        Ok(())
    }
}

#[async_trait]
impl AchievementSink for InMemoryAchievements {
    async fn increment_gifts_sent(&self, user: UserId, ships: u32) -> Result<(), AchievementError> {
        self.update(user, |totals| totals.sent += u64::from(ships))
    }

    async fn increment_gifts_received(
        &self,
        user: UserId,
        ships: u32,
    ) -> Result<(), AchievementError> {
        self.update(user, |totals| totals.received += u64::from(ships))
    }
}
