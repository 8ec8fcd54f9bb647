//! Runtime implementations of the galaxy-core oracle traits.
//!
//! These implementations are bundled into an [`OracleManager`] so the runtime
//! can build [`galaxy_core::Env`] snapshots on demand. The data is immutable
//! at runtime; dynamic state lives in repositories or
//! [`galaxy_core::GameState`].
mod distance;
mod specialists;
mod stars;
mod technology;

use std::sync::Arc;

use galaxy_core::{DistanceConstants, Env, GameEnv};

pub use distance::EuclideanDistance;
pub use specialists::SpecialistTable;
pub use stars::WarpGateRules;
pub use technology::PlayerTechnology;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) distance: Arc<EuclideanDistance>,
    pub(crate) technology: Arc<PlayerTechnology>,
    pub(crate) stars: Arc<WarpGateRules>,
    pub(crate) specialists: Arc<SpecialistTable>,
}

impl OracleManager {
    pub fn new(
        distance: Arc<EuclideanDistance>,
        technology: Arc<PlayerTechnology>,
        stars: Arc<WarpGateRules>,
        specialists: Arc<SpecialistTable>,
    ) -> Self {
        Self {
            distance,
            technology,
            stars,
            specialists,
        }
    }

    /// Standard rules for a galaxy built with `constants`.
    pub fn from_constants(constants: &DistanceConstants, specialists: SpecialistTable) -> Self {
        Self::new(
            Arc::new(EuclideanDistance::from_constants(constants)),
            Arc::new(PlayerTechnology),
            Arc::new(WarpGateRules),
            Arc::new(specialists),
        )
    }

    /// Converts the manager into a GameEnv for galaxy-core.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.distance.as_ref(),
            self.technology.as_ref(),
            self.stars.as_ref(),
            self.specialists.as_ref(),
        )
        .as_game_env()
    }
}
