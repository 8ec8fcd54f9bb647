use crate::state::{GameState, Star, TechnologyLevels};

/// Resolves the technology levels that apply at a star.
///
/// Effective levels include star-local bonuses on top of the owner's research.
pub trait TechnologyOracle: Send + Sync {
    fn effective_levels(&self, state: &GameState, star: &Star) -> TechnologyLevels;
}
