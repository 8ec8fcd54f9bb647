use galaxy_core::{GameState, Star, TechnologyLevels, TechnologyOracle};

/// Technology at a star is whatever its owner has researched.
///
/// Unowned stars fall back to starting levels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerTechnology;

impl TechnologyOracle for PlayerTechnology {
    fn effective_levels(&self, state: &GameState, star: &Star) -> TechnologyLevels {
        star.owned_by_player_id
            .and_then(|owner| state.galaxy.player(owner))
            .map(|player| player.technology)
            .unwrap_or_default()
    }
}
