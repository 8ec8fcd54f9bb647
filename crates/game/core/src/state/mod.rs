//! Authoritative game state representation.
//!
//! This module owns the data structures that describe carriers, stars, and
//! players. Runtime layers clone or query this state but mutate it through
//! the engine, which returns the side effects the mutation requires.
pub mod types;

pub use types::{
    Carrier, CarrierId, Galaxy, Location, Player, PlayerId, SpecialistId, Star, StarId,
    TechnologyLevels, UserId, Waypoint, WaypointAction,
};

use crate::config::{GameConstants, GameSettings};

/// Canonical snapshot of one game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub galaxy: Galaxy,
    pub settings: GameSettings,
    pub constants: GameConstants,

    /// Sequential carrier ID allocator (monotonically increasing, never reused).
    next_carrier_id: u32,
}

impl GameState {
    /// Creates a state around an existing galaxy.
    ///
    /// The carrier ID allocator resumes after the highest ID already present.
    pub fn new(galaxy: Galaxy, settings: GameSettings, constants: GameConstants) -> Self {
        let next_carrier_id = galaxy
            .carriers
            .iter()
            .map(|carrier| carrier.id.0.saturating_add(1))
            .max()
            .unwrap_or(1);

        Self {
            galaxy,
            settings,
            constants,
            next_carrier_id,
        }
    }

    /// Creates a state with default settings and constants.
    pub fn with_galaxy(galaxy: Galaxy) -> Self {
        Self::new(galaxy, GameSettings::default(), GameConstants::default())
    }

    /// Allocates a new unique CarrierId.
    ///
    /// Returns `None` once the ID space is exhausted.
    pub fn allocate_carrier_id(&mut self) -> Option<CarrierId> {
        let id = CarrierId(self.next_carrier_id);
        self.next_carrier_id = self.next_carrier_id.checked_add(1)?;
        Some(id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_galaxy(Galaxy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_resumes_after_existing_carriers() {
        let mut galaxy = Galaxy::default();
        galaxy.carriers.push(Carrier {
            id: CarrierId(41),
            owned_by_player_id: None,
            name: "Sol 1".into(),
            ships: 1,
            orbiting: Some(StarId(1)),
            in_transit_from: None,
            in_transit_to: None,
            location: Location::ORIGIN,
            waypoints: Default::default(),
            waypoints_looped: false,
            is_gift: false,
            specialist_id: None,
            distance_to_destination: 0.0,
        });

        let mut state = GameState::with_galaxy(galaxy);
        assert_eq!(state.allocate_carrier_id(), Some(CarrierId(42)));
        assert_eq!(state.allocate_carrier_id(), Some(CarrierId(43)));
    }

    #[test]
    fn allocator_reports_exhaustion() {
        let mut state = GameState::default();
        state.next_carrier_id = u32::MAX;
        assert_eq!(state.allocate_carrier_id(), None);
    }
}
