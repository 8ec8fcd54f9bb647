//! Shared builders and stub oracles for carrier tests.

use std::collections::VecDeque;

use crate::env::{
    DistanceOracle, Env, GameEnv, LocalModifiers, SpecialModifiers, Specialist,
    SpecialistModifiers, SpecialistOracle, StarOracle, TechnologyOracle,
};
use crate::state::{
    Carrier, CarrierId, GameState, Location, Player, PlayerId, SpecialistId, Star, StarId,
    TechnologyLevels,
};

pub fn star(id: u32, name: &str) -> Star {
    Star::new(StarId(id), name, Location::ORIGIN)
}

pub fn carrier_named(id: u32, name: &str) -> Carrier {
    Carrier {
        id: CarrierId(id),
        owned_by_player_id: Some(PlayerId(1)),
        name: name.to_string(),
        ships: 1,
        orbiting: Some(StarId(1)),
        in_transit_from: None,
        in_transit_to: None,
        location: Location::ORIGIN,
        waypoints: VecDeque::new(),
        waypoints_looped: false,
        is_gift: false,
        specialist_id: None,
        distance_to_destination: 0.0,
    }
}

pub fn carrier(id: u32, owner: u32) -> Carrier {
    let mut carrier = carrier_named(id, &format!("Carrier {id}"));
    carrier.owned_by_player_id = Some(PlayerId(owner));
    carrier
}

pub fn player(id: u32) -> Player {
    Player::new(PlayerId(id), format!("Player {id}"))
}

/// Euclidean geometry; one scanning level covers ten units.
pub struct LineDistance;

impl DistanceOracle for LineDistance {
    fn scanning_distance(&self, level: u32) -> f64 {
        f64::from(level) * 10.0
    }

    fn distance_between(&self, a: Location, b: Location) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }

    fn next_location_toward(&self, from: Location, to: Location, max_step: f64) -> Location {
        let distance = self.distance_between(from, to);
        if distance <= max_step {
            return to;
        }
        let ratio = max_step / distance;
        Location::new(from.x + (to.x - from.x) * ratio, from.y + (to.y - from.y) * ratio)
    }
}

/// Uses the star owner's researched levels without star bonuses.
pub struct OwnerTechnology;

impl TechnologyOracle for OwnerTechnology {
    fn effective_levels(&self, state: &GameState, star: &Star) -> TechnologyLevels {
        star.owned_by_player_id
            .and_then(|owner| state.galaxy.player(owner))
            .map(|player| player.technology)
            .unwrap_or_default()
    }
}

/// Star rules with a fixed warp decision.
pub struct FixedWarp(pub bool);

impl StarOracle for FixedWarp {
    fn can_travel_at_warp_speed(
        &self,
        _owner: Option<&Player>,
        _carrier: &Carrier,
        _source: &Star,
        _destination: &Star,
    ) -> bool {
        self.0
    }
}

pub struct SpecialistList(pub Vec<Specialist>);

impl SpecialistOracle for SpecialistList {
    fn carrier_specialist(&self, id: SpecialistId) -> Option<Specialist> {
        self.0.iter().find(|specialist| specialist.id == id).cloned()
    }
}

pub fn speed_specialist(id: u32, speed: f64) -> Specialist {
    Specialist {
        id: SpecialistId(id),
        name: "Navigator".into(),
        modifiers: SpecialistModifiers {
            local: Some(LocalModifiers { speed: Some(speed) }),
            special: None,
        },
    }
}

pub fn stealth_specialist(id: u32) -> Specialist {
    Specialist {
        id: SpecialistId(id),
        name: "Smuggler".into(),
        modifiers: SpecialistModifiers {
            local: None,
            special: Some(SpecialModifiers {
                hide_carrier_ships: true,
            }),
        },
    }
}

pub struct TestOracles {
    pub distance: LineDistance,
    pub technology: OwnerTechnology,
    pub stars: FixedWarp,
    pub specialists: SpecialistList,
}

impl TestOracles {
    pub fn new() -> Self {
        Self {
            distance: LineDistance,
            technology: OwnerTechnology,
            stars: FixedWarp(false),
            specialists: SpecialistList(Vec::new()),
        }
    }

    pub fn with_warp(mut self) -> Self {
        self.stars = FixedWarp(true);
        self
    }

    pub fn with_specialist(mut self, specialist: Specialist) -> Self {
        self.specialists.0.push(specialist);
        self
    }

    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(
            &self.distance,
            &self.technology,
            &self.stars,
            &self.specialists,
        )
        .as_game_env()
    }
}
