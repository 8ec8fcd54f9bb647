//! Shared galaxy fixtures for runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use galaxy_core::carrier::create_at_star;
use galaxy_core::{
    CarrierId, DistanceConstants, Galaxy, GameState, Location, Player, PlayerId, Star, StarId,
    UserId, Waypoint,
};
use galaxy_runtime::{
    EffectExecutor, GameRepository, GameSession, InMemoryAchievements, InMemoryGameRepo,
    OracleManager, SpecialistTable,
};

pub const GAME: &str = "game-1";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Ada (user 100) holds Sol at the origin and Bea (user 200) holds Vega at
/// (300, 0). Rigel at (0, 20) is unowned. Ships travel 10 per tick and
/// starting scanners reach 100.
pub fn galaxy_state() -> GameState {
    let sol = Star::new(StarId(1), "Sol", Location::ORIGIN)
        .owned_by(PlayerId(1))
        .with_garrison(20.0);
    let vega = Star::new(StarId(2), "Vega", Location::new(300.0, 0.0))
        .owned_by(PlayerId(2))
        .with_garrison(20.0);
    let rigel = Star::new(StarId(3), "Rigel", Location::new(0.0, 20.0));

    let players = vec![
        Player::new(PlayerId(1), "Ada").with_user(UserId(100)),
        Player::new(PlayerId(2), "Bea").with_user(UserId(200)),
    ];
    let mut state = GameState::with_galaxy(Galaxy::new(vec![sol, vega, rigel], players));
    state.constants.distances = DistanceConstants::new(10.0, 3.0, 50.0);
    state
}

/// Builds a carrier at `origin` with one order toward `destination`.
pub fn dispatch(
    state: &mut GameState,
    origin: StarId,
    destination: StarId,
    ships: u32,
) -> CarrierId {
    let id = state.allocate_carrier_id().unwrap();
    let galaxy = &mut state.galaxy;
    let star = galaxy
        .stars
        .iter_mut()
        .find(|star| star.id == origin)
        .unwrap();
    let carrier = create_at_star(star, &galaxy.carriers, id, ships)
        .unwrap()
        .with_waypoint(Waypoint::new(origin, destination));
    galaxy.carriers.push(carrier);
    id
}

pub struct Harness {
    pub repository: Arc<InMemoryGameRepo>,
    pub achievements: Arc<InMemoryAchievements>,
    pub executor: EffectExecutor,
    pub oracles: OracleManager,
}

impl Harness {
    pub fn new(state: &GameState) -> Self {
        Self::with_repository(state, Arc::new(InMemoryGameRepo::new()))
    }

    pub fn with_repository(state: &GameState, repository: Arc<InMemoryGameRepo>) -> Self {
        let achievements = Arc::new(InMemoryAchievements::new());
        let executor = EffectExecutor::new(
            repository.clone() as Arc<dyn GameRepository>,
            achievements.clone(),
        );
        let oracles =
            OracleManager::from_constants(&state.constants.distances, SpecialistTable::default());
        Self {
            repository,
            achievements,
            executor,
            oracles,
        }
    }

    pub fn session(&self, state: GameState) -> GameSession {
        GameSession::new(GAME, state, self.oracles.clone(), self.executor.clone())
    }
}
