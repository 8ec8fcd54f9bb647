//! Deterministic carrier rules for the galaxy simulation.
//!
//! `galaxy-core` defines the canonical carrier lifecycle (creation, movement,
//! arrival, gifting, fog of war) as pure functions over [`GameState`]. All
//! state mutation flows through [`engine::GameEngine`], which returns the
//! [`Effect`]s a mutation requires instead of performing I/O. Collaborators
//! such as geometry and specialist tables are consumed through the oracle
//! traits in [`env`].
pub mod carrier;
pub mod config;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use carrier::{
    ArrivalReport, BuildCarrierAction, CarrierError, CarrierTransition, CarrierView,
    ClearWaypointsAction, ConvertToGiftAction, CountDownDepartureAction, MoveCarrierAction,
    MovementReport, PublicCarrier, PurgeCarriersAction,
};
pub use config::{DistanceConstants, FeatureToggle, GameConstants, GameSettings};
pub use effect::Effect;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase};
pub use env::{
    DistanceOracle, Env, GameEnv, OracleError, Specialist, SpecialistModifiers, SpecialistOracle,
    StarOracle, TechnologyOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Carrier, CarrierId, Galaxy, GameState, Location, Player, PlayerId, SpecialistId, Star, StarId,
    TechnologyLevels, UserId, Waypoint, WaypointAction,
};
