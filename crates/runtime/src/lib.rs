//! Runtime orchestration for the galaxy carrier rules.
//!
//! This crate wires the pure rules of `galaxy-core` to the outside world:
//! concrete oracles, game repositories, and the achievement store. Consumers
//! hold a [`GameSession`] per game to run carrier actions and ticks.
//!
//! Modules are organized by responsibility:
//! - [`session`] drives actions and ticks for one game
//! - [`effects`] carries out the side effects the rules return
//! - [`api`] exposes the error type and the achievement contract
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod config;
pub mod effects;
pub mod oracle;
pub mod repository;
pub mod session;

pub use api::{
    AchievementError, AchievementSink, GiftTotals, InMemoryAchievements, Result, RuntimeError,
};
pub use config::RuntimeConfig;
pub use effects::EffectExecutor;
pub use oracle::{
    EuclideanDistance, OracleManager, PlayerTechnology, SpecialistTable, WarpGateRules,
};
pub use repository::{FileGameRepository, GameRepository, InMemoryGameRepo, RepositoryError};
pub use session::GameSession;
