//! Public runtime API surface.
//!
//! Re-exports the error type and the achievement contract so downstream
//! crates depend on a single module.
mod achievements;
mod errors;

pub use achievements::{AchievementError, AchievementSink, GiftTotals, InMemoryAchievements};
pub use errors::{RepositoryError, Result, RuntimeError};
