//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the carrier rules, repositories, and achievement
//! tracking so callers can bubble them up with consistent context.
use std::path::PathBuf;

use thiserror::Error;

pub use crate::repository::RepositoryError;

use super::achievements::AchievementError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Execute(#[from] galaxy_core::ExecuteError),

    #[error(transparent)]
    Carrier(#[from] galaxy_core::CarrierError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Achievement(#[from] AchievementError),

    #[error("game {0} has never been saved")]
    GameNotFound(String),

    #[error("failed to read {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid specialist table")]
    SpecialistTable(#[source] serde_json::Error),
}

impl RuntimeError {
    /// Returns true when a player's request was refused and nothing changed.
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Execute(error) => error.is_rejection() && error.error.is_validation(),
            Self::Carrier(error) => error.is_validation(),
            _ => false,
        }
    }
}
