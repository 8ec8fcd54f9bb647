//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required collaborator is missing from the [`Env`](super::Env).
///
/// The carrier rules cannot proceed without them, so these are fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("DistanceOracle not available")]
    DistanceNotAvailable,

    #[error("TechnologyOracle not available")]
    TechnologyNotAvailable,

    #[error("StarOracle not available")]
    StarsNotAvailable,

    #[error("SpecialistOracle not available")]
    SpecialistsNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            DistanceNotAvailable => "ORACLE_DISTANCE_NOT_AVAILABLE",
            TechnologyNotAvailable => "ORACLE_TECHNOLOGY_NOT_AVAILABLE",
            StarsNotAvailable => "ORACLE_STARS_NOT_AVAILABLE",
            SpecialistsNotAvailable => "ORACLE_SPECIALISTS_NOT_AVAILABLE",
        }
    }
}
