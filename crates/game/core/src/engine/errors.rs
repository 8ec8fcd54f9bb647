//! Error types for the carrier transition pipeline.

use crate::carrier::CarrierError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

/// Error surfaced while executing a carrier action through the engine.
///
/// A `PreValidate` failure guarantees the state was not touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{action} {phase} failed: {error}")]
pub struct ExecuteError {
    pub action: &'static str,
    pub phase: TransitionPhase,
    #[source]
    pub error: CarrierError,
}

impl ExecuteError {
    pub fn new(action: &'static str, phase: TransitionPhase, error: CarrierError) -> Self {
        Self {
            action,
            phase,
            error,
        }
    }

    /// Returns true when the request was rejected before any mutation.
    pub fn is_rejection(&self) -> bool {
        self.phase == TransitionPhase::PreValidate
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match (self.phase, self.error.severity()) {
            (TransitionPhase::PostValidate, _) => ErrorSeverity::Internal,
            (_, severity) => severity,
        }
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}
