//! Common error infrastructure for galaxy-core.
//!
//! Domain errors ([`CarrierError`](crate::carrier::CarrierError),
//! [`OracleError`](crate::env::OracleError)) are defined next to the code that
//! raises them and implement [`GameError`] for uniform classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input or disallowed game action, rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: the tick cannot continue (missing collaborator, exhausted IDs)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: carrier not owned by caller, star has no garrison
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: waypoint points at a star that does not exist
    Internal,

    /// Fatal error - the current tick cannot proceed.
    ///
    /// Examples: missing required oracle
    Fatal,
}

/// Common trait for all galaxy-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
