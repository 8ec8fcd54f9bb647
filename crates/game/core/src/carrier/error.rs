//! Carrier rule errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CarrierId, PlayerId, StarId};

/// Errors raised by the carrier lifecycle.
///
/// Validation variants are raised before any state is touched and are meant
/// to be surfaced to the requesting player unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierError {
    #[error("{star} must have a garrison to build a carrier")]
    NoGarrison { star: StarId },

    #[error("a carrier must be built with at least one ship")]
    NoShips,

    #[error("gifting carriers has been disabled in this game")]
    GiftingDisabled,

    #[error("cannot convert {carrier} into a gift, {player} does not own it")]
    NotCarrierOwner { carrier: CarrierId, player: PlayerId },

    #[error("cannot convert {carrier} into a gift while orbiting a star, it must be in transit")]
    NotInTransit { carrier: CarrierId },

    #[error("{carrier} has already been converted into a gift")]
    AlreadyGift { carrier: CarrierId },

    #[error("cannot transfer gifted {carrier} to {star}, no player owns the star")]
    DestinationUnowned { carrier: CarrierId, star: StarId },

    #[error("{star} is already owned by {owner}")]
    StarAlreadyOwned { star: StarId, owner: PlayerId },

    #[error("{0} not found")]
    CarrierNotFound(CarrierId),

    #[error("{0} not found")]
    StarNotFound(StarId),

    #[error("{0} has no waypoints to follow")]
    NoWaypoint(CarrierId),

    #[error("{carrier} departs in {ticks} ticks")]
    AwaitingDeparture { carrier: CarrierId, ticks: u32 },

    #[error("{0} is neither orbiting a star nor in transit between two")]
    PositionInvariantViolated(CarrierId),

    #[error("gift {0} does not satisfy the gift waypoint rules")]
    GiftInvariantViolated(CarrierId),

    #[error("carrier ID space exhausted")]
    IdSpaceExhausted,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CarrierError {
    /// Returns true for precondition failures caused by the caller.
    pub fn is_validation(&self) -> bool {
        self.severity() == ErrorSeverity::Validation
    }
}

impl GameError for CarrierError {
    fn severity(&self) -> ErrorSeverity {
        use CarrierError::*;
        match self {
            NoGarrison { .. }
            | NoShips
            | GiftingDisabled
            | NotCarrierOwner { .. }
            | NotInTransit { .. }
            | AlreadyGift { .. }
            | DestinationUnowned { .. }
            | CarrierNotFound(_)
            | StarNotFound(_)
            | NoWaypoint(_)
            | AwaitingDeparture { .. } => ErrorSeverity::Validation,
            StarAlreadyOwned { .. }
            | GiftInvariantViolated(_)
            | PositionInvariantViolated(_) => ErrorSeverity::Internal,
            IdSpaceExhausted => ErrorSeverity::Fatal,
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use CarrierError::*;
        match self {
            NoGarrison { .. } => "CARRIER_NO_GARRISON",
            NoShips => "CARRIER_NO_SHIPS",
            GiftingDisabled => "CARRIER_GIFTING_DISABLED",
            NotCarrierOwner { .. } => "CARRIER_NOT_OWNER",
            NotInTransit { .. } => "CARRIER_NOT_IN_TRANSIT",
            AlreadyGift { .. } => "CARRIER_ALREADY_GIFT",
            DestinationUnowned { .. } => "CARRIER_DESTINATION_UNOWNED",
            StarAlreadyOwned { .. } => "CARRIER_STAR_ALREADY_OWNED",
            CarrierNotFound(_) => "CARRIER_NOT_FOUND",
            StarNotFound(_) => "CARRIER_STAR_NOT_FOUND",
            NoWaypoint(_) => "CARRIER_NO_WAYPOINT",
            AwaitingDeparture { .. } => "CARRIER_AWAITING_DEPARTURE",
            PositionInvariantViolated(_) => "CARRIER_POSITION_INVARIANT_VIOLATED",
            GiftInvariantViolated(_) => "CARRIER_GIFT_INVARIANT_VIOLATED",
            IdSpaceExhausted => "CARRIER_ID_SPACE_EXHAUSTED",
            Oracle(error) => error.error_code(),
        }
    }
}
