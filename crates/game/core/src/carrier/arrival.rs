use crate::carrier::{CarrierError, gift};
use crate::effect::Effect;
use crate::env::StarOracle;
use crate::state::{Carrier, Player, Star, Waypoint};

/// Outcome of a carrier reaching its waypoint destination.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalReport {
    /// The waypoint that was consumed.
    pub waypoint: Waypoint,
    /// The destination belongs to someone else and combat must be resolved there.
    pub combat_required_star: bool,
}

/// Puts `carrier` into orbit at `destination`.
///
/// Order matters: the waypoint is popped (and re-queued when looped), the star
/// is claimed if nobody owns it, and only then is ownership compared. A carrier
/// that claims a star therefore never fights itself there. When the owners
/// differ a gift changes hands, anything else flags combat and changes nothing.
pub fn resolve_arrival<S>(
    carrier: &mut Carrier,
    destination: &mut Star,
    players: &[Player],
    stars: &S,
    effects: &mut Vec<Effect>,
) -> Result<ArrivalReport, CarrierError>
where
    S: StarOracle + ?Sized,
{
    let waypoint = carrier
        .waypoints
        .pop_front()
        .ok_or(CarrierError::NoWaypoint(carrier.id))?;

    carrier.in_transit_from = None;
    carrier.in_transit_to = None;
    carrier.orbiting = Some(destination.id);
    carrier.location = destination.location;

    if carrier.waypoints_looped {
        carrier.waypoints.push_back(waypoint.clone());
    }

    if destination.owned_by_player_id.is_none() {
        stars.claim_unowned_star(destination, carrier)?;
    }

    let mut combat_required_star = false;
    if destination.owned_by_player_id != carrier.owned_by_player_id {
        if carrier.is_gift {
            gift::transfer_gift(destination, carrier, players, effects)?;
        } else {
            combat_required_star = true;
        }
    }

    Ok(ArrivalReport {
        waypoint,
        combat_required_star,
    })
}
