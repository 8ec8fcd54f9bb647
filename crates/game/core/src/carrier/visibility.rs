//! Fog of war for carriers.
//!
//! Stars detect carriers within the scanning radius of their owner's
//! technology. Carriers a player does not own are reduced to a public record
//! before they leave the server.

use std::collections::HashSet;

use crate::carrier::{CarrierError, waypoints};
use crate::env::{GameEnv, Specialist, SpecialistOracle};
use crate::state::{
    Carrier, CarrierId, GameState, Location, PlayerId, SpecialistId, Star, StarId, Waypoint,
};

/// Carriers a star can see: its owner's carriers plus anything within scanning range.
///
/// Unowned stars see nothing.
pub fn scanning_range_carriers<'s>(
    state: &'s GameState,
    env: &GameEnv<'_>,
    star: &Star,
) -> Result<Vec<&'s Carrier>, CarrierError> {
    let Some(owner) = star.owned_by_player_id else {
        return Ok(Vec::new());
    };

    let distance = env.distance()?;
    let levels = env.technology()?.effective_levels(state, star);
    let range = distance.scanning_distance(levels.scanning);

    Ok(state
        .galaxy
        .carriers
        .iter()
        .filter(|carrier| {
            carrier.is_owned_by(owner)
                || distance.distance_between(star.location, carrier.location) <= range
        })
        .collect())
}

/// Every carrier seen by at least one of the player's stars.
pub fn player_visible_carriers<'s>(
    state: &'s GameState,
    env: &GameEnv<'_>,
    player: PlayerId,
) -> Result<Vec<&'s Carrier>, CarrierError> {
    let stars = env.stars()?;

    let mut seen = HashSet::new();
    let mut visible = Vec::new();
    for star in stars.list_owned_by(&state.galaxy.stars, player) {
        for carrier in scanning_range_carriers(state, env, star)? {
            if seen.insert(carrier.id) {
                visible.push(carrier);
            }
        }
    }
    Ok(visible)
}

/// Whether `player` may learn how many ships `carrier` holds.
pub fn can_player_see_carrier_ships<P>(player: PlayerId, carrier: &Carrier, specialists: &P) -> bool
where
    P: SpecialistOracle + ?Sized,
{
    if carrier.is_owned_by(player) {
        return true;
    }

    !carrier
        .specialist_id
        .and_then(|id| specialists.carrier_specialist(id))
        .is_some_and(|specialist| specialist.hides_carrier_ships())
}

/// A carrier as presented to one player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "view", rename_all = "snake_case"))]
pub enum CarrierView {
    Owned {
        carrier: Carrier,
        specialist: Option<Specialist>,
    },
    Public(PublicCarrier),
}

impl CarrierView {
    pub fn id(&self) -> CarrierId {
        match self {
            Self::Owned { carrier, .. } => carrier.id,
            Self::Public(public) => public.id,
        }
    }
}

/// What other players learn about a carrier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicCarrier {
    pub id: CarrierId,
    pub owned_by_player_id: Option<PlayerId>,
    pub orbiting: Option<StarId>,
    pub in_transit_from: Option<StarId>,
    pub in_transit_to: Option<StarId>,
    pub name: String,
    /// `None` when a specialist hides the ship count.
    pub ships: Option<u32>,
    pub location: Location,
    pub waypoints: Vec<Waypoint>,
    pub is_gift: bool,
    pub specialist_id: Option<SpecialistId>,
    /// Always stripped.
    pub specialist: Option<Specialist>,
}

impl PublicCarrier {
    fn from_carrier(carrier: &Carrier, ships_visible: bool) -> Self {
        Self {
            id: carrier.id,
            owned_by_player_id: carrier.owned_by_player_id,
            orbiting: carrier.orbiting,
            in_transit_from: carrier.in_transit_from,
            in_transit_to: carrier.in_transit_to,
            name: carrier.name.clone(),
            ships: ships_visible.then_some(carrier.ships),
            location: carrier.location,
            waypoints: waypoints::clear_waypoints_non_transit(carrier, true)
                .into_iter()
                .collect(),
            is_gift: carrier.is_gift,
            specialist_id: carrier.specialist_id,
            specialist: None,
        }
    }
}

/// Views of every carrier in the galaxy for `player`, in galaxy order.
pub fn sanitize(
    state: &GameState,
    env: &GameEnv<'_>,
    player: PlayerId,
) -> Result<Vec<CarrierView>, CarrierError> {
    let specialists = env.specialists()?;

    let views = state
        .galaxy
        .carriers
        .iter()
        .map(|carrier| {
            if carrier.is_owned_by(player) {
                CarrierView::Owned {
                    carrier: carrier.clone(),
                    specialist: carrier
                        .specialist_id
                        .and_then(|id| specialists.carrier_specialist(id)),
                }
            } else {
                let ships_visible = can_player_see_carrier_ships(player, carrier, specialists);
                CarrierView::Public(PublicCarrier::from_carrier(carrier, ships_visible))
            }
        })
        .collect();
    Ok(views)
}
