use crate::carrier::{CarrierError, CarrierTransition, arrival, speed};
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::{Carrier, CarrierId, GameState, PlayerId, Star, StarId, Waypoint};

/// What happened to one carrier during a tick, consumed by the tick driver
/// for combat and event processing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementReport {
    pub carrier: CarrierId,
    pub source_star: StarId,
    pub destination_star: StarId,
    pub carrier_owner: Option<PlayerId>,
    pub warp_speed: bool,
    pub distance_per_tick: f64,
    /// The waypoint followed this tick; on arrival, the one consumed.
    pub waypoint: Waypoint,
    pub combat_required_star: bool,
    pub arrived_at_star: bool,
}

/// Returns true while the carrier is between stars.
#[inline]
pub fn is_in_transit(carrier: &Carrier) -> bool {
    carrier.orbiting.is_none()
}

/// Returns true when the carrier is heading for `star`.
#[inline]
pub fn is_in_transit_to(carrier: &Carrier, star: StarId) -> bool {
    is_in_transit(carrier) && carrier.in_transit_to == Some(star)
}

/// Returns true when an orbiting carrier departs this tick.
pub fn is_launching(carrier: &Carrier) -> bool {
    carrier.orbiting.is_some()
        && carrier
            .current_waypoint()
            .is_some_and(|waypoint| waypoint.delay_ticks == 0)
}

/// Ticks an orbiting carrier must still wait before it departs.
fn departure_delay(carrier: &Carrier) -> u32 {
    if carrier.orbiting.is_none() {
        return 0;
    }
    carrier
        .current_waypoint()
        .map_or(0, |waypoint| waypoint.delay_ticks)
}

/// Counts down an orbiting carrier's departure delay by one tick.
///
/// Returns the ticks left, or `None` when the carrier is not waiting to depart.
pub fn count_down_departure(carrier: &mut Carrier) -> Option<u32> {
    if departure_delay(carrier) == 0 {
        return None;
    }
    let front = carrier.waypoints.front_mut()?;
    front.delay_ticks -= 1;
    Some(front.delay_ticks)
}

/// Advances a carrier one tick along its current waypoint.
///
/// A launching carrier leaves orbit first and measures the full leg to its
/// destination. When the remaining distance fits within this tick's travel the carrier
/// arrives (see [`arrival::resolve_arrival`]); otherwise it moves exactly
/// `distance_per_tick` toward the destination.
pub fn move_carrier(
    state: &mut GameState,
    env: &GameEnv<'_>,
    carrier_id: CarrierId,
    effects: &mut Vec<Effect>,
) -> Result<MovementReport, CarrierError> {
    let distance = env.distance()?;
    let stars = env.stars()?;
    let specialists = env.specialists()?;

    let GameState {
        galaxy, constants, ..
    } = state;

    let carrier_index = galaxy
        .carriers
        .iter()
        .position(|carrier| carrier.id == carrier_id)
        .ok_or(CarrierError::CarrierNotFound(carrier_id))?;
    let waypoint = galaxy.carriers[carrier_index]
        .current_waypoint()
        .cloned()
        .ok_or(CarrierError::NoWaypoint(carrier_id))?;
    let source_index = star_index(&galaxy.stars, waypoint.source)?;
    let destination_index = star_index(&galaxy.stars, waypoint.destination)?;

    let delay = departure_delay(&galaxy.carriers[carrier_index]);
    if delay > 0 {
        return Err(CarrierError::AwaitingDeparture {
            carrier: carrier_id,
            ticks: delay,
        });
    }
    if is_launching(&galaxy.carriers[carrier_index]) {
        let target = galaxy.stars[destination_index].location;
        let carrier = &mut galaxy.carriers[carrier_index];
        carrier.orbiting = None;
        carrier.in_transit_from = Some(waypoint.source);
        carrier.in_transit_to = Some(waypoint.destination);
        carrier.distance_to_destination = distance.distance_between(carrier.location, target);
    }

    let carrier = &galaxy.carriers[carrier_index];
    let carrier_owner = carrier.owned_by_player_id;
    let owner = carrier_owner.and_then(|id| galaxy.player(id));
    let warp_speed = stars.can_travel_at_warp_speed(
        owner,
        carrier,
        &galaxy.stars[source_index],
        &galaxy.stars[destination_index],
    );
    let distance_per_tick =
        speed::ticks_distance(&constants.distances, carrier, warp_speed, specialists);
    let arrives = carrier.distance_to_destination <= distance_per_tick;

    let mut report = MovementReport {
        carrier: carrier_id,
        source_star: waypoint.source,
        destination_star: waypoint.destination,
        carrier_owner,
        warp_speed,
        distance_per_tick,
        waypoint,
        combat_required_star: false,
        arrived_at_star: false,
    };

    if arrives {
        let arrival = arrival::resolve_arrival(
            &mut galaxy.carriers[carrier_index],
            &mut galaxy.stars[destination_index],
            &galaxy.players,
            stars,
            effects,
        )?;
        report.waypoint = arrival.waypoint;
        report.combat_required_star = arrival.combat_required_star;
        report.arrived_at_star = true;
    } else {
        let target = galaxy.stars[destination_index].location;
        let carrier = &mut galaxy.carriers[carrier_index];
        carrier.location =
            distance.next_location_toward(carrier.location, target, distance_per_tick);
    }

    Ok(report)
}

fn star_index(stars: &[Star], id: StarId) -> Result<usize, CarrierError> {
    stars
        .iter()
        .position(|star| star.id == id)
        .ok_or(CarrierError::StarNotFound(id))
}

/// Moves one carrier for the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCarrierAction {
    pub carrier: CarrierId,
}

impl MoveCarrierAction {
    pub fn new(carrier: CarrierId) -> Self {
        Self { carrier }
    }
}

impl CarrierTransition for MoveCarrierAction {
    type Output = MovementReport;

    fn name(&self) -> &'static str {
        "move_carrier"
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), CarrierError> {
        env.distance()?;
        env.stars()?;
        env.specialists()?;

        let carrier = state
            .galaxy
            .carrier(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;
        let waypoint = carrier
            .current_waypoint()
            .ok_or(CarrierError::NoWaypoint(self.carrier))?;
        for star in [waypoint.source, waypoint.destination] {
            state
                .galaxy
                .star(star)
                .ok_or(CarrierError::StarNotFound(star))?;
        }

        let delay = departure_delay(carrier);
        if delay > 0 {
            return Err(CarrierError::AwaitingDeparture {
                carrier: self.carrier,
                ticks: delay,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError> {
        move_carrier(state, env, self.carrier, effects)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        let carrier = state
            .galaxy
            .carrier(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;

        let in_transit = carrier.in_transit_from.is_some() && carrier.in_transit_to.is_some();
        if carrier.orbiting.is_some() != in_transit {
            Ok(())
        } else {
            Err(CarrierError::PositionInvariantViolated(self.carrier))
        }
    }
}

/// Holds an orbiting carrier for one tick of its departure delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountDownDepartureAction {
    pub carrier: CarrierId,
}

impl CountDownDepartureAction {
    pub fn new(carrier: CarrierId) -> Self {
        Self { carrier }
    }
}

impl CarrierTransition for CountDownDepartureAction {
    /// Ticks left before departure, `None` if the carrier was not waiting.
    type Output = Option<u32>;

    fn name(&self) -> &'static str {
        "count_down_departure"
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        state
            .galaxy
            .carrier(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError> {
        let carrier = state
            .galaxy
            .carrier_mut(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;
        Ok(count_down_departure(carrier))
    }
}
