use arrayvec::ArrayVec;

use crate::carrier::{CarrierError, CarrierTransition, movement};
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::{Carrier, GameState, PlayerId, Waypoint, WaypointAction};

/// Waypoints a carrier keeps once its future orders are dropped.
///
/// A carrier in transit keeps the leg it is flying; an orbiting carrier keeps
/// nothing. With `obfuscate_first` the kept leg reads as a plain
/// [`WaypointAction::CollectAll`] with no ships or delay, hiding intent from
/// other players.
pub fn clear_waypoints_non_transit(
    carrier: &Carrier,
    obfuscate_first: bool,
) -> ArrayVec<Waypoint, 1> {
    let mut kept = ArrayVec::new();
    if !movement::is_in_transit(carrier) {
        return kept;
    }

    if let Some(first) = carrier.current_waypoint() {
        let mut first = first.clone();
        if obfuscate_first {
            first.neutralize(WaypointAction::CollectAll);
        }
        kept.push(first);
    }
    kept
}

/// Drops the queued orders of every carrier owned by `player`.
///
/// Returns how many carriers were touched.
pub fn clear_own_waypoints(state: &mut GameState, player: PlayerId) -> usize {
    let mut touched = 0;
    for carrier in state
        .galaxy
        .carriers
        .iter_mut()
        .filter(|carrier| carrier.is_owned_by(player))
    {
        carrier.waypoints = clear_waypoints_non_transit(carrier, false)
            .into_iter()
            .collect();
        touched += 1;
    }
    touched
}

/// Cancels the queued orders of a player's carriers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearWaypointsAction {
    pub player: PlayerId,
}

impl ClearWaypointsAction {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl CarrierTransition for ClearWaypointsAction {
    type Output = usize;

    fn name(&self) -> &'static str {
        "clear_waypoints"
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError> {
        Ok(clear_own_waypoints(state, self.player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::fixtures::carrier;
    use crate::state::{Galaxy, StarId};

    fn busy_carrier(id: u32, owner: u32) -> Carrier {
        carrier(id, owner)
            .with_waypoint(
                Waypoint::new(StarId(1), StarId(2))
                    .with_action(WaypointAction::DropAll, 5)
                    .with_delay(2),
            )
            .with_waypoint(Waypoint::new(StarId(2), StarId(3)))
    }

    #[test]
    fn orbiting_carrier_keeps_nothing() {
        let orbiting = busy_carrier(1, 1);
        assert!(clear_waypoints_non_transit(&orbiting, false).is_empty());
        assert!(clear_waypoints_non_transit(&orbiting, true).is_empty());
    }

    #[test]
    fn transit_carrier_keeps_current_leg() {
        let travelling = busy_carrier(1, 1).in_transit(StarId(1), StarId(2));

        let kept = clear_waypoints_non_transit(&travelling, false);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], travelling.waypoints[0]);
    }

    #[test]
    fn obfuscation_hides_intent() {
        let travelling = busy_carrier(1, 1).in_transit(StarId(1), StarId(2));

        let kept = clear_waypoints_non_transit(&travelling, true);

        assert_eq!(kept[0].destination, StarId(2));
        assert_eq!(kept[0].action, WaypointAction::CollectAll);
        assert_eq!(kept[0].action_ships, 0);
        assert_eq!(kept[0].delay_ticks, 0);
    }

    #[test]
    fn clears_only_the_players_carriers() {
        let mut galaxy = Galaxy::default();
        galaxy
            .carriers
            .push(busy_carrier(1, 1).in_transit(StarId(1), StarId(2)));
        galaxy.carriers.push(busy_carrier(2, 1));
        galaxy.carriers.push(busy_carrier(3, 2));
        let mut state = GameState::with_galaxy(galaxy);

        let touched = clear_own_waypoints(&mut state, PlayerId(1));

        assert_eq!(touched, 2);
        let carriers = &state.galaxy.carriers;
        assert_eq!(carriers[0].waypoints.len(), 1);
        assert_eq!(carriers[0].waypoints[0].action, WaypointAction::DropAll);
        assert_eq!(carriers[0].waypoints[0].action_ships, 5);
        assert!(carriers[1].waypoints.is_empty());
        assert_eq!(carriers[2].waypoints.len(), 2);
    }
}
