use std::collections::VecDeque;

use super::{CarrierId, Location, PlayerId, SpecialistId, StarId};

/// Mobile unit transporting ships between stars along queued waypoints.
///
/// # Invariants
///
/// - Exactly one of `orbiting` or the transit pair (`in_transit_from`,
///   `in_transit_to`) is meaningful at any time.
/// - `ships > 0` once created.
/// - A gift (`is_gift`) has at most one waypoint, whose action is
///   [`WaypointAction::Nothing`], and is never looped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carrier {
    pub id: CarrierId,
    pub owned_by_player_id: Option<PlayerId>,
    pub name: String,
    pub ships: u32,
    pub orbiting: Option<StarId>,
    pub in_transit_from: Option<StarId>,
    pub in_transit_to: Option<StarId>,
    pub location: Location,
    /// Front is the current target.
    pub waypoints: VecDeque<Waypoint>,
    pub waypoints_looped: bool,
    pub is_gift: bool,
    pub specialist_id: Option<SpecialistId>,
    /// Remaining distance to the front waypoint's destination. Maintained by
    /// the tick driver before movement runs.
    pub distance_to_destination: f64,
}

impl Carrier {
    /// Returns true when the carrier belongs to `player`.
    #[inline]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owned_by_player_id == Some(player)
    }

    /// Returns the waypoint currently being travelled, if any.
    #[inline]
    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.front()
    }

    pub fn with_waypoint(mut self, waypoint: Waypoint) -> Self {
        self.waypoints.push_back(waypoint);
        self
    }

    pub fn with_specialist(mut self, specialist: SpecialistId) -> Self {
        self.specialist_id = Some(specialist);
        self
    }

    /// Marks the carrier as departed from `from` toward `to`.
    pub fn in_transit(mut self, from: StarId, to: StarId) -> Self {
        self.orbiting = None;
        self.in_transit_from = Some(from);
        self.in_transit_to = Some(to);
        self
    }
}

/// Ordered instruction a carrier follows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub source: StarId,
    pub destination: StarId,
    pub action: WaypointAction,
    pub action_ships: u32,
    pub delay_ticks: u32,
}

impl Waypoint {
    /// Creates a plain hop that collects everything at the destination.
    pub fn new(source: StarId, destination: StarId) -> Self {
        Self {
            source,
            destination,
            action: WaypointAction::CollectAll,
            action_ships: 0,
            delay_ticks: 0,
        }
    }

    pub fn with_action(mut self, action: WaypointAction, action_ships: u32) -> Self {
        self.action = action;
        self.action_ships = action_ships;
        self
    }

    pub fn with_delay(mut self, delay_ticks: u32) -> Self {
        self.delay_ticks = delay_ticks;
        self
    }

    /// Overwrites the intent fields with `action` and zeroes ships and delay.
    pub(crate) fn neutralize(&mut self, action: WaypointAction) {
        self.action = action;
        self.action_ships = 0;
        self.delay_ticks = 0;
    }
}

/// What a carrier does with its ships on arrival at a waypoint.
///
/// Only [`WaypointAction::Nothing`] and [`WaypointAction::CollectAll`] carry
/// meaning for the carrier lifecycle; the rest are executed by the tick driver.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum WaypointAction {
    Nothing,
    CollectAll,
    DropAll,
    Collect,
    Drop,
    CollectAllBut,
    DropAllBut,
    DropPercentage,
    CollectPercentage,
    Garrison,
}
