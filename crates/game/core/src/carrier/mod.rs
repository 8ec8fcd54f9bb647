//! Carrier lifecycle rules.
//!
//! Creation at a star, per-tick movement and arrival, the gift workflow, and
//! the fog-of-war views other players receive. Every state-changing command
//! implements [`CarrierTransition`] and is executed through
//! [`GameEngine`](crate::engine::GameEngine).
mod arrival;
mod error;
mod factory;
mod gift;
mod movement;
mod naming;
mod roster;
mod speed;
mod transition;
mod visibility;
mod waypoints;

#[cfg(test)]
pub(crate) mod fixtures;

pub use arrival::{ArrivalReport, resolve_arrival};
pub use error::CarrierError;
pub use factory::{BuildCarrierAction, create_at_star};
pub use gift::{ConvertToGiftAction, transfer_gift};
pub use movement::{
    CountDownDepartureAction, MoveCarrierAction, MovementReport, count_down_departure,
    is_in_transit, is_in_transit_to, is_launching, move_carrier,
};
pub use naming::generate_name;
pub use roster::{
    PurgeCarriersAction, carriers_at_star, carriers_en_route_to, carriers_owned_by,
    purge_player_carriers,
};
pub use speed::ticks_distance;
pub use transition::CarrierTransition;
pub use visibility::{
    CarrierView, PublicCarrier, can_player_see_carrier_ships, player_visible_carriers, sanitize,
    scanning_range_carriers,
};
pub use waypoints::{ClearWaypointsAction, clear_own_waypoints, clear_waypoints_non_transit};
