//! Carriers as gifts.
//!
//! The owner marks an in-transit carrier as a gift; when it reaches a star
//! owned by someone else it changes hands instead of fighting.

use crate::carrier::{CarrierError, CarrierTransition};
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::{Carrier, CarrierId, GameState, Player, PlayerId, Star, UserId, WaypointAction};

/// Hands a gifted carrier to the owner of `star`.
///
/// Only reachable from arrival once the star has been claimed, so an unowned
/// star here means the claim step was skipped.
///
/// # Errors
///
/// Returns `DestinationUnowned` when nobody owns the star.
pub fn transfer_gift(
    star: &Star,
    carrier: &mut Carrier,
    players: &[Player],
    effects: &mut Vec<Effect>,
) -> Result<(), CarrierError> {
    let new_owner = star
        .owned_by_player_id
        .ok_or(CarrierError::DestinationUnowned {
            carrier: carrier.id,
            star: star.id,
        })?;

    carrier.owned_by_player_id = Some(new_owner);
    carrier.is_gift = false;

    effects.push(Effect::SaveGame);
    if let Some(user) = user_of(players, new_owner) {
        effects.push(Effect::GiftsReceived {
            user,
            ships: carrier.ships,
        });
    }
    Ok(())
}

fn user_of(players: &[Player], player: PlayerId) -> Option<UserId> {
    players
        .iter()
        .find(|candidate| candidate.id == player)
        .and_then(|found| found.user_id)
}

/// Converts an in-transit carrier into a gift for whoever owns its destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertToGiftAction {
    pub player: PlayerId,
    pub carrier: CarrierId,
}

impl ConvertToGiftAction {
    pub fn new(player: PlayerId, carrier: CarrierId) -> Self {
        Self { player, carrier }
    }
}

impl CarrierTransition for ConvertToGiftAction {
    type Output = ();

    fn name(&self) -> &'static str {
        "convert_to_gift"
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        let carrier = state
            .galaxy
            .carrier(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;

        if !state.settings.gifting_enabled() {
            return Err(CarrierError::GiftingDisabled);
        }
        if !carrier.is_owned_by(self.player) {
            return Err(CarrierError::NotCarrierOwner {
                carrier: self.carrier,
                player: self.player,
            });
        }
        if carrier.orbiting.is_some() {
            return Err(CarrierError::NotInTransit {
                carrier: self.carrier,
            });
        }
        if carrier.is_gift {
            return Err(CarrierError::AlreadyGift {
                carrier: self.carrier,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError> {
        let carrier = state
            .galaxy
            .carrier_mut(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;

        carrier.waypoints.truncate(1);
        if let Some(first) = carrier.waypoints.front_mut() {
            first.neutralize(WaypointAction::Nothing);
        }
        carrier.waypoints_looped = false;
        carrier.is_gift = true;
        let ships = carrier.ships;

        effects.push(Effect::SaveGame);
        if let Some(user) = user_of(&state.galaxy.players, self.player) {
            effects.push(Effect::GiftsSent { user, ships });
        }
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        let carrier = state
            .galaxy
            .carrier(self.carrier)
            .ok_or(CarrierError::CarrierNotFound(self.carrier))?;

        let waypoints_ok = carrier.waypoints.len() <= 1
            && carrier
                .waypoints
                .iter()
                .all(|waypoint| waypoint.action == WaypointAction::Nothing);
        if carrier.is_gift && waypoints_ok && !carrier.waypoints_looped {
            Ok(())
        } else {
            Err(CarrierError::GiftInvariantViolated(self.carrier))
        }
    }
}
