use crate::carrier::{CarrierError, CarrierTransition, movement};
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::{Carrier, GameState, PlayerId, StarId};

pub fn carriers_owned_by(carriers: &[Carrier], player: PlayerId) -> impl Iterator<Item = &Carrier> {
    carriers
        .iter()
        .filter(move |carrier| carrier.is_owned_by(player))
}

pub fn carriers_at_star(carriers: &[Carrier], star: StarId) -> impl Iterator<Item = &Carrier> {
    carriers
        .iter()
        .filter(move |carrier| carrier.orbiting == Some(star))
}

pub fn carriers_en_route_to(carriers: &[Carrier], star: StarId) -> impl Iterator<Item = &Carrier> {
    carriers
        .iter()
        .filter(move |carrier| movement::is_in_transit_to(carrier, star))
}

/// Removes every carrier owned by `player`, and any carrier without an owner.
///
/// Returns how many carriers were removed.
pub fn purge_player_carriers(state: &mut GameState, player: PlayerId) -> usize {
    let before = state.galaxy.carriers.len();
    state.galaxy.carriers.retain(|carrier| {
        carrier
            .owned_by_player_id
            .is_some_and(|owner| owner != player)
    });
    before - state.galaxy.carriers.len()
}

/// Removes an eliminated player's carriers from the galaxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurgeCarriersAction {
    pub player: PlayerId,
}

impl PurgeCarriersAction {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl CarrierTransition for PurgeCarriersAction {
    type Output = usize;

    fn name(&self) -> &'static str {
        "purge_carriers"
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError> {
        Ok(purge_player_carriers(state, self.player))
    }
}
