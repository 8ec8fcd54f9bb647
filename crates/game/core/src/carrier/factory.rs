use std::collections::VecDeque;

use crate::carrier::{CarrierError, CarrierTransition, naming};
use crate::effect::Effect;
use crate::env::GameEnv;
use crate::state::{Carrier, CarrierId, GameState, Star, StarId};

/// Builds a carrier at `star` from its garrison.
///
/// Both `garrison_actual` and `garrison` drop by `ships`. The caller must
/// persist the star together with the new carrier. Building more ships than
/// the star holds is not rejected here and leaves a negative garrison.
///
/// # Errors
///
/// - `NoGarrison` when the star has less than one whole ship
/// - `NoShips` when `ships` is zero
pub fn create_at_star(
    star: &mut Star,
    existing: &[Carrier],
    id: CarrierId,
    ships: u32,
) -> Result<Carrier, CarrierError> {
    validate_build(star, ships)?;

    let carrier = Carrier {
        id,
        owned_by_player_id: star.owned_by_player_id,
        name: naming::generate_name(star, existing),
        ships,
        orbiting: Some(star.id),
        in_transit_from: None,
        in_transit_to: None,
        location: star.location,
        waypoints: VecDeque::new(),
        waypoints_looped: false,
        is_gift: false,
        specialist_id: None,
        distance_to_destination: 0.0,
    };

    star.garrison_actual -= f64::from(ships);
    star.garrison -= i64::from(ships);

    Ok(carrier)
}

fn validate_build(star: &Star, ships: u32) -> Result<(), CarrierError> {
    if star.garrison_actual.floor() <= 0.0 {
        return Err(CarrierError::NoGarrison { star: star.id });
    }
    if ships == 0 {
        return Err(CarrierError::NoShips);
    }
    Ok(())
}

/// Builds a new carrier at a star and adds it to the galaxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildCarrierAction {
    pub star: StarId,
    pub ships: u32,
}

impl BuildCarrierAction {
    pub fn new(star: StarId, ships: u32) -> Self {
        Self { star, ships }
    }
}

impl CarrierTransition for BuildCarrierAction {
    type Output = CarrierId;

    fn name(&self) -> &'static str {
        "build_carrier"
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), CarrierError> {
        let star = state
            .galaxy
            .star(self.star)
            .ok_or(CarrierError::StarNotFound(self.star))?;
        validate_build(star, self.ships)
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        effects: &mut Vec<Effect>,
    ) -> Result<Self::Output, CarrierError> {
        let id = state
            .allocate_carrier_id()
            .ok_or(CarrierError::IdSpaceExhausted)?;

        let galaxy = &mut state.galaxy;
        let star = galaxy
            .stars
            .iter_mut()
            .find(|star| star.id == self.star)
            .ok_or(CarrierError::StarNotFound(self.star))?;
        let carrier = create_at_star(star, &galaxy.carriers, id, self.ships)?;
        galaxy.carriers.push(carrier);

        effects.push(Effect::SaveGame);
        Ok(id)
    }
}
