use crate::carrier::CarrierError;
use crate::state::{Carrier, Player, PlayerId, Star};

/// Star rules the carrier lifecycle depends on.
pub trait StarOracle: Send + Sync {
    /// Returns every star owned by `player`, in galaxy order.
    fn list_owned_by<'s>(&self, stars: &'s [Star], player: PlayerId) -> Vec<&'s Star> {
        stars.iter().filter(|star| star.is_owned_by(player)).collect()
    }

    /// Hands an unowned star to the arriving carrier's owner.
    ///
    /// A gift claiming a neutral star now sits on its owner's own star, so the
    /// gift flag is dropped with the claim.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::StarAlreadyOwned` if the star already has an owner.
    fn claim_unowned_star(
        &self,
        star: &mut Star,
        carrier: &mut Carrier,
    ) -> Result<(), CarrierError> {
        if let Some(owner) = star.owned_by_player_id {
            return Err(CarrierError::StarAlreadyOwned {
                star: star.id,
                owner,
            });
        }

        star.owned_by_player_id = carrier.owned_by_player_id;
        carrier.is_gift = false;
        Ok(())
    }

    /// Decides whether the carrier travels between the two stars at warp speed.
    fn can_travel_at_warp_speed(
        &self,
        owner: Option<&Player>,
        carrier: &Carrier,
        source: &Star,
        destination: &Star,
    ) -> bool;
}
