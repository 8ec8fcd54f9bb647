use galaxy_core::{Carrier, Player, Star, StarOracle};

/// Warp travel needs a gate at both ends, both held by the carrier's owner.
#[derive(Clone, Copy, Debug, Default)]
pub struct WarpGateRules;

impl StarOracle for WarpGateRules {
    fn can_travel_at_warp_speed(
        &self,
        owner: Option<&Player>,
        _carrier: &Carrier,
        source: &Star,
        destination: &Star,
    ) -> bool {
        let Some(owner) = owner else {
            return false;
        };

        source.warp_gate
            && destination.warp_gate
            && source.is_owned_by(owner.id)
            && destination.is_owned_by(owner.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{CarrierId, Location, PlayerId, StarId};

    fn gate(id: u32, owner: u32) -> Star {
        Star::new(StarId(id), format!("Star {id}"), Location::ORIGIN)
            .owned_by(PlayerId(owner))
            .with_warp_gate()
    }

    fn any_carrier() -> Carrier {
        let mut sol = Star::new(StarId(1), "Sol", Location::ORIGIN).with_garrison(3.0);
        galaxy_core::carrier::create_at_star(&mut sol, &[], CarrierId(1), 1).unwrap()
    }

    #[test]
    fn requires_owned_gates_at_both_ends() {
        let rules = WarpGateRules;
        let owner = Player::new(PlayerId(1), "Ada");
        let carrier = any_carrier();

        assert!(rules.can_travel_at_warp_speed(Some(&owner), &carrier, &gate(1, 1), &gate(2, 1)));
        assert!(!rules.can_travel_at_warp_speed(Some(&owner), &carrier, &gate(1, 1), &gate(2, 2)));
        assert!(!rules.can_travel_at_warp_speed(None, &carrier, &gate(1, 1), &gate(2, 1)));

        let mut plain = gate(2, 1);
        plain.warp_gate = false;
        assert!(!rules.can_travel_at_warp_speed(Some(&owner), &carrier, &gate(1, 1), &plain));
    }
}
