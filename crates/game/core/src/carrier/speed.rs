use crate::config::DistanceConstants;
use crate::env::SpecialistOracle;
use crate::state::Carrier;

/// Distance the carrier covers in one tick.
///
/// `ship_speed`, times the warp multiplier when `warp_speed` holds, times the
/// local speed modifier of the carrier's specialist.
pub fn ticks_distance<P>(
    constants: &DistanceConstants,
    carrier: &Carrier,
    warp_speed: bool,
    specialists: &P,
) -> f64
where
    P: SpecialistOracle + ?Sized,
{
    let mut modifier = if warp_speed {
        constants.warp_speed_multiplier
    } else {
        1.0
    };

    if let Some(specialist) = carrier
        .specialist_id
        .and_then(|id| specialists.carrier_specialist(id))
    {
        modifier *= specialist.speed_modifier();
    }

    constants.ship_speed * modifier
}
