use galaxy_core::{DistanceConstants, DistanceOracle, Location};

/// Flat two-dimensional galaxy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EuclideanDistance {
    light_year: f64,
}

impl EuclideanDistance {
    pub fn new(light_year: f64) -> Self {
        Self { light_year }
    }

    pub fn from_constants(constants: &DistanceConstants) -> Self {
        Self::new(constants.light_year)
    }
}

impl Default for EuclideanDistance {
    fn default() -> Self {
        Self::new(DistanceConstants::DEFAULT_LIGHT_YEAR)
    }
}

impl DistanceOracle for EuclideanDistance {
    /// Level 1 scans two light years.
    fn scanning_distance(&self, level: u32) -> f64 {
        (f64::from(level) + 1.0) * self.light_year
    }

    fn distance_between(&self, a: Location, b: Location) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }

    fn next_location_toward(&self, from: Location, to: Location, max_step: f64) -> Location {
        let distance = self.distance_between(from, to);
        if distance <= max_step || distance == 0.0 {
            return to;
        }

        let ratio = max_step / distance;
        Location::new(
            from.x + (to.x - from.x) * ratio,
            from.y + (to.y - from.y) * ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanning_grows_one_light_year_per_level() {
        let distance = EuclideanDistance::new(50.0);
        assert_eq!(distance.scanning_distance(1), 100.0);
        assert_eq!(distance.scanning_distance(3), 200.0);
    }

    #[test]
    fn steps_along_the_line_without_overshooting() {
        let distance = EuclideanDistance::default();
        let from = Location::ORIGIN;
        let to = Location::new(30.0, 40.0);

        assert_eq!(distance.distance_between(from, to), 50.0);
        assert_eq!(distance.next_location_toward(from, to, 5.0), Location::new(3.0, 4.0));
        assert_eq!(distance.next_location_toward(from, to, 80.0), to);
        assert_eq!(distance.next_location_toward(to, to, 5.0), to);
    }
}
