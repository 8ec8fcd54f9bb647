use crate::state::Location;

/// Geometry collaborator.
pub trait DistanceOracle: Send + Sync {
    /// Converts a scanning technology level into a detection radius.
    fn scanning_distance(&self, level: u32) -> f64;

    fn distance_between(&self, a: Location, b: Location) -> f64;

    /// Returns the point reached after travelling at most `max_step` from
    /// `from` along the straight line to `to`.
    fn next_location_toward(&self, from: Location, to: Location, max_step: f64) -> Location;
}
