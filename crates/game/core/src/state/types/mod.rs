pub mod carrier;
pub mod common;
pub mod galaxy;
pub mod player;
pub mod star;

pub use carrier::{Carrier, Waypoint, WaypointAction};
pub use common::{CarrierId, Location, PlayerId, SpecialistId, StarId, UserId};
pub use galaxy::Galaxy;
pub use player::{Player, TechnologyLevels};
pub use star::Star;
