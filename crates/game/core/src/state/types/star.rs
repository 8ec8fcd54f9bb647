use super::{Location, PlayerId, StarId};

/// Star as seen by the carrier rules.
///
/// `garrison` is the nominal defender count shown to players while
/// `garrison_actual` accumulates fractional production. Both may go negative
/// when a caller builds more ships than the star holds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Star {
    pub id: StarId,
    pub name: String,
    pub owned_by_player_id: Option<PlayerId>,
    pub location: Location,
    pub garrison: i64,
    pub garrison_actual: f64,
    pub warp_gate: bool,
}

impl Star {
    pub fn new(id: StarId, name: impl Into<String>, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            owned_by_player_id: None,
            location,
            garrison: 0,
            garrison_actual: 0.0,
            warp_gate: false,
        }
    }

    pub fn owned_by(mut self, player: PlayerId) -> Self {
        self.owned_by_player_id = Some(player);
        self
    }

    pub fn with_garrison(mut self, garrison_actual: f64) -> Self {
        self.garrison_actual = garrison_actual;
        self.garrison = garrison_actual.floor() as i64;
        self
    }

    pub fn with_warp_gate(mut self) -> Self {
        self.warp_gate = true;
        self
    }

    #[inline]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owned_by_player_id == Some(player)
    }
}
