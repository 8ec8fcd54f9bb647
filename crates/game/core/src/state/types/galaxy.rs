use super::{Carrier, CarrierId, Player, PlayerId, Star, StarId};

/// Every entity of one game.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Galaxy {
    pub carriers: Vec<Carrier>,
    pub stars: Vec<Star>,
    pub players: Vec<Player>,
}

impl Galaxy {
    pub fn new(stars: Vec<Star>, players: Vec<Player>) -> Self {
        Self {
            carriers: Vec::new(),
            stars,
            players,
        }
    }

    /// Returns a reference to a carrier by ID.
    pub fn carrier(&self, id: CarrierId) -> Option<&Carrier> {
        self.carriers.iter().find(|carrier| carrier.id == id)
    }

    /// Returns a mutable reference to a carrier by ID.
    pub fn carrier_mut(&mut self, id: CarrierId) -> Option<&mut Carrier> {
        self.carriers.iter_mut().find(|carrier| carrier.id == id)
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.iter().find(|star| star.id == id)
    }

    pub fn star_mut(&mut self, id: StarId) -> Option<&mut Star> {
        self.stars.iter_mut().find(|star| star.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }
}
