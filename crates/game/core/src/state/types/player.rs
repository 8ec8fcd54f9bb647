use super::{PlayerId, UserId};

/// A seat in the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    /// Account behind the seat. AI and open slots have none.
    pub user_id: Option<UserId>,
    pub alias: String,
    pub defeated: bool,
    /// Researched levels. Stars may apply bonuses on top, see
    /// [`TechnologyOracle`](crate::env::TechnologyOracle).
    pub technology: TechnologyLevels,
}

impl Player {
    pub fn new(id: PlayerId, alias: impl Into<String>) -> Self {
        Self {
            id,
            user_id: None,
            alias: alias.into(),
            defeated: false,
            technology: TechnologyLevels::default(),
        }
    }

    pub fn with_user(mut self, user: UserId) -> Self {
        self.user_id = Some(user);
        self
    }

    pub fn with_technology(mut self, technology: TechnologyLevels) -> Self {
        self.technology = technology;
        self
    }
}

/// Technology levels relevant to carriers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechnologyLevels {
    pub scanning: u32,
    pub hyperspace: u32,
    pub weapons: u32,
}

impl TechnologyLevels {
    pub const fn new(scanning: u32, hyperspace: u32, weapons: u32) -> Self {
        Self {
            scanning,
            hyperspace,
            weapons,
        }
    }
}

impl Default for TechnologyLevels {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}
