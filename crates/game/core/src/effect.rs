//! Side-effect intents produced by carrier transitions.
//!
//! Transitions never perform I/O. They mutate the in-memory state and return
//! the effects the tick driver must carry out afterwards, in order.

use crate::state::UserId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Persist the whole game state.
    SaveGame,

    /// Credit `user` with ships sent as a gift.
    GiftsSent { user: UserId, ships: u32 },

    /// Credit `user` with ships received as a gift.
    GiftsReceived { user: UserId, ships: u32 },
}
