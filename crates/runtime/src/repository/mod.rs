//! Repository layer for game persistence.
//!
//! Repositories hold data that CHANGES during play (the game state).
//! Static content such as the specialist table is served by oracles.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileGameRepository;
pub use memory::InMemoryGameRepo;
pub use traits::GameRepository;
