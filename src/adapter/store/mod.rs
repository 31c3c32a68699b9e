//! Storage adapters.

mod cache;
mod memory;

pub use cache::LruStore;
pub use memory::{
    in_memory, InMemoryBetRepository, InMemoryGameRepository, InMemoryMatchRepository,
    InMemoryPlayerRepository, InMemoryScoreRepository,
};
