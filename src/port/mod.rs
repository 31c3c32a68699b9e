//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`TimeService`] - Injectable clock for bet cutoffs
//! - [`MatchDataSource`] - Upstream fixture snapshots
//! - [`BetRepository`], [`MatchRepository`], [`GameRepository`],
//!   [`PlayerRepository`], [`ScoreRepository`] - Persistence

mod clock;
mod source;
mod store;

pub use clock::{SystemClock, TimeService};
pub use source::MatchDataSource;
pub use store::{
    BetRepository, GameRepository, MatchRepository, PlayerRepository, Repositories,
    ScoreRepository,
};
