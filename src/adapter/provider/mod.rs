//! Upstream match-data provider adapter.

mod client;
mod dto;
mod selection;

pub use client::HttpMatchSource;
pub use dto::{BookmakerOdds, FixtureDto, FixturesResponse, OddValue};
pub use selection::{select_odds, DEFAULT_BOOKMAKERS};
