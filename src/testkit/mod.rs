//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] - [`ManualClock`](clock::ManualClock), a settable [`TimeService`](crate::port::TimeService).
//! - [`source`] - [`ScriptedSource`](source::ScriptedSource), a [`MatchDataSource`](crate::port::MatchDataSource)
//!   replaying queued fetch results.
//! - [`domain`] - Builders for fixtures, snapshots and players.

pub mod clock;
pub mod domain;
pub mod source;
