//! Matchday - football prediction league backend.
//!
//! Players predict exact scores of upcoming fixtures. A poll loop keeps the
//! season's fixtures in sync with an upstream provider, and every finished
//! match is scored once per player, with odds-derived bonuses.
//!
//! # Modules
//!
//! - [`domain`] - Fixtures, bets, odds, scoring rules and standings
//! - [`port`] - Traits for the clock, the match-data provider and repositories
//! - [`adapter`] - HTTP provider client and in-memory repositories
//! - [`application`] - The game aggregate, its service and the poll loop
//! - [`config`] - Configuration loading from TOML files
//! - [`bootstrap`] - Wiring from configuration to a running service
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use matchday::bootstrap::build_service;
//! use matchday::config::Config;
//!
//! # async fn demo() -> matchday::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let service = build_service(&config)?;
//! service.poll_once().await?;
//! for row in service.leaderboard().standings() {
//!     println!("{} {} {}", row.rank, row.name, row.points);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
