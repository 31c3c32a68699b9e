//! Application services (use cases).
//!
//! [`Game`] holds one season's state; [`GameService`] guards it and drives
//! provider synchronisation; [`runtime`] runs the poll loop.

pub mod game;
pub mod runtime;
pub mod service;

pub use game::{Applied, Game, SyncReport};
pub use runtime::run_with_shutdown;
pub use service::{CycleReport, GameService};
