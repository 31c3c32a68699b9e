//! Implementations of ports (hexagonal adapters).

pub mod provider;
pub mod store;
