//! Upstream match-data port.

use async_trait::async_trait;

use crate::domain::FixtureUpdate;
use crate::error::FetchError;

/// Source of fixture snapshots for one competition season.
///
/// Implementations must bound every fetch in time; the polling loop treats any
/// error as transient and retries on its next cycle.
#[async_trait]
pub trait MatchDataSource: Send + Sync {
    /// Fetch the current snapshot of every known fixture.
    async fn fetch(&self) -> Result<Vec<FixtureUpdate>, FetchError>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}
