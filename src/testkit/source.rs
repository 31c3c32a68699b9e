//! Mock [`MatchDataSource`] for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::FixtureUpdate;
use crate::error::FetchError;
use crate::port::MatchDataSource;

type FetchResult = Result<Vec<FixtureUpdate>, FetchError>;

/// A source with a fixed queue of fetch results.
///
/// Each call to `fetch()` pops the next result (defaults to an empty snapshot
/// when exhausted). An optional delay makes every fetch slow, for timeout
/// tests.
pub struct ScriptedSource {
    results: Mutex<VecDeque<FetchResult>>,
    delay: Option<Duration>,
    calls: Arc<AtomicU32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            delay: None,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_results(self, results: Vec<FetchResult>) -> Self {
        *self.results.lock() = results.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue another result after the scripted ones.
    pub fn push(&self, result: FetchResult) {
        self.results.lock().push_back(result);
    }

    /// Shared counter for asserting fetch call counts.
    pub fn calls(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchDataSource for ScriptedSource {
    async fn fetch(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.results.lock().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
