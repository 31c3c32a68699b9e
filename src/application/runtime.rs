//! Poll loop lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use super::service::GameService;

/// Poll the provider every `interval` until shutdown is signalled.
///
/// The first cycle runs immediately. Failed cycles are logged and retried on
/// the next tick; they never stop the loop.
pub async fn run_with_shutdown(
    service: Arc<GameService>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    info!(interval_secs = interval.as_secs(), "Starting poll loop");

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut completed = false;

    loop {
        tokio::select! {
            result = shutdown.changed() => {
                match result {
                    Ok(()) => {
                        if *shutdown.borrow() {
                            info!("Shutdown signal received");
                            break;
                        }
                    }
                    Err(_) => {
                        info!("Shutdown channel closed");
                        break;
                    }
                }
            }
            _ = ticker.tick() => {
                service.tick().await;
                if !completed && service.is_complete() {
                    completed = true;
                    info!("Every fixture is finished, season complete");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::in_memory;
    use crate::application::game::Game;
    use crate::domain::{GameId, StandardScorer};
    use crate::error::FetchError;
    use crate::testkit::clock::ManualClock;
    use crate::testkit::domain::{kickoff, scheduled_update};
    use crate::testkit::source::ScriptedSource;

    fn service(source: ScriptedSource) -> Arc<GameService> {
        let game = Game::new(
            GameId::new("g1"),
            "FL1",
            "2016",
            Arc::new(StandardScorer::default()),
        );
        Arc::new(GameService::new(
            game,
            in_memory(16, 16),
            Arc::new(source),
            Arc::new(ManualClock::at(kickoff())),
            Duration::from_millis(100),
        ))
    }

    #[tokio::test]
    async fn keeps_polling_after_failures_and_stops_on_shutdown() {
        let source = ScriptedSource::new().with_results(vec![
            Err(FetchError::Timeout { after_ms: 100 }),
            Err(FetchError::Status { status: 503 }),
            Ok(vec![scheduled_update("Bastia", "Liverpool", 1)]),
        ]);
        let calls = source.calls();
        let service = service(source);
        let (tx, rx) = watch::channel(false);

        let handle = tokio::spawn(run_with_shutdown(
            Arc::clone(&service),
            Duration::from_millis(10),
            rx,
        ));

        tokio::time::sleep(Duration::from_millis(150)).await;
        tx.send(true).unwrap();
        handle.await.unwrap();

        assert!(calls.load(std::sync::atomic::Ordering::SeqCst) >= 3);
        assert_eq!(service.matches().len(), 1);
    }
}
