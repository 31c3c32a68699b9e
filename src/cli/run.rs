//! Handler for the `run` command.

use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use crate::application::run_with_shutdown;
use crate::bootstrap::build_service;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::domain::Leaderboard;
use crate::error::{ConfigError, Result};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(secs) = args.poll_interval {
        if secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        config.service.poll_interval_secs = secs;
    }

    config.init_logging();
    info!(
        game = %config.game.id,
        poll_interval_secs = config.service.poll_interval_secs,
        "matchday starting"
    );

    let service = build_service(&config)?;

    if args.once {
        let report = service.poll_once().await?;
        info!(?report, "Single poll complete");
        print_standings(&service.leaderboard());
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = tokio::spawn(run_with_shutdown(
        service.clone(),
        config.service.poll_interval(),
        shutdown_rx,
    ));

    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    let _ = shutdown_tx.send(true);
    if let Err(e) = poller.await {
        error!(error = %e, "Poll loop panicked");
    }

    print_standings(&service.leaderboard());
    info!("matchday stopped");
    Ok(())
}

fn print_standings(board: &Leaderboard) {
    println!("{:>4}  {:<24} {:>6}  {:>5} {:>7} {:>6}", "#", "Player", "Points", "Exact", "Outcome", "Missed");
    for row in board.standings() {
        println!(
            "{:>4}  {:<24} {:>6}  {:>5} {:>7} {:>6}",
            row.rank, row.name, row.points, row.exact_hits, row.outcome_hits, row.missed
        );
    }
}
