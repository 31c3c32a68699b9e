use clap::Parser;
use matchday::cli::{check, run, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(args) => {
            if let Err(e) = run::execute(args).await {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
    }
}
