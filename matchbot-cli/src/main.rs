//! matchbot CLI: run the Telegram bot. Config from env (.env supported) and optional CLI args.

use anyhow::Result;
use clap::Parser;
use matchbot_cli::{load_config, Cli, Commands};
use matchbot_core::init_tracing;
use matchbot_telegram::run_bot;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let token = match cli.command {
        Some(Commands::Run { token }) => token,
        None => None,
    };

    let config = load_config(token)?;
    init_tracing(&config.log_file)?;
    info!(database_url = %config.database_url, "Starting matchbot");

    run_bot(config).await
}
