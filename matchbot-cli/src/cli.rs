//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use matchbot_telegram::BotConfig;

#[derive(Parser)]
#[command(name = "matchbot")]
#[command(about = "Interest-matching Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Running with no subcommand is the same as `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
