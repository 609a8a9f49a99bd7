//! Bot config: Telegram token, GenAI credentials, database, logging. Loaded from env.
//!
//! External interactions: reads BOT_TOKEN, GENAI_API_KEY, GENAI_API_URL, DATABASE_URL, LOG_FILE,
//! TELEGRAM_API_URL (or TELOXIDE_API_URL). Missing required values fail startup.

use anyhow::Result;
use std::env;

/// Runtime configuration, built once at startup and passed into assembly. No ambient globals.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN (required)
    pub bot_token: String,
    /// GENAI_API_KEY (required): bearer key for the chat completion API
    pub genai_api_key: String,
    /// GENAI_API_URL: chat endpoint override; default is the production endpoint
    pub genai_api_url: Option<String>,
    /// DATABASE_URL: user store location (SQLite)
    pub database_url: String,
    /// LOG_FILE: log file path
    pub log_file: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL: Telegram API override
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to fail fast before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let genai_api_key =
            env::var("GENAI_API_KEY").map_err(|_| anyhow::anyhow!("GENAI_API_KEY not set"))?;
        let genai_api_url = env::var("GENAI_API_URL").ok();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./matchbot.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/matchbot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            genai_api_key,
            genai_api_url,
            database_url,
            log_file,
            telegram_api_url,
        })
    }

    /// Validates config (URL overrides must be valid URLs if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.genai_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("GENAI_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        Ok(())
    }
}
