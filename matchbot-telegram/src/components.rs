//! Component factory: builds BotComponents from config. Isolates assembly logic from the runner.

use std::sync::Arc;

use anyhow::Result;
use genai_client::GenAiClient;
use handler_chain::HandlerChain;
use matchbot_core::Bot as CoreBot;
use matchbot_handlers::{
    ChatRelayHandler, EventsHandler, MatchHandler, SetInterestHandler, StartHandler,
};
use storage::{UserRepository, UserStore};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::bot_adapter::TelegramBotAdapter;
use crate::config::BotConfig;

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub chain: HandlerChain,
}

/// Builds the user store, GenAI client, and handler chain in production order.
#[instrument(skip(config))]
pub async fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let store: Arc<dyn UserStore> = Arc::new(
        UserRepository::new(&config.database_url)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    database_url = %config.database_url,
                    "Failed to initialize user storage"
                );
                anyhow::anyhow!("Failed to initialize user storage: {}", e)
            })?,
    );

    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        match config.telegram_api_url.as_deref() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => {
                    info!(url = %url_str, "Using Telegram API override");
                    bot.set_api_url(url)
                }
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    };

    let core_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let client = match config.genai_api_url.clone() {
        Some(url) => GenAiClient::with_api_url(config.genai_api_key.clone(), url),
        None => GenAiClient::new(config.genai_api_key.clone()),
    };

    // Chain order is the router: command handlers first, relay as catch-all.
    let chain = HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(core_bot.clone())))
        .add_handler(Arc::new(SetInterestHandler::new(
            core_bot.clone(),
            store.clone(),
        )))
        .add_handler(Arc::new(MatchHandler::new(core_bot.clone(), store.clone())))
        .add_handler(Arc::new(EventsHandler::new(core_bot.clone(), store.clone())))
        .add_handler(Arc::new(ChatRelayHandler::new(core_bot, client)));

    Ok(BotComponents { teloxide_bot, chain })
}
