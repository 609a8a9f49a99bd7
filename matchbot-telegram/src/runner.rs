//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//!
//! Each message is handled in a spawned task so long polling never waits on a slow GenAI call;
//! ordering across different users' messages is not guaranteed.

use anyhow::Result;
use handler_chain::HandlerChain;
use matchbot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::components::build_components;
use crate::config::BotConfig;

/// Starts the REPL with the given teloxide Bot and HandlerChain. Each message is converted to
/// core::Message and passed to chain.handle (spawned per message).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let wrapper = TelegramMessageWrapper(&msg);
            let core_msg = wrapper.to_core();

            match msg.text() {
                Some(text) => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        message_content = %text,
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message"
                    );
                }
            }

            // Run handler chain in a spawned task so the REPL returns immediately
            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Validates config, assembles components, and starts long polling.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    let components = build_components(&config).await?;
    info!("Starting long polling");
    run_repl(components.teloxide_bot, components.chain).await
}
