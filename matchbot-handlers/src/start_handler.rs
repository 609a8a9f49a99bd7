//! `/start` handler: fixed greeting, no store access.

use std::sync::Arc;

use async_trait::async_trait;
use matchbot_core::{Bot, Command, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

const MSG_GREETING: &str = "Hello! I am ChatGPT Bot. How can I assist you today?";

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Command::parse(&message.content) {
            Some(cmd) if cmd.name == "start" => {}
            _ => return Ok(HandlerResponse::Continue),
        }

        self.bot.reply_to(message, MSG_GREETING).await?;
        info!(user_id = message.user.id, "step: start greeting sent");
        Ok(HandlerResponse::Reply(MSG_GREETING.to_string()))
    }
}
