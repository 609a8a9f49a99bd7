//! `/setinterest` handler: stores the caller's interest via merge-upsert.
//!
//! The argument text is stored verbatim (arguments joined by single spaces); an empty argument
//! list yields a usage reply and no store write.

use std::sync::Arc;

use async_trait::async_trait;
use matchbot_core::{Bot, Command, Handler, HandlerResponse, MatchbotError, Message, Result};
use storage::UserStore;
use tracing::{error, info, instrument};

const MSG_USAGE: &str = "Usage: /setinterest <your_interest>";

pub struct SetInterestHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn UserStore>,
}

impl SetInterestHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn UserStore>) -> Self {
        Self { bot, store }
    }
}

#[async_trait]
impl Handler for SetInterestHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let cmd = match Command::parse(&message.content) {
            Some(cmd) if cmd.name == "setinterest" => cmd,
            _ => return Ok(HandlerResponse::Continue),
        };

        let interest = cmd.args_text();
        if interest.is_empty() {
            self.bot.reply_to(message, MSG_USAGE).await?;
            return Ok(HandlerResponse::Reply(MSG_USAGE.to_string()));
        }

        let user_id = message.user.id.to_string();
        self.store
            .upsert_interest(&user_id, &interest)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, "Failed to save interest");
                MatchbotError::Database(e.to_string())
            })?;

        let reply = format!("Your interest '{}' has been recorded.", interest);
        self.bot.reply_to(message, &reply).await?;
        info!(user_id = %user_id, interest = %interest, "step: interest recorded");
        Ok(HandlerResponse::Reply(reply))
    }
}
