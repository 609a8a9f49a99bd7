//! `/match` handler: equality query over stored interests.
//!
//! Fetches the caller's profile, then queries other users with a byte-for-byte equal interest.
//! The reply never names the matched user, only the shared interest.

use std::sync::Arc;

use async_trait::async_trait;
use matchbot_core::{Bot, Command, Handler, HandlerResponse, MatchbotError, Message, Result};
use storage::UserStore;
use tracing::{error, info, instrument};

use crate::MSG_SET_INTEREST_FIRST;

const MSG_NO_MATCH: &str = "No matching users found at the moment. Please try again later.";

pub struct MatchHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn UserStore>,
}

impl MatchHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn UserStore>) -> Self {
        Self { bot, store }
    }
}

#[async_trait]
impl Handler for MatchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Command::parse(&message.content) {
            Some(cmd) if cmd.name == "match" => {}
            _ => return Ok(HandlerResponse::Continue),
        }

        let user_id = message.user.id.to_string();
        let profile = self.store.get(&user_id).await.map_err(|e| {
            error!(error = %e, user_id = %user_id, "Failed to load profile");
            MatchbotError::Database(e.to_string())
        })?;

        let interest = match profile.and_then(|p| p.interest) {
            Some(interest) => interest,
            None => {
                self.bot.reply_to(message, MSG_SET_INTEREST_FIRST).await?;
                return Ok(HandlerResponse::Reply(MSG_SET_INTEREST_FIRST.to_string()));
            }
        };

        let matches = self
            .store
            .find_by_interest(&interest, &user_id)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, "Interest query failed");
                MatchbotError::Database(e.to_string())
            })?;

        let reply = if matches.is_empty() {
            MSG_NO_MATCH.to_string()
        } else {
            format!("Found a match with similar interest: {}.", interest)
        };

        self.bot.reply_to(message, &reply).await?;
        info!(
            user_id = %user_id,
            match_count = matches.len(),
            "step: match query answered"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}
