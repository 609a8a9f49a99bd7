//! `/events` handler: canned event recommendations for the stored interest.
//!
//! The stored interest is lower-cased only here, at read time, for the catalog lookup.

use std::sync::Arc;

use async_trait::async_trait;
use matchbot_core::{Bot, Command, Handler, HandlerResponse, MatchbotError, Message, Result};
use storage::UserStore;
use tracing::{error, info, instrument};

use crate::event_catalog::recommended_events;
use crate::MSG_SET_INTEREST_FIRST;

const MSG_EVENTS_HEADER: &str = "Recommended events:";

pub struct EventsHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn UserStore>,
}

impl EventsHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn UserStore>) -> Self {
        Self { bot, store }
    }
}

#[async_trait]
impl Handler for EventsHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Command::parse(&message.content) {
            Some(cmd) if cmd.name == "events" => {}
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

        let events = recommended_events(&interest.to_lowercase());
        let reply = format!("{}\n{}", MSG_EVENTS_HEADER, events.join("\n"));

        self.bot.reply_to(message, &reply).await?;
        info!(
            user_id = %user_id,
            interest = %interest,
            event_count = events.len(),
            "step: events recommended"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}
