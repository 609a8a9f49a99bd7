//! Chat relay handler: forwards free text to the GenAI endpoint and relays the reply.
//!
//! Runs last in the chain. Command-shaped text reaching this handler was claimed by no command
//! handler, so it is consumed without a reply (unrecognized commands are silently ignored).
//! Each free-text message becomes a single-turn conversation; no prior-turn history is sent.

use std::sync::Arc;

use async_trait::async_trait;
use genai_client::{ChatMessage, GenAiClient, GenAiError, DEFAULT_SYSTEM_PROMPT};
use matchbot_core::{Bot, Command, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

// --- User-facing fallback messages (sent on GenAI errors) ---
const MSG_INVALID_RESPONSE: &str = "Sorry, I couldn't get a valid response from the GPT API.";
const MSG_PROCESSING_ERROR: &str = "Sorry, I encountered an error processing your message.";

pub struct ChatRelayHandler {
    bot: Arc<dyn Bot>,
    client: GenAiClient,
}

impl ChatRelayHandler {
    pub fn new(bot: Arc<dyn Bot>, client: GenAiClient) -> Self {
        Self { bot, client }
    }

    /// Sends a fallback message and stops the chain; a failed fallback send is only logged.
    async fn send_fallback_and_stop(
        &self,
        message: &Message,
        text: &str,
    ) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.reply_to(message, text).await {
            error!(error = %e, "Failed to send fallback message");
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for ChatRelayHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.is_empty() {
            return Ok(HandlerResponse::Continue);
        }

        if let Some(cmd) = Command::parse(text) {
            info!(
                user_id = message.user.id,
                command = %cmd.name,
                "step: unrecognized command ignored"
            );
            return Ok(HandlerResponse::Stop);
        }

        let messages = vec![
            ChatMessage::system(DEFAULT_SYSTEM_PROMPT),
            ChatMessage::user(text),
        ];

        match self.client.chat_completion(messages).await {
            Ok(reply) => {
                self.bot.reply_to(message, &reply).await?;
                info!(
                    user_id = message.user.id,
                    reply_len = reply.len(),
                    "step: chat reply relayed"
                );
                Ok(HandlerResponse::Reply(reply))
            }
            Err(e @ GenAiError::Status { .. }) => {
                error!(error = %e, "GenAI API error");
                self.send_fallback_and_stop(message, MSG_INVALID_RESPONSE)
                    .await
            }
            Err(e) => {
                error!(error = %e, "GenAI request failed");
                self.send_fallback_and_stop(message, MSG_PROCESSING_ERROR)
                    .await
            }
        }
    }
}
