//! Routing tests: the full handler chain in production order.
//!
//! Verifies that each command reaches exactly its handler, unrecognized commands are silently
//! ignored, and free text falls through to the relay.

use std::sync::Arc;

use chrono::Utc;
use genai_client::GenAiClient;
use handler_chain::HandlerChain;
use matchbot_core::{Chat, HandlerResponse, Message, MessageDirection, User};
use matchbot_handlers::{
    ChatRelayHandler, EventsHandler, MatchHandler, SetInterestHandler, StartHandler,
};
use storage::{UserRepository, UserStore};

use mock_bot::MockBot;

fn create_test_message(user_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{}", user_id),
        content: content.to_string(),
        user: User {
            id: user_id,
            username: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// Builds the production chain order against an in-memory repo and the given GenAI endpoint.
async fn build_chain(bot: Arc<MockBot>, api_url: String) -> (HandlerChain, Arc<UserRepository>) {
    let repo = Arc::new(
        UserRepository::new("sqlite::memory:")
            .await
            .expect("Failed to create repository"),
    );
    let client = GenAiClient::with_api_url("test-key".to_string(), api_url);

    let chain = HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(SetInterestHandler::new(bot.clone(), repo.clone())))
        .add_handler(Arc::new(MatchHandler::new(bot.clone(), repo.clone())))
        .add_handler(Arc::new(EventsHandler::new(bot.clone(), repo.clone())))
        .add_handler(Arc::new(ChatRelayHandler::new(bot.clone(), client)));

    (chain, repo)
}

/// **Test: a /setinterest then /match round trip through the chain.**
///
/// **Setup:** Chain in production order; GenAI endpoint never used.
/// **Action:** User 1 and 2 set "chess", user 1 sends /match.
/// **Expected:** Confirmations for both writes, then the found-a-match reply.
#[tokio::test]
async fn test_chain_routes_commands_to_their_handlers() {
    let mut server = mockito::Server::new_async().await;
    let genai_mock = server
        .mock("POST", "/general/rest")
        .expect(0)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let (chain, repo) = build_chain(bot.clone(), format!("{}/general/rest", server.url())).await;

    chain
        .handle(&create_test_message(1, "/setinterest chess"))
        .await
        .unwrap();
    chain
        .handle(&create_test_message(2, "/setinterest chess"))
        .await
        .unwrap();
    chain.handle(&create_test_message(1, "/match")).await.unwrap();

    let sent = bot.sent_texts();
    assert_eq!(
        sent,
        vec![
            "Your interest 'chess' has been recorded.",
            "Your interest 'chess' has been recorded.",
            "Found a match with similar interest: chess.",
        ]
    );
    assert_eq!(
        repo.get("1").await.unwrap().unwrap().interest.as_deref(),
        Some("chess")
    );
    genai_mock.assert_async().await;
}

/// **Test: an unrecognized command fires no handler and sends no reply.**
///
/// **Setup:** Chain in production order; GenAI endpoint expecting zero calls.
/// **Action:** `chain.handle("/doesnotexist")`.
/// **Expected:** Stop; nothing sent; endpoint untouched.
#[tokio::test]
async fn test_chain_silently_ignores_unknown_commands() {
    let mut server = mockito::Server::new_async().await;
    let genai_mock = server
        .mock("POST", "/general/rest")
        .expect(0)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let (chain, _repo) = build_chain(bot.clone(), format!("{}/general/rest", server.url())).await;

    let response = chain
        .handle(&create_test_message(1, "/doesnotexist"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.sent_texts().is_empty());
    genai_mock.assert_async().await;
}

/// **Test: free text falls through every command handler to the relay.**
///
/// **Setup:** Chain in production order; GenAI endpoint answering once.
/// **Action:** `chain.handle("tell me a joke")`.
/// **Expected:** The relayed completion is the only reply.
#[tokio::test]
async fn test_chain_routes_free_text_to_relay() {
    let mut server = mockito::Server::new_async().await;
    let genai_mock = server
        .mock("POST", "/general/rest")
        .with_status(200)
        .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "a joke"}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let (chain, _repo) = build_chain(bot.clone(), format!("{}/general/rest", server.url())).await;

    let response = chain
        .handle(&create_test_message(1, "tell me a joke"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("a joke".to_string()));
    assert_eq!(bot.sent_texts(), vec!["a joke"]);
    genai_mock.assert_async().await;
}
