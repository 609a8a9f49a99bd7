//! Integration tests for [`matchbot_handlers::ChatRelayHandler`] against a mock GenAI endpoint.
//!
//! Covers the relayed-reply path, the two distinct apology strings (status vs transport), and the
//! silent consumption of command-shaped text.

use std::sync::Arc;

use chrono::Utc;
use genai_client::GenAiClient;
use matchbot_core::{Chat, Handler, HandlerResponse, Message, MessageDirection, User};
use matchbot_handlers::ChatRelayHandler;

use mock_bot::MockBot;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

fn client_for(server: &mockito::ServerGuard) -> GenAiClient {
    GenAiClient::with_api_url(
        "test-key".to_string(),
        format!("{}/general/rest", server.url()),
    )
}

/// **Test: a 200 completion is relayed trimmed and verbatim.**
///
/// **Setup:** Mock endpoint answering 200 with content `"  hi there  "`.
/// **Action:** `handle("hello bot")`.
/// **Expected:** The user receives exactly "hi there"; response is Reply("hi there").
#[tokio::test]
async fn test_relay_success_trims_reply() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/general/rest")
        .with_status(200)
        .with_body(
            r#"{"choices": [{"message": {"role": "assistant", "content": "  hi there  "}}]}"#,
        )
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let handler = ChatRelayHandler::new(bot.clone(), client_for(&server));

    let response = handler
        .handle(&create_test_message("hello bot"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("hi there".to_string()));
    assert_eq!(bot.sent_texts(), vec!["hi there"]);
}

/// **Test: a non-200 status yields the invalid-response apology.**
///
/// **Setup:** Mock endpoint answering 500.
/// **Action:** `handle("hello bot")`.
/// **Expected:** Fixed status apology; chain stops.
#[tokio::test]
async fn test_relay_status_error_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/general/rest")
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let handler = ChatRelayHandler::new(bot.clone(), client_for(&server));

    let response = handler
        .handle(&create_test_message("hello bot"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(
        bot.sent_texts(),
        vec!["Sorry, I couldn't get a valid response from the GPT API."]
    );
}

/// **Test: a malformed 200 body yields the processing-error apology.**
///
/// **Setup:** Mock endpoint answering 200 with non-completion JSON.
/// **Action:** `handle("hello bot")`.
/// **Expected:** Fixed transport apology (distinct from the status apology).
#[tokio::test]
async fn test_relay_malformed_body_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/general/rest")
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let handler = ChatRelayHandler::new(bot.clone(), client_for(&server));

    let response = handler
        .handle(&create_test_message("hello bot"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(
        bot.sent_texts(),
        vec!["Sorry, I encountered an error processing your message."]
    );
}

/// **Test: an unreachable endpoint yields the processing-error apology.**
///
/// **Setup:** Client pointed at a closed port.
/// **Action:** `handle("hello bot")`.
/// **Expected:** Fixed transport apology.
#[tokio::test]
async fn test_relay_transport_error_apology() {
    let client = GenAiClient::with_api_url(
        "test-key".to_string(),
        "http://127.0.0.1:9/general/rest".to_string(),
    );
    let bot = Arc::new(MockBot::new());
    let handler = ChatRelayHandler::new(bot.clone(), client);

    let response = handler
        .handle(&create_test_message("hello bot"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(
        bot.sent_texts(),
        vec!["Sorry, I encountered an error processing your message."]
    );
}

/// **Test: command-shaped text is consumed silently, without a GenAI call.**
///
/// **Setup:** Mock endpoint that would fail the test if hit (expect(0)).
/// **Action:** `handle("/unknowncommand foo")`.
/// **Expected:** Stop, nothing sent, endpoint never called.
#[tokio::test]
async fn test_relay_ignores_commands() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/general/rest")
        .expect(0)
        .create_async()
        .await;

    let bot = Arc::new(MockBot::new());
    let handler = ChatRelayHandler::new(bot.clone(), client_for(&server));

    let response = handler
        .handle(&create_test_message("/unknowncommand foo"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.sent_texts().is_empty());
    mock.assert_async().await;
}
