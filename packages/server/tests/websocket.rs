//! WebSocket integration tests.
//!
//! A watcher connected to a room receives the events of that room only.

mod fixtures;
use fixtures::TestServer;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio_tungstenite::{connect_async, tungstenite::Message};

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Read the next text frame as JSON, failing after a timeout
async fn next_event(ws: &mut WsStream) -> serde_json::Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("Timed out waiting for event")
            .expect("WebSocket closed")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).expect("Failed to parse event JSON");
        }
    }
}

#[tokio::test]
async fn test_watcher_receives_message_typing_and_reply() {
    // テスト項目: HTTP で投稿すると、ウォッチャーにメッセージ → 入力中 → 返信の順で届く
    // given (前提条件):
    let server = TestServer::start().await;
    let (mut ws, _) = connect_async(server.ws_url("General"))
        .await
        .expect("Failed to connect");

    // when (操作):
    let response = reqwest::Client::new()
        .post(format!("{}/api/rooms/General/messages", server.base_url()))
        .json(&json!({"sender": "alice", "text": "tell me a joke"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // then (期待する結果):
    let posted = next_event(&mut ws).await;
    assert_eq!(posted["type"], "message");
    assert_eq!(posted["message"]["sender"], "alice");

    let typing = next_event(&mut ws).await;
    assert_eq!(typing["type"], "bot-typing");
    assert_eq!(typing["room"], "General");

    let reply = next_event(&mut ws).await;
    assert_eq!(reply["type"], "message");
    assert_eq!(reply["message"]["sender"], "Bot");
}

#[tokio::test]
async fn test_watcher_can_post_messages() {
    // テスト項目: WebSocket で送信した JSON は投稿として記録される
    // given (前提条件):
    let server = TestServer::start().await;
    let (mut ws, _) = connect_async(server.ws_url("lobby"))
        .await
        .expect("Failed to connect");

    // when (操作):
    let request = json!({"sender": "bob", "text": "hi"}).to_string();
    ws.send(Message::Text(request.into()))
        .await
        .expect("Failed to send");

    // then (期待する結果):
    let posted = next_event(&mut ws).await;
    assert_eq!(posted["type"], "message");
    assert_eq!(posted["message"]["room"], "lobby");
    assert_eq!(posted["message"]["text"], "hi");
}

#[tokio::test]
async fn test_watcher_ignores_other_rooms() {
    // テスト項目: 他のルームのイベントは届かず、リセットは全ウォッチャーに届く
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let (mut ws, _) = connect_async(server.ws_url("General"))
        .await
        .expect("Failed to connect");

    // when (操作):
    client
        .post(format!("{}/api/rooms/lobby/messages", server.base_url()))
        .json(&json!({"sender": "alice", "text": "hello"}))
        .send()
        .await
        .expect("Failed to send request");
    client
        .post(format!("{}/api/reset", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    let event = next_event(&mut ws).await;
    assert_eq!(event["type"], "store-reset");
}
