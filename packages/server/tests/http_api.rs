//! HTTP API integration tests.
//!
//! Tests for REST API endpoints (health check, rooms, messages, export, reset)
//! and the HTML room view.

mod fixtures;
use fixtures::TestServer;

use serde_json::json;

async fn post_message(
    client: &reqwest::Client,
    server: &TestServer,
    room: &str,
    sender: &str,
    text: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/rooms/{}/messages", server.base_url(), room))
        .json(&json!({"sender": sender, "text": text}))
        .send()
        .await
        .expect("Failed to send request")
}

async fn get_messages(
    client: &reqwest::Client,
    server: &TestServer,
    room: &str,
) -> Vec<serde_json::Value> {
    let response = client
        .get(format!("{}/api/rooms/{}/messages", server.base_url(), room))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body.as_array().expect("Response should be an array").clone()
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_rooms_list_endpoint() {
    // テスト項目: /api/rooms エンドポイントがルーム一覧を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body.is_array(), "Response should be an array");

    // デフォルトでは1つのルーム（"General"）が存在する
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["name"], "General");
    assert!(rooms[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_join_room_creates_room_once() {
    // テスト項目: 同じルームに2回参加してもルームは1つだけ作成される
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    for name in ["  lobby ", "lobby"] {
        let response = client
            .post(format!("{}/api/rooms", server.base_url()))
            .json(&json!({"name": name}))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["name"], "lobby");
    }

    // then (期待する結果):
    let rooms: serde_json::Value = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let names: Vec<&str> = rooms
        .as_array()
        .unwrap()
        .iter()
        .map(|room| room["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["General", "lobby"]);
}

#[tokio::test]
async fn test_join_room_blank_name_is_no_op() {
    // テスト項目: 空白のルーム名での参加は 204 を返し、何も作成しない
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/api/rooms", server.base_url()))
        .json(&json!({"name": "   "}))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_post_message_gets_bot_reply() {
    // テスト項目: メッセージを投稿すると Bot の返信が続けて記録される
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = post_message(&client, &server, "General", "alice", "hello there").await;

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["posted"]["sender"], "alice");
    assert_eq!(body["posted"]["text"], "hello there");
    assert_eq!(body["reply"]["sender"], "Bot");
    assert!(
        body["reply"]["text"]
            .as_str()
            .unwrap()
            .starts_with("Hello! 👋 I'm the room bot.")
    );

    let messages = get_messages(&client, &server, "General").await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["sender"], "alice");
    assert_eq!(messages[1]["sender"], "Bot");
}

#[tokio::test]
async fn test_post_message_blank_sender_uses_placeholder() {
    // テスト項目: 表示名を省略すると "Guest" として記録される
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/api/rooms/General/messages", server.base_url()))
        .json(&json!({"text": "thanks"}))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["posted"]["sender"], "Guest");
}

#[tokio::test]
async fn test_post_blank_message_is_no_op() {
    // テスト項目: 空白のみのメッセージは記録されず、Bot も返信しない
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = post_message(&client, &server, "General", "alice", "   ").await;

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["posted"].is_null());
    assert!(body["reply"].is_null());
    assert!(get_messages(&client, &server, "General").await.is_empty());
}

#[tokio::test]
async fn test_post_too_long_message_is_rejected() {
    // テスト項目: 長すぎるメッセージは 400 で拒否される
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let text = "a".repeat(10001);

    // when (操作):
    let response = post_message(&client, &server, "General", "alice", &text).await;

    // then (期待する結果):
    assert_eq!(response.status(), 400);
    assert!(get_messages(&client, &server, "General").await.is_empty());
}

#[tokio::test]
async fn test_messages_of_unknown_room_are_empty() {
    // テスト項目: 存在しないルームのメッセージ一覧は空配列になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let messages = get_messages(&client, &server, "nowhere").await;

    // then (期待する結果):
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_messages_limit_query() {
    // テスト項目: limit クエリで古い順の先頭 N 件だけが返る
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    post_message(&client, &server, "General", "alice", "hello").await;
    post_message(&client, &server, "General", "alice", "thanks").await;

    // when (操作):
    let response = client
        .get(format!(
            "{}/api/rooms/General/messages?limit=3",
            server.base_url()
        ))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["text"], "hello");
    assert_eq!(messages[2]["text"], "thanks");
}

#[tokio::test]
async fn test_clear_room_messages() {
    // テスト項目: ルームのメッセージを削除しても、ルーム自体は残る
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    post_message(&client, &server, "lobby", "alice", "hello").await;

    // when (操作):
    let response = client
        .delete(format!("{}/api/rooms/lobby/messages", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 204);
    assert!(get_messages(&client, &server, "lobby").await.is_empty());

    let rooms: serde_json::Value = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(rooms.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reset_store() {
    // テスト項目: リセット後は "General" ルームだけが残り、メッセージは空になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    post_message(&client, &server, "lobby", "alice", "hello").await;
    post_message(&client, &server, "General", "bob", "hi").await;

    // when (操作):
    let response = client
        .post(format!("{}/api/reset", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 204);

    let rooms: serde_json::Value = client
        .get(format!("{}/api/rooms", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["name"], "General");
    assert!(get_messages(&client, &server, "General").await.is_empty());
}

#[tokio::test]
async fn test_export_room_transcript() {
    // テスト項目: エクスポートはダウンロード用ヘッダ付きで "timestamp | sender: text" 行を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    post_message(&client, &server, "lobby", "alice", "hello").await;

    // when (操作):
    let response = client
        .get(format!("{}/api/rooms/lobby/export", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let disposition = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .expect("Missing Content-Disposition")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(disposition, r#"attachment; filename="lobby_messages.txt""#);

    let body = response.text().await.expect("Failed to read body");
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" | alice: hello"));
    assert!(lines[1].contains(" | Bot: Hello! 👋 I'm the room bot."));
    assert_eq!(lines[0].split(" | ").next().unwrap().len(), 19);
}

#[tokio::test]
async fn test_room_page_escapes_html() {
    // テスト項目: HTML ビューではメッセージ本文がエスケープされる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    post_message(&client, &server, "General", "mallory", "<b>bold</b>").await;

    // when (操作):
    let response = client
        .get(format!("{}/rooms/General?viewer=mallory", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let page = response.text().await.expect("Failed to read body");
    assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!page.contains("<b>bold</b>"));
    assert!(page.contains("bubble-user"));
}

#[tokio::test]
async fn test_index_redirects_to_default_room() {
    // テスト項目: "/" は "/rooms/General" へリダイレクトする
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    // when (操作):
    let response = client
        .get(format!("{}/", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(reqwest::header::LOCATION).unwrap(),
        "/rooms/General"
    );
}

#[tokio::test]
async fn test_export_room_with_unsafe_name_characters() {
    // テスト項目: 制御文字や引用符を含むルーム名でもエクスポートでき、ファイル名は安全な形になる
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let cases = [
        ("line\u{1}x", "line%01x", r#"attachment; filename="line_x_messages.txt""#),
        (
            r#"say "hi""#,
            "say%20%22hi%22",
            r#"attachment; filename="say _hi__messages.txt""#,
        ),
    ];

    for (name, encoded, expected_disposition) in cases {
        let response = client
            .post(format!("{}/api/rooms", server.base_url()))
            .json(&json!({"name": name}))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200);

        // when (操作):
        let response = client
            .get(format!("{}/api/rooms/{}/export", server.base_url(), encoded))
            .send()
            .await
            .expect("Failed to send request");

        // then (期待する結果):
        assert_eq!(response.status(), 200);
        let disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .expect("Missing Content-Disposition")
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(disposition, expected_disposition);
        assert_eq!(response.text().await.expect("Failed to read body"), "");
    }
}
