//! Background task printing the live events of one room.

use futures_util::StreamExt;
use roomchat_server::infrastructure::dto::{http::MessageDto, websocket::ServerEvent};
use roomchat_shared::time::{CLOCK_FORMAT, parse_timestamp};
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::error::ClientError;

/// Connect to the room's WebSocket and print events until it closes
pub async fn spawn_watcher(ws_url: String) -> Result<JoinHandle<()>, ClientError> {
    let (mut stream, _) = connect_async(ws_url.as_str()).await?;
    tracing::debug!("Watching {}", ws_url);

    let handle = tokio::spawn(async move {
        while let Some(msg) = stream.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error: {}", e);
                    break;
                }
            };
            match msg {
                Message::Text(text) => match serde_json::from_str::<ServerEvent>(&text) {
                    Ok(event) => println!("{}", format_event(&event)),
                    Err(e) => tracing::warn!("Unexpected event payload: {}", e),
                },
                Message::Close(_) => break,
                _ => {}
            }
        }
        tracing::debug!("Stopped watching {}", ws_url);
    });
    Ok(handle)
}

/// One-line rendering of a pushed event
pub fn format_event(event: &ServerEvent) -> String {
    match event {
        ServerEvent::Message { message } => format_message(message),
        ServerEvent::BotTyping { .. } => "Bot is typing...".to_string(),
        ServerEvent::RoomCleared { room } => format!("-- messages in {room} were cleared --"),
        ServerEvent::StoreReset => "-- all rooms were reset --".to_string(),
    }
}

/// `[HH:MM:SS] sender: text`
pub fn format_message(message: &MessageDto) -> String {
    let clock = parse_timestamp(&message.timestamp)
        .map(|ts| ts.format(CLOCK_FORMAT).to_string())
        .unwrap_or_else(|_| message.timestamp.clone());
    format!("[{}] {}: {}", clock, message.sender, message.text)
}
