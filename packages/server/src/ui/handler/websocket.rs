//! WebSocket connection handlers.
//!
//! Each connection watches one room. Events of that room are pushed to the
//! client; text frames received from the client are posted as chat messages.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::{
    domain::RoomName,
    infrastructure::dto::http::SendMessageRequestDto,
    ui::{conversation::post_and_reply, event::RoomEvent, state::AppState},
};

pub async fn room_events_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    // Convert String -> RoomName (Domain Model)
    let room = match RoomName::new(room.clone()) {
        Ok(room) => room,
        Err(_) => {
            tracing::warn!("Invalid room name for watcher: '{}'", room);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let events = state.events.subscribe();
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room, events)))
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    room: RoomName,
    mut events: broadcast::Receiver<RoomEvent>,
) {
    let (mut sender, mut receiver) = socket.split();
    tracing::debug!("Watcher connected to '{}'", room);

    // Spawn a task to push room events to this client
    let watched_room = room.clone();
    let mut send_task = tokio::spawn(async move {
        loop {
            let event = match events.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Watcher of '{}' lagged behind, {} events skipped",
                        watched_room,
                        skipped
                    );
                    continue;
                }
                Err(RecvError::Closed) => break,
            };
            if !event.concerns(&watched_room) {
                continue;
            }

            let json = match serde_json::to_string(&event.to_dto()) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize room event: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Spawn a task to receive messages from this client
    let posting_room = room.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let request = match serde_json::from_str::<SendMessageRequestDto>(&text) {
                        Ok(request) => request,
                        Err(e) => {
                            tracing::warn!("Failed to parse message as JSON: {}", e);
                            continue;
                        }
                    };
                    if let Err(e) = post_and_reply(
                        &state,
                        posting_room.as_str(),
                        &request.sender,
                        &request.text,
                    )
                    .await
                    {
                        tracing::warn!("Failed to post message from watcher: {}", e);
                    }
                }
                Message::Close(_) => {
                    tracing::debug!("Watcher of '{}' requested close", posting_room);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    tracing::debug!("Watcher disconnected from '{}'", room);
}
