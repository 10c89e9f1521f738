//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    domain::{DEFAULT_ROOM_NAME, RoomName},
    infrastructure::dto::http::{
        JoinRoomRequestDto, MessageDto, MessagesQuery, RoomDto, RoomPageQuery,
        SendMessageRequestDto, SendMessageResponseDto,
    },
    ui::{
        conversation::post_and_reply,
        error::ApiError,
        event::RoomEvent,
        state::AppState,
        view::{PAGE_MESSAGE_LIMIT, render_room_page},
    },
    usecase::{
        ClearRoomUseCase, ExportRoomUseCase, FetchMessagesUseCase, JoinRoomUseCase,
        ListRoomsUseCase, ResetStoreUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Landing page: the default room
pub async fn index() -> Redirect {
    Redirect::to(&format!("/rooms/{DEFAULT_ROOM_NAME}"))
}

/// Get list of rooms in creation order
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Result<Json<Vec<RoomDto>>, ApiError> {
    let rooms = ListRoomsUseCase::new(state.store.clone()).execute().await?;
    Ok(Json(rooms.iter().map(RoomDto::from).collect()))
}

/// Join (create on first use) a room
///
/// A blank name is a silent no-op answered with 204.
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JoinRoomRequestDto>,
) -> Result<Response, ApiError> {
    let room = JoinRoomUseCase::new(state.store.clone())
        .execute(&body.name)
        .await?;

    Ok(match room {
        Some(room) => Json(RoomDto::from(&room)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Get the messages of a room, oldest first
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let limit = query.limit.unwrap_or(state.history_limit);
    let messages = FetchMessagesUseCase::new(state.store.clone())
        .execute(&room, limit)
        .await?;
    Ok(Json(messages.iter().map(MessageDto::from).collect()))
}

/// Post a message and wait for the bot reply
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
    Json(body): Json<SendMessageRequestDto>,
) -> Result<Json<SendMessageResponseDto>, ApiError> {
    let response = post_and_reply(&state, &room, &body.sender, &body.text).await?;
    Ok(Json(response))
}

/// Remove every message of a room
pub async fn clear_messages(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Some(room) = ClearRoomUseCase::new(state.store.clone())
        .execute(&room)
        .await?
    {
        state.publish(RoomEvent::RoomCleared(room));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Download the room transcript as plain text
pub async fn export_room(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Response, ApiError> {
    let Some(transcript) = ExportRoomUseCase::new(state.store.clone())
        .execute(&room)
        .await?
    else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", transcript.file_name),
        ),
    ];
    Ok((headers, transcript.body).into_response())
}

/// Wipe every room and message, keeping only the default room
pub async fn reset_store(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    ResetStoreUseCase::new(state.store.clone()).execute().await?;
    state.publish(RoomEvent::StoreReset);
    Ok(StatusCode::NO_CONTENT)
}

/// HTML view of a room
pub async fn room_page(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
    Query(query): Query<RoomPageQuery>,
) -> Result<Response, ApiError> {
    let Ok(room) = RoomName::new(room) else {
        return Ok(Redirect::to("/").into_response());
    };

    let room = JoinRoomUseCase::new(state.store.clone())
        .execute(room.as_str())
        .await?
        .map(|room| room.name)
        .unwrap_or(room);
    let rooms = ListRoomsUseCase::new(state.store.clone()).execute().await?;
    let messages = FetchMessagesUseCase::new(state.store.clone())
        .execute(room.as_str(), PAGE_MESSAGE_LIMIT)
        .await?;

    Ok(Html(render_room_page(&room, &query.viewer, &rooms, &messages)).into_response())
}
