//! HTTP API request/response DTOs for the chat application.

use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, Room};

/// Room summary for list and join endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    pub name: String,
    pub created_at: String, // %Y-%m-%d %H:%M:%S
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.as_str().to_string(),
            created_at: room.created_at.to_string(),
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub room: String,
    pub sender: String,
    pub text: String,
    pub timestamp: String, // %Y-%m-%d %H:%M:%S
}

impl From<&ChatMessage> for MessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            room: message.room.as_str().to_string(),
            sender: message.sender.as_str().to_string(),
            text: message.text.as_str().to_string(),
            timestamp: message.timestamp.to_string(),
        }
    }
}

/// Body of `POST /api/rooms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRoomRequestDto {
    pub name: String,
}

/// Body of `POST /api/rooms/{room}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequestDto {
    #[serde(default)]
    pub sender: String,
    pub text: String,
}

/// Response of `POST /api/rooms/{room}/messages`
///
/// `posted` is null when the text was blank; `reply` is null when the bot
/// stayed silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponseDto {
    pub posted: Option<MessageDto>,
    pub reply: Option<MessageDto>,
}

/// Query of `GET /api/rooms/{room}/messages`
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<usize>,
}

/// Query of `GET /rooms/{room}`
#[derive(Debug, Clone, Deserialize)]
pub struct RoomPageQuery {
    #[serde(default)]
    pub viewer: String,
}
