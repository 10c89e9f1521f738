//! WebSocket push DTOs for the chat application.

use serde::{Deserialize, Serialize};

use super::http::MessageDto;

/// Event pushed to clients watching a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A message was appended to the room
    Message { message: MessageDto },
    /// The bot is about to reply
    BotTyping { room: String },
    /// All messages of the room were removed
    RoomCleared { room: String },
    /// The whole store was wiped
    StoreReset,
}
