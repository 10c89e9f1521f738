//! Core domain models for the chat application.

use serde::{Deserialize, Serialize};

use super::value_object::{MessageText, RoomName, SenderName, Timestamp};

/// Represents a named chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room name (unique)
    pub name: RoomName,
    /// Timestamp when the room was first referenced
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new room with the given name and creation timestamp
    pub fn new(name: RoomName, created_at: Timestamp) -> Self {
        Self { name, created_at }
    }
}

/// Represents a chat message in the domain model
///
/// Messages are immutable once appended to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Room the message belongs to
    pub room: RoomName,
    /// Sender's display name
    pub sender: SenderName,
    /// Message body
    pub text: MessageText,
    /// Timestamp when the message was appended
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(room: RoomName, sender: SenderName, text: MessageText, timestamp: Timestamp) -> Self {
        Self {
            room,
            sender,
            text,
            timestamp,
        }
    }

    /// Whether the message was written by the responder
    pub fn is_from_bot(&self) -> bool {
        self.sender == SenderName::bot()
    }
}
