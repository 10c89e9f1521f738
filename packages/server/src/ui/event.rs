//! Room events pushed to WebSocket watchers.

use crate::{
    domain::{ChatMessage, RoomName},
    infrastructure::dto::{http::MessageDto, websocket::ServerEvent},
};

/// Something that happened in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    MessagePosted(ChatMessage),
    BotTyping(RoomName),
    RoomCleared(RoomName),
    StoreReset,
}

impl RoomEvent {
    /// Whether a watcher of `room` should receive this event
    pub fn concerns(&self, room: &RoomName) -> bool {
        match self {
            Self::MessagePosted(message) => &message.room == room,
            Self::BotTyping(target) | Self::RoomCleared(target) => target == room,
            Self::StoreReset => true,
        }
    }

    pub fn to_dto(&self) -> ServerEvent {
        match self {
            Self::MessagePosted(message) => ServerEvent::Message {
                message: MessageDto::from(message),
            },
            Self::BotTyping(room) => ServerEvent::BotTyping {
                room: room.as_str().to_string(),
            },
            Self::RoomCleared(room) => ServerEvent::RoomCleared {
                room: room.as_str().to_string(),
            },
            Self::StoreReset => ServerEvent::StoreReset,
        }
    }
}
