//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod responder;
pub mod transcript;
pub mod value_object;

pub use entity::{ChatMessage, Room};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::MessageStore;
pub use responder::Responder;
pub use transcript::{Transcript, render_transcript};
pub use value_object::{
    BOT_SENDER_NAME, DEFAULT_ROOM_NAME, MessageText, PLACEHOLDER_SENDER_NAME, RoomName,
    SenderName, Timestamp,
};

#[cfg(test)]
pub use repository::MockMessageStore;
