//! Repository trait for chat message storage.
//!
//! The domain layer owns this abstraction; concrete backends live in the
//! infrastructure layer (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{ChatMessage, Room},
    error::RepositoryError,
    value_object::{RoomName, SenderName},
};

/// Append-only log of chat messages, keyed by room name.
///
/// Implementations must keep every append atomic: a message is either fully
/// recorded after all earlier messages of its room, or not recorded at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Create the room if it does not exist yet; no-op otherwise.
    async fn ensure_room(&self, room: &RoomName) -> Result<Room, RepositoryError>;

    /// Append a message to the end of the room, creating the room if needed.
    ///
    /// Text that is not a valid [`MessageText`](super::value_object::MessageText)
    /// is silently ignored and yields `Ok(None)`: empty or whitespace-only
    /// text, and text over the 10 000 character limit. Callers that must report
    /// over-length input validate it first.
    async fn append(
        &self,
        room: &RoomName,
        sender: &SenderName,
        text: &str,
    ) -> Result<Option<ChatMessage>, RepositoryError>;

    /// Oldest-first messages of the room, at most `limit` of them.
    ///
    /// Unknown rooms yield an empty vector.
    async fn read(&self, room: &RoomName, limit: usize) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// The most recently appended message of the room.
    async fn last_message(&self, room: &RoomName) -> Result<Option<ChatMessage>, RepositoryError>;

    /// All rooms in creation order.
    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError>;

    /// Remove every message of the room; the room itself survives.
    async fn clear(&self, room: &RoomName) -> Result<(), RepositoryError>;

    /// Remove all rooms and messages, then recreate the default room.
    async fn wipe(&self) -> Result<(), RepositoryError>;
}
