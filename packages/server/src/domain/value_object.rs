//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use roomchat_shared::time::{format_timestamp, now_local, parse_timestamp};

use super::error::ValueObjectError;

/// Name of the room every fresh or wiped store starts with
pub const DEFAULT_ROOM_NAME: &str = "General";

/// Sender name reserved for responder replies
pub const BOT_SENDER_NAME: &str = "Bot";

/// Sender name used when the user leaves the display name blank
pub const PLACEHOLDER_SENDER_NAME: &str = "Guest";

const ROOM_NAME_MAX_LEN: usize = 100;
const SENDER_NAME_MAX_LEN: usize = 100;
const MESSAGE_TEXT_MAX_LEN: usize = 10000;

/// Room name value object.
///
/// Rooms are identified by a human-chosen name. Surrounding whitespace is
/// stripped; the remaining name must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    /// Create a new RoomName.
    ///
    /// # Arguments
    ///
    /// * `name` - The room name as typed by the user
    ///
    /// # Returns
    ///
    /// A Result containing the RoomName or an error if validation fails
    pub fn new(name: impl Into<String>) -> Result<Self, ValueObjectError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::RoomNameEmpty);
        }
        let len = trimmed.chars().count();
        if len > ROOM_NAME_MAX_LEN {
            return Err(ValueObjectError::RoomNameTooLong {
                max: ROOM_NAME_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The room every store is seeded with.
    pub fn default_room() -> Self {
        Self(DEFAULT_ROOM_NAME.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sender display name value object.
///
/// Blank names fall back to [`PLACEHOLDER_SENDER_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderName(String);

impl SenderName {
    /// Create a new SenderName, substituting the placeholder for blank input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueObjectError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(Self::placeholder());
        }
        let len = trimmed.chars().count();
        if len > SENDER_NAME_MAX_LEN {
            return Err(ValueObjectError::SenderNameTooLong {
                max: SENDER_NAME_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The reserved sender name of the responder.
    pub fn bot() -> Self {
        Self(BOT_SENDER_NAME.to_string())
    }

    /// The name used for users who never picked one.
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_SENDER_NAME.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SenderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text value object.
///
/// The text is kept exactly as given; only whitespace-only input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Arguments
    ///
    /// * `text` - The message body
    ///
    /// # Returns
    ///
    /// A Result containing the MessageText or an error if validation fails
    pub fn new(text: impl Into<String>) -> Result<Self, ValueObjectError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        let len = text.chars().count();
        if len > MESSAGE_TEXT_MAX_LEN {
            return Err(ValueObjectError::MessageTextTooLong {
                max: MESSAGE_TEXT_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(text))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Local wall-clock date-time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// The current local wall-clock time.
    pub fn now() -> Self {
        Self(now_local())
    }

    /// Parse a timestamp written by the `Display` impl.
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        parse_timestamp(value)
            .map(Self)
            .map_err(|_| ValueObjectError::TimestampInvalidFormat(value.to_string()))
    }

    /// Get the inner date-time value.
    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_timestamp(&self.0))
    }
}
