//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomName validation error
    #[error("RoomName cannot be empty")]
    RoomNameEmpty,

    /// RoomName too long error
    #[error("RoomName cannot exceed {max} characters (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },

    /// SenderName too long error
    #[error("SenderName cannot exceed {max} characters (got {actual})")]
    SenderNameTooLong { max: usize, actual: usize },

    /// MessageText validation error
    #[error("MessageText cannot be empty or whitespace only")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },

    /// Timestamp invalid format error
    #[error("Timestamp must be formatted as YYYY-MM-DD HH:MM:SS (got: {0})")]
    TimestampInvalidFormat(String),
}

/// Errors raised by a message store backend.
///
/// Storage failures are never recoverable in this domain; the current action
/// is aborted and the error is reported upwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backend failed to read or write
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// A persisted row could not be turned back into a domain value
    #[error("corrupted record in storage: {0}")]
    CorruptedRecord(String),
}
