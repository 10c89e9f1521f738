//! Parsing of raw user input shared by the use cases.
//!
//! Blank input is never an error: it maps to `None` and the caller turns it
//! into a silent no-op.

use crate::domain::{RoomName, ValueObjectError};

use super::error::UseCaseError;

/// Parse a room name typed by the user; blank names yield `None`.
pub(crate) fn optional_room_name(raw: &str) -> Result<Option<RoomName>, UseCaseError> {
    match RoomName::new(raw) {
        Ok(name) => Ok(Some(name)),
        Err(ValueObjectError::RoomNameEmpty) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
