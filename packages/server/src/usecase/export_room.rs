//! UseCase: ルームのテキストエクスポート

use std::sync::Arc;

use crate::domain::{MessageStore, Transcript};

use super::{error::UseCaseError, input::optional_room_name};

/// Maximum number of messages written to an export
pub const EXPORT_MESSAGE_LIMIT: usize = 5000;

/// ルームのメッセージを `timestamp | sender: text` 形式のテキストにするユースケース
pub struct ExportRoomUseCase {
    store: Arc<dyn MessageStore>,
}

impl ExportRoomUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// 空白のルーム名なら `None`
    pub async fn execute(&self, raw_room: &str) -> Result<Option<Transcript>, UseCaseError> {
        let Some(room) = optional_room_name(raw_room)? else {
            return Ok(None);
        };
        let messages = self.store.read(&room, EXPORT_MESSAGE_LIMIT).await?;
        Ok(Some(Transcript::new(&room, &messages)))
    }
}
