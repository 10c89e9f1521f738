//! UseCase: メッセージ履歴の取得

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageStore};

use super::{error::UseCaseError, input::optional_room_name};

/// ルームのメッセージを古い順に取得するユースケース
pub struct FetchMessagesUseCase {
    store: Arc<dyn MessageStore>,
}

impl FetchMessagesUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// 最大 `limit` 件を古い順に返す。未知・空白のルームは空の結果になる
    pub async fn execute(&self, raw_room: &str, limit: usize) -> Result<Vec<ChatMessage>, UseCaseError> {
        let Some(room) = optional_room_name(raw_room)? else {
            return Ok(Vec::new());
        };
        Ok(self.store.read(&room, limit).await?)
    }
}
