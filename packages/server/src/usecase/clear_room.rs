//! UseCase: ルームのメッセージ削除

use std::sync::Arc;

use crate::domain::{MessageStore, RoomName};

use super::{error::UseCaseError, input::optional_room_name};

/// ルームのメッセージを全て削除するユースケース（ルーム自体は残る）
pub struct ClearRoomUseCase {
    store: Arc<dyn MessageStore>,
}

impl ClearRoomUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// 削除したルーム名を返す。空白のルーム名なら何もせず `None`
    pub async fn execute(&self, raw_room: &str) -> Result<Option<RoomName>, UseCaseError> {
        let Some(room) = optional_room_name(raw_room)? else {
            return Ok(None);
        };
        self.store.clear(&room).await?;
        tracing::info!("Room '{}' cleared", room);
        Ok(Some(room))
    }
}
