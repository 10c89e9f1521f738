//! UseCase: ルーム参加（作成）処理

use std::sync::Arc;

use crate::domain::{MessageStore, Room};

use super::{error::UseCaseError, input::optional_room_name};

/// ルームに参加する（存在しなければ作成する）ユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Room))` - 参加したルーム
    /// * `Ok(None)` - ルーム名が空白のため何もしなかった
    /// * `Err(UseCaseError)` - 入力が長すぎる、またはストレージの失敗
    pub async fn execute(&self, raw_name: &str) -> Result<Option<Room>, UseCaseError> {
        let Some(name) = optional_room_name(raw_name)? else {
            return Ok(None);
        };

        let room = self.store.ensure_room(&name).await?;
        tracing::info!("Room '{}' joined", room.name);
        Ok(Some(room))
    }
}
