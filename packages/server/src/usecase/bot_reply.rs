//! UseCase: Bot の返信処理
//!
//! ルームの最新メッセージがユーザー本人のものであれば、Responder の返答を
//! "Bot" として追記します。

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageStore, Responder, RoomName, SenderName};

use super::error::UseCaseError;

/// Bot 返信のユースケース
pub struct BotReplyUseCase {
    store: Arc<dyn MessageStore>,
    responder: Arc<Responder>,
}

impl BotReplyUseCase {
    /// 新しい BotReplyUseCase を作成
    pub fn new(store: Arc<dyn MessageStore>, responder: Arc<Responder>) -> Self {
        Self { store, responder }
    }

    /// Bot 返信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ChatMessage))` - 追記した Bot の返信
    /// * `Ok(None)` - 最新メッセージが `user` のものではないため返信しなかった
    pub async fn execute(
        &self,
        room: &RoomName,
        user: &SenderName,
    ) -> Result<Option<ChatMessage>, UseCaseError> {
        let Some(last) = self.store.last_message(room).await? else {
            return Ok(None);
        };
        if &last.sender != user {
            tracing::debug!(
                "Latest message in '{}' is from '{}', not '{}'; skipping reply",
                room,
                last.sender,
                user
            );
            return Ok(None);
        }

        let reply = self.responder.respond(last.text.as_str());
        let message = self.store.append(room, &SenderName::bot(), &reply).await?;
        tracing::info!("Bot replied in '{}'", room);
        Ok(message)
    }
}
