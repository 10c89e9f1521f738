//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 本文のトリム、送信者名の既定値、空メッセージの無視
//!
//! ### なぜこのテストが必要か
//! - 空メッセージはエラーではなく「何もしない」扱いであることを保証する
//! - ルームのメッセージ履歴に正しく追加されることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信
//! - エッジケース：空白のみの本文、空白の送信者名、空白のルーム名
//! - 異常系：長すぎる本文、ストレージの失敗

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageStore, MessageText, SenderName};

use super::{error::UseCaseError, input::optional_room_name};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `raw_room` - 送信先のルーム名
    /// * `raw_sender` - 送信者の表示名（空白なら "Guest"）
    /// * `raw_text` - 本文（前後の空白は除去される）
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ChatMessage))` - 保存したメッセージ
    /// * `Ok(None)` - 本文またはルーム名が空白のため何もしなかった
    /// * `Err(UseCaseError)` - 送信失敗
    pub async fn execute(
        &self,
        raw_room: &str,
        raw_sender: &str,
        raw_text: &str,
    ) -> Result<Option<ChatMessage>, UseCaseError> {
        let Some(room) = optional_room_name(raw_room)? else {
            return Ok(None);
        };
        let text = raw_text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let text = MessageText::new(text)?;
        let sender = SenderName::new(raw_sender)?;

        let message = self.store.append(&room, &sender, text.as_str()).await?;
        if let Some(message) = &message {
            tracing::info!("Message from '{}' appended to '{}'", message.sender, room);
        }
        Ok(message)
    }
}
