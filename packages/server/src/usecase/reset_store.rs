//! UseCase: ストア全体のリセット

use std::sync::Arc;

use crate::domain::MessageStore;

use super::error::UseCaseError;

/// 全てのルームとメッセージを削除し、既定のルームのみを再作成するユースケース
pub struct ResetStoreUseCase {
    store: Arc<dyn MessageStore>,
}

impl ResetStoreUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<(), UseCaseError> {
        self.store.wipe().await?;
        tracing::info!("Store wiped");
        Ok(())
    }
}
