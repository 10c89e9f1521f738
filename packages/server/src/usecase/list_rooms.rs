//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{MessageStore, Room};

use super::error::UseCaseError;

/// ルーム一覧を作成順に取得するユースケース
pub struct ListRoomsUseCase {
    store: Arc<dyn MessageStore>,
}

impl ListRoomsUseCase {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<Room>, UseCaseError> {
        Ok(self.store.list_rooms().await?)
    }
}
