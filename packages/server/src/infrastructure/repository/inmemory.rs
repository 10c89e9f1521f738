//! InMemory MessageStore 実装
//!
//! ドメイン層が定義する MessageStore trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセスを再起動すると内容は失われます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, MessageStore, MessageText, RepositoryError, Room, RoomName, SenderName,
    Timestamp,
};

/// Rooms in creation order plus the message log of each room
#[derive(Debug)]
struct StoreState {
    rooms: Vec<Room>,
    messages: HashMap<RoomName, Vec<ChatMessage>>,
}

impl StoreState {
    fn seeded() -> Self {
        let mut state = Self {
            rooms: Vec::new(),
            messages: HashMap::new(),
        };
        state.ensure_room(&RoomName::default_room(), Timestamp::now());
        state
    }

    fn ensure_room(&mut self, name: &RoomName, now: Timestamp) -> Room {
        if let Some(room) = self.rooms.iter().find(|room| &room.name == name) {
            return room.clone();
        }
        let room = Room::new(name.clone(), now);
        self.rooms.push(room.clone());
        room
    }
}

/// インメモリ MessageStore 実装
///
/// 全ての操作は単一の Mutex の下で行われるため、追記は常にアトミックです。
#[derive(Debug)]
pub struct InMemoryMessageStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMessageStore {
    /// 既定のルーム（General）を持つ新しい InMemoryMessageStore を作成
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::seeded()),
        }
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn ensure_room(&self, room: &RoomName) -> Result<Room, RepositoryError> {
        let mut state = self.state.lock().await;
        Ok(state.ensure_room(room, Timestamp::now()))
    }

    async fn append(
        &self,
        room: &RoomName,
        sender: &SenderName,
        text: &str,
    ) -> Result<Option<ChatMessage>, RepositoryError> {
        let Ok(text) = MessageText::new(text) else {
            return Ok(None);
        };

        let now = Timestamp::now();
        let message = ChatMessage::new(room.clone(), sender.clone(), text, now);

        let mut state = self.state.lock().await;
        state.ensure_room(room, now);
        state
            .messages
            .entry(room.clone())
            .or_default()
            .push(message.clone());

        Ok(Some(message))
    }

    async fn read(&self, room: &RoomName, limit: usize) -> Result<Vec<ChatMessage>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .messages
            .get(room)
            .map(|messages| messages.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn last_message(&self, room: &RoomName) -> Result<Option<ChatMessage>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .messages
            .get(room)
            .and_then(|messages| messages.last().cloned()))
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.rooms.clone())
    }

    async fn clear(&self, room: &RoomName) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        state.messages.remove(room);
        Ok(())
    }

    async fn wipe(&self) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        *state = StoreState::seeded();
        Ok(())
    }
}
