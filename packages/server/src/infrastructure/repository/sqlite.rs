//! SQLite MessageStore 実装
//!
//! rooms / messages の 2 テーブルにメッセージを永続化します。
//! ルーム内のメッセージ順序は messages テーブルの rowid（物理的な挿入順）で決まります。

use async_trait::async_trait;
use sqlx::{
    SqliteConnection, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use uuid::Uuid;

use crate::domain::{
    ChatMessage, MessageStore, MessageText, RepositoryError, Room, RoomName, SenderName,
    Timestamp,
};

const CREATE_ROOMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id TEXT PRIMARY KEY,
        room_name TEXT NOT NULL,
        sender TEXT NOT NULL,
        text TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
"#;

type MessageRow = (String, String, String, String);

/// SQLite MessageStore 実装
pub struct SqliteMessageStore {
    pool: SqlitePool,
}

impl SqliteMessageStore {
    /// データベースに接続し、スキーマと既定のルームを用意する
    ///
    /// The database file is created when missing. Tests open `sqlite::memory:`
    /// with `max_connections = 1` so every query runs on the same connection
    /// and the pool never closes the database between queries.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let options = database_url
            .parse::<SqliteConnectOptions>()
            .map_err(backend)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(backend)?;

        Self::from_pool(pool).await
    }

    /// 既存のコネクションプールから作成する
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        sqlx::query(CREATE_ROOMS_TABLE)
            .execute(&pool)
            .await
            .map_err(backend)?;
        sqlx::query(CREATE_MESSAGES_TABLE)
            .execute(&pool)
            .await
            .map_err(backend)?;

        let store = Self { pool };
        store.ensure_room(&RoomName::default_room()).await?;
        Ok(store)
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn ensure_room(&self, room: &RoomName) -> Result<Room, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(backend)?;
        insert_room_if_missing(&mut conn, room, Timestamp::now())
            .await
            .map_err(backend)?;

        let (name, created_at): (String, String) =
            sqlx::query_as("SELECT name, created_at FROM rooms WHERE name = ?1")
                .bind(room.as_str())
                .fetch_one(&mut *conn)
                .await
                .map_err(backend)?;

        row_to_room(name, created_at)
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

        let mut tx = self.pool.begin().await.map_err(backend)?;
        insert_room_if_missing(&mut tx, room, now)
            .await
            .map_err(backend)?;
        sqlx::query(
            r#"
            INSERT INTO messages (id, room_name, sender, text, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(room.as_str())
        .bind(sender.as_str())
        .bind(text.as_str())
        .bind(now.to_string())
        .execute(&mut *tx)
        .await
        .map_err(backend)?;
        tx.commit().await.map_err(backend)?;

        Ok(Some(ChatMessage::new(room.clone(), sender.clone(), text, now)))
    }

    async fn read(&self, room: &RoomName, limit: usize) -> Result<Vec<ChatMessage>, RepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT room_name, sender, text, timestamp FROM messages
            WHERE room_name = ?1
            ORDER BY rowid ASC
            LIMIT ?2
            "#,
        )
        .bind(room.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.into_iter().map(row_to_message).collect()
    }

    async fn last_message(&self, room: &RoomName) -> Result<Option<ChatMessage>, RepositoryError> {
        let row: Option<MessageRow> = sqlx::query_as(
            r#"
            SELECT room_name, sender, text, timestamp FROM messages
            WHERE room_name = ?1
            ORDER BY rowid DESC
            LIMIT 1
            "#,
        )
        .bind(room.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(row_to_message).transpose()
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT name, created_at FROM rooms ORDER BY rowid ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(backend)?;

        rows.into_iter()
            .map(|(name, created_at)| row_to_room(name, created_at))
            .collect()
    }

    async fn clear(&self, room: &RoomName) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM messages WHERE room_name = ?1")
            .bind(room.as_str())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn wipe(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(backend)?;
        sqlx::query("DELETE FROM messages")
            .execute(&mut *tx)
            .await
            .map_err(backend)?;
        sqlx::query("DELETE FROM rooms")
            .execute(&mut *tx)
            .await
            .map_err(backend)?;
        insert_room_if_missing(&mut tx, &RoomName::default_room(), Timestamp::now())
            .await
            .map_err(backend)?;
        tx.commit().await.map_err(backend)?;
        Ok(())
    }
}

async fn insert_room_if_missing(
    conn: &mut SqliteConnection,
    room: &RoomName,
    now: Timestamp,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO rooms (id, name, created_at) VALUES (?1, ?2, ?3)")
        .bind(Uuid::new_v4().to_string())
        .bind(room.as_str())
        .bind(now.to_string())
        .execute(&mut *conn)
        .await?;
    Ok(())
}

fn backend(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Backend(err.to_string())
}

fn corrupted(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::CorruptedRecord(err.to_string())
}

fn row_to_room(name: String, created_at: String) -> Result<Room, RepositoryError> {
    Ok(Room::new(
        RoomName::new(name).map_err(corrupted)?,
        Timestamp::parse(&created_at).map_err(corrupted)?,
    ))
}

fn row_to_message(
    (room_name, sender, text, timestamp): MessageRow,
) -> Result<ChatMessage, RepositoryError> {
    Ok(ChatMessage::new(
        RoomName::new(room_name).map_err(corrupted)?,
        SenderName::new(sender).map_err(corrupted)?,
        MessageText::new(text).map_err(corrupted)?,
        Timestamp::parse(&timestamp).map_err(corrupted)?,
    ))
}
