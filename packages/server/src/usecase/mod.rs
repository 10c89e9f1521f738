//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod bot_reply;
pub mod clear_room;
pub mod error;
pub mod export_room;
pub mod fetch_messages;
mod input;
pub mod join_room;
pub mod list_rooms;
pub mod reset_store;
pub mod send_message;

pub use bot_reply::BotReplyUseCase;
pub use clear_room::ClearRoomUseCase;
pub use error::UseCaseError;
pub use export_room::{EXPORT_MESSAGE_LIMIT, ExportRoomUseCase};
pub use fetch_messages::FetchMessagesUseCase;
pub use join_room::JoinRoomUseCase;
pub use list_rooms::ListRoomsUseCase;
pub use reset_store::ResetStoreUseCase;
pub use send_message::SendMessageUseCase;
