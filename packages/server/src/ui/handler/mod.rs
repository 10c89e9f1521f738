//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{
    clear_messages, export_room, get_messages, health_check, index, join_room, list_rooms,
    post_message, reset_store, room_page,
};

// Re-export WebSocket handlers
pub use websocket::room_events_handler;
