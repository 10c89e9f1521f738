//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

/// Build the application router over the given state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/rooms/{room}", get(handler::room_page))
        .route("/api/health", get(handler::health_check))
        .route("/api/rooms", get(handler::list_rooms).post(handler::join_room))
        .route(
            "/api/rooms/{room}/messages",
            get(handler::get_messages)
                .post(handler::post_message)
                .delete(handler::clear_messages),
        )
        .route("/api/rooms/{room}/export", get(handler::export_room))
        .route("/api/rooms/{room}/ws", get(handler::room_events_handler))
        .route("/api/reset", post(handler::reset_store))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
