//! Server state shared by every handler.

use std::{sync::Arc, time::Duration};

use tokio::sync::broadcast;

use crate::{
    config::ServerConfig,
    domain::{MessageStore, Responder},
};

use super::event::RoomEvent;

/// Capacity of the room event channel; slower watchers skip ahead
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Shared application state
pub struct AppState {
    /// Message store（データアクセス層の抽象化）
    pub store: Arc<dyn MessageStore>,
    /// Bot responder
    pub responder: Arc<Responder>,
    /// Room events for WebSocket watchers
    pub events: broadcast::Sender<RoomEvent>,
    /// Pause before the bot reply is recorded
    pub reply_delay: Duration,
    /// Default page size of the history endpoint
    pub history_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>, reply_delay: Duration, history_limit: usize) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            responder: Arc::new(Responder::new()),
            events,
            reply_delay,
            history_limit,
        }
    }

    pub fn from_config(store: Arc<dyn MessageStore>, config: &ServerConfig) -> Self {
        Self::new(store, config.reply_delay(), config.history_limit)
    }

    /// Push an event to the watchers; nobody listening is fine
    pub fn publish(&self, event: RoomEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("No watchers for room event");
        }
    }
}
