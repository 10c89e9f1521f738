//! Shared test fixtures for integration tests.

use std::{sync::Arc, time::Duration};

use roomchat_server::{
    infrastructure::repository::InMemoryMessageStore,
    ui::{serve, state::AppState},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// Default page size used by test servers
pub const TEST_HISTORY_LIMIT: usize = 1000;

/// Test server running in-process on an ephemeral port
///
/// The server task is aborted when the fixture is dropped.
pub struct TestServer {
    addr: std::net::SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with an in-memory store and no reply delay
    pub async fn start() -> Self {
        Self::start_with_delay(Duration::ZERO).await
    }

    /// Start a server whose bot waits `reply_delay` before answering
    pub async fn start_with_delay(reply_delay: Duration) -> Self {
        let store = Arc::new(InMemoryMessageStore::new());
        let state = Arc::new(AppState::new(store, reply_delay, TEST_HISTORY_LIMIT));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            if let Err(e) = serve(listener, state).await {
                eprintln!("test server stopped: {e}");
            }
        });

        Self { addr, handle }
    }

    /// Get the base URL for HTTP requests
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the WebSocket URL watching `room`
    #[allow(dead_code)]
    pub fn ws_url(&self, room: &str) -> String {
        format!("ws://{}/api/rooms/{}/ws", self.addr, room)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
