//! Server startup.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::{ServerConfig, StoreKind},
    domain::MessageStore,
    error::ServerError,
    infrastructure::repository::{InMemoryMessageStore, SqliteMessageStore},
};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Connections kept by the SQLite pool
const SQLITE_MAX_CONNECTIONS: u32 = 8;

/// Open the configured message store
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn MessageStore>, ServerError> {
    let store: Arc<dyn MessageStore> = match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory message store");
            Arc::new(InMemoryMessageStore::new())
        }
        StoreKind::Sqlite => {
            tracing::info!("Using SQLite message store at {}", config.database_url);
            Arc::new(SqliteMessageStore::connect(&config.database_url, SQLITE_MAX_CONNECTIONS).await?)
        }
    };
    Ok(store)
}

/// Serve the application on an already bound listener until shutdown
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Run the chat server with the given configuration
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store = open_store(&config).await?;
    let state = Arc::new(AppState::from_config(store, &config));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    serve(listener, state).await
}
