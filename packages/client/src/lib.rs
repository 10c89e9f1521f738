//! Terminal client for the roomchat server.
//!
//! Reads lines with rustyline, sends them through the HTTP API and prints the
//! room's live events received over WebSocket.

pub mod api;
pub mod args;
pub mod command;
pub mod error;
pub mod session;
pub mod watcher;

// Re-export entry points
pub use args::ClientArgs;
pub use error::ClientError;
pub use session::run_client;
