//! Multi-room chat server library.
//!
//! Rooms hold append-only message logs. Every user message gets a reply from a
//! rule-based bot, and watchers of a room receive updates over WebSocket.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run;
