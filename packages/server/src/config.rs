//! Server configuration (command-line flags).

use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Which message store backend to run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Process-local map; lost on restart
    Memory,
    /// SQLite file
    Sqlite,
}

/// Multi-room chat server with a rule-based bot
#[derive(Debug, Clone, Parser)]
#[command(name = "roomchat-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Message store backend
    #[arg(long, value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// SQLite database URL (used with `--store sqlite`)
    #[arg(long, default_value = "sqlite:chat_app.sqlite")]
    pub database_url: String,

    /// Pause before the bot reply is recorded, in milliseconds
    #[arg(long, default_value_t = 800)]
    pub reply_delay_ms: u64,

    /// Default number of messages returned by the history endpoint
    #[arg(long, default_value_t = 1000)]
    pub history_limit: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
