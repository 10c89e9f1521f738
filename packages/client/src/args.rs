//! Command-line arguments of the client.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roomchat-client", version, about = "Terminal client for roomchat")]
pub struct ClientArgs {
    /// Base URL of the server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub url: String,

    /// Display name
    #[arg(long, default_value = "Guest")]
    pub name: String,

    /// Room to join on start
    #[arg(long, default_value = "General")]
    pub room: String,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
