//! Multi-room chat server with a rule-based bot.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomchat-server -- --store sqlite
//! ```

use clap::Parser;
use roomchat_server::ServerConfig;
use roomchat_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = roomchat_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
