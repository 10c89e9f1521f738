//! Terminal chat client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomchat-client -- --name alice --room General
//! ```

use clap::Parser;
use roomchat_client::ClientArgs;
use roomchat_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ClientArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the client
    if let Err(e) = roomchat_client::run_client(args).await {
        tracing::error!("Client error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
