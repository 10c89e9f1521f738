//! Logger setup shared by the server and client binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set. Otherwise the binary's own crate and
/// `tower_http` log at `default_level`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init();

    if let Err(e) = result {
        // A subscriber is already installed (e.g. by a test harness)
        eprintln!("logger already initialized: {e}");
    }
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("{crate_name}={default_level},tower_http={default_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_uses_crate_name() {
        // テスト項目: バイナリ名のハイフンはクレート名のアンダースコアに変換される
        // when (操作):
        let directives = default_directives("roomchat-server", "debug");

        // then (期待する結果):
        assert_eq!(directives, "roomchat_server=debug,tower_http=debug");
    }
}
