use std::io::{stdout, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Human-readable output on a terminal, JSON lines everywhere else.
/// RUST_LOG controls the filter; `info` otherwise.
pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if IsTerminal::is_terminal(&stdout()) {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(true)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_current_span(true)
            .with_target(true)
            .init();
    }

    tracing::info!("Logging initialized");
}
