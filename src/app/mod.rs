//! Application glue module
//!
//! Configuration, logging, and application-level utilities for hosts that
//! embed the terminal.

mod config;

pub use config::{default_config_path, ConfigError, TerminalConfig};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `default_filter`. A subscriber that is already installed is
/// left in place.
pub fn init_logging(default_filter: &str) {
    let result = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if let Err(e) = result {
        tracing::debug!(error = %e, "keeping existing tracing subscriber");
    }
}
