//! safety-rs: Email Safety Checker API server

use safety_rs::config::LoggingConfig;
use safety_rs::{SafetyConfig, SafetyServer};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1);
    let config = match config_path.as_deref() {
        Some(path) => SafetyConfig::from_file(Path::new(path))?,
        None => SafetyConfig::development(),
    };
    config.validate()?;

    init_logging(&config.logging);

    info!("Starting safety-rs v{}", env!("CARGO_PKG_VERSION"));
    match config_path {
        Some(path) => info!("Loaded configuration from {}", path),
        None => info!("No config file specified, using development defaults"),
    }

    let server = SafetyServer::new(config)?;
    server.run().await?;

    Ok(())
}

/// Initialize tracing; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}
