//! Boot — logging init and config load/validate.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::PluginConfig;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trace_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load and validate the plugin configuration.
pub fn boot() -> Result<PluginConfig, Box<dyn std::error::Error>> {
    info!("Starting traceroute input agent v0.0.1");

    let config = PluginConfig::load()?;
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!(
        "Loaded configuration: {} target(s), response_timeout={}s, gather_interval={}s",
        config.urls.len(),
        config.response_timeout_secs,
        config.gather_interval_secs
    );

    Ok(config)
}
