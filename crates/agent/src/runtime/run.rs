//! Run — periodic gather loop until shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::acc::{Accumulator, StdoutAccumulator};
use crate::config::PluginConfig;
use crate::gather::gather;
use crate::runner::{HostTraceroute, SystemTraceroute};

/// Gather on the configured interval, shipping points as JSON lines on
/// stdout, until ctrl-c.
pub async fn run(config: PluginConfig) -> Result<(), Box<dyn std::error::Error>> {
    let tracer: Arc<dyn HostTraceroute> = Arc::new(SystemTraceroute);
    let acc: Arc<dyn Accumulator> = Arc::new(StdoutAccumulator);

    let mut ticker = interval(Duration::from_secs(config.gather_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Entering gather loop");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                gather(&config, Arc::clone(&tracer), Arc::clone(&acc)).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping");
                return Ok(());
            }
        }
    }
}
