//! Host `traceroute` invocation.
//!
//! The parser core consumes a string; this module produces it. The
//! `HostTraceroute` seam keeps gather logic testable without spawning
//! real processes.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// Grace window added on top of the configured timeout, so the binary's
/// own per-probe waits get a chance to expire first.
const TIMEOUT_GRACE_SECS: f64 = 5.0;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to launch traceroute: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("traceroute timed out after {0}s")]
    Timeout(f64),

    #[error("traceroute produced non-UTF8 output")]
    NonUtf8,
}

/// Something that can run a traceroute against a target and hand back
/// the raw textual output.
#[async_trait]
pub trait HostTraceroute: Send + Sync {
    async fn run(&self, timeout_secs: f64, args: &[String]) -> Result<String, RunnerError>;
}

/// Runs the system `traceroute` binary.
pub struct SystemTraceroute;

#[async_trait]
impl HostTraceroute for SystemTraceroute {
    async fn run(&self, timeout_secs: f64, args: &[String]) -> Result<String, RunnerError> {
        let mut command = Command::new("traceroute");
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = if timeout_secs <= 0.0 {
            command.output().await?
        } else {
            let limit = Duration::from_secs_f64(timeout_secs + TIMEOUT_GRACE_SECS);
            tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| RunnerError::Timeout(timeout_secs))??
        };

        // On failure the diagnostics land on stderr; hand those back so
        // the caller can surface them.
        let bytes = if output.status.success() || !output.stdout.is_empty() {
            output.stdout
        } else {
            output.stderr
        };

        String::from_utf8(bytes).map_err(|_| RunnerError::NonUtf8)
    }
}

/// Build the argument list for one target host.
pub fn traceroute_args(target_fqdn: &str) -> Vec<String> {
    vec![target_fqdn.to_string()]
}
