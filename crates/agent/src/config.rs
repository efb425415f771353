use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Hostnames (or dotted-quad addresses) to traceroute each cycle.
    pub urls: Vec<String>,
    /// Per-traceroute timeout in seconds. 0 means no timeout.
    pub response_timeout_secs: f64,
    /// Seconds between gather cycles.
    pub gather_interval_secs: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            response_timeout_secs: 0.0,
            gather_interval_secs: 60,
        }
    }
}

impl PluginConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("TRACE_AGENT_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/trace-agent/agent.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(urls) = std::env::var("TRACE_AGENT_URLS") {
            config.urls = split_urls(&urls);
        }
        if let Ok(timeout) = std::env::var("TRACE_AGENT_RESPONSE_TIMEOUT") {
            if let Ok(timeout) = timeout.parse() {
                config.response_timeout_secs = timeout;
            }
        }
        if let Ok(interval) = std::env::var("TRACE_AGENT_GATHER_INTERVAL") {
            if let Ok(interval) = interval.parse() {
                config.gather_interval_secs = interval;
            }
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: PluginConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            urls: std::env::var("TRACE_AGENT_URLS")
                .map(|urls| split_urls(&urls))
                .unwrap_or_default(),
            response_timeout_secs: std::env::var("TRACE_AGENT_RESPONSE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.0),
            gather_interval_secs: std::env::var("TRACE_AGENT_GATHER_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Validate that configuration values are sane
    pub fn validate(&self) -> Result<(), String> {
        if self.urls.is_empty() {
            return Err("urls must list at least one traceroute target".to_string());
        }
        if self.urls.iter().any(|u| u.trim().is_empty()) {
            return Err("urls must not contain empty entries".to_string());
        }
        if self.response_timeout_secs < 0.0 {
            return Err("response_timeout_secs must not be negative".to_string());
        }
        if self.gather_interval_secs == 0 {
            return Err("gather_interval_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}
