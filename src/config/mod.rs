// Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const PROD: &str = "prod";
pub const DEV: &str = "dev";
pub const TEST: &str = "test";

/// Delay before the first eviction tick.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(10_000);
/// Delay between the end of one eviction tick and the start of the next.
pub const DEFAULT_FIXED_DELAY: Duration = Duration::from_millis(10_000);
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_METRICS_LISTEN: &str = "0.0.0.0:9091";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedCache {
    #[serde(rename = "app")]
    pub app: AppBox,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppBox {
    pub env: String,
    pub logs: Option<Logs>,
    pub eviction: Option<Eviction>,
    pub metrics: Option<Metrics>,
    pub shutdown: Option<Shutdown>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Eviction {
    pub enabled: bool,
    #[serde(rename = "initial_delay", default, with = "humantime_serde")]
    pub initial_delay: Option<Duration>,
    #[serde(rename = "fixed_delay", default, with = "humantime_serde")]
    pub fixed_delay: Option<Duration>,
}

impl Eviction {
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay.unwrap_or(DEFAULT_INITIAL_DELAY)
    }

    pub fn fixed_delay(&self) -> Duration {
        self.fixed_delay.unwrap_or(DEFAULT_FIXED_DELAY)
    }
}

impl Default for Eviction {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_delay: Some(DEFAULT_INITIAL_DELAY),
            fixed_delay: Some(DEFAULT_FIXED_DELAY),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metrics {
    pub enabled: bool,
    pub listen: Option<SocketAddr>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Shutdown {
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

// Config trait
pub trait ConfigTrait {
    fn logs(&self) -> Option<&Logs>;
    fn is_prod(&self) -> bool;
    fn is_test(&self) -> bool;
    fn eviction(&self) -> Option<&Eviction>;
    fn is_eviction_enabled(&self) -> bool;
    fn metrics(&self) -> Option<&Metrics>;
    fn metrics_listen(&self) -> Result<SocketAddr>;
    fn shutdown_timeout(&self) -> Duration;
}

// Config type alias for convenience
pub type Config = FeedCache;

impl ConfigTrait for Config {
    fn logs(&self) -> Option<&Logs> {
        self.app.logs.as_ref()
    }

    fn is_prod(&self) -> bool {
        self.app.env == PROD
    }

    fn is_test(&self) -> bool {
        self.app.env == TEST
    }

    fn eviction(&self) -> Option<&Eviction> {
        self.app.eviction.as_ref()
    }

    fn is_eviction_enabled(&self) -> bool {
        self.eviction()
            .map(|e| e.enabled)
            .unwrap_or(Eviction::default().enabled)
    }

    fn metrics(&self) -> Option<&Metrics> {
        self.app.metrics.as_ref()
    }

    fn metrics_listen(&self) -> Result<SocketAddr> {
        if let Some(addr) = self.metrics().and_then(|m| m.listen) {
            return Ok(addr);
        }
        DEFAULT_METRICS_LISTEN
            .parse()
            .with_context(|| format!("parse default metrics address {}", DEFAULT_METRICS_LISTEN))
    }

    fn shutdown_timeout(&self) -> Duration {
        self.app
            .shutdown
            .as_ref()
            .and_then(|s| s.timeout)
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT)
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let abs_path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve absolute config filepath: {:?}", path))?;

        let data = std::fs::read_to_string(&abs_path)
            .with_context(|| format!("read config yaml file {:?}", abs_path))?;

        Self::from_yaml(&data).with_context(|| format!("unmarshal yaml from {:?}", abs_path))
    }

    /// Parses and normalizes configuration from YAML text.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let mut cfg: FeedCache = serde_yaml::from_str(data)?;

        // Eviction runs unless explicitly disabled.
        if cfg.app.eviction.is_none() {
            cfg.app.eviction = Some(Eviction::default());
        }

        if let Some(ref mut eviction) = cfg.app.eviction {
            eviction.initial_delay = Some(eviction.initial_delay());
            eviction.fixed_delay = Some(eviction.fixed_delay());
            if eviction.fixed_delay().is_zero() {
                anyhow::bail!("eviction.fixed_delay must be greater than zero");
            }
        }

        Ok(cfg)
    }
}

// Test config is always available for integration tests
mod test_config;
pub use test_config::new_test_config;
