// Package workers provides worker configuration.

use std::time::Duration;

use crate::config::{Config, ConfigTrait, Eviction};

/// FixedDelay represents a repeating schedule where the delay is measured from
/// the end of one run to the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    initial_delay: Duration,
    delay: Duration,
}

impl FixedDelay {
    /// Creates a new FixedDelay.
    pub fn new(initial_delay: Duration, delay: Duration) -> Self {
        Self {
            initial_delay,
            delay,
        }
    }

    /// Delay before the first run.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Delay after each run.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl From<&Eviction> for FixedDelay {
    fn from(eviction: &Eviction) -> Self {
        Self::new(eviction.initial_delay(), eviction.fixed_delay())
    }
}

/// Config represents worker configuration.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    enabled: bool,
    schedule: FixedDelay,
}

impl WorkerConfig {
    /// Creates a new Config.
    pub fn new(enabled: bool, schedule: FixedDelay) -> Self {
        Self { enabled, schedule }
    }

    /// Builds the eviction worker config from the application config.
    pub fn eviction(cfg: &Config) -> Self {
        let default_eviction = Eviction::default();
        let eviction = cfg.eviction().unwrap_or(&default_eviction);
        Self::new(cfg.is_eviction_enabled(), FixedDelay::from(eviction))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&self, v: bool) -> Self {
        Self {
            enabled: v,
            schedule: self.schedule,
        }
    }

    pub fn schedule(&self) -> FixedDelay {
        self.schedule
    }
}
