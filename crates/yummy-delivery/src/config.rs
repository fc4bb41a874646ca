//! Runtime configuration.
//!
//! Defaults match the production schedule: sweep every 10 minutes, promote orders that have been
//! processing for an hour, six orders per history page. Any value can be overridden from the
//! environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `YUMMY_ACTOR_BUFFER` | `actor_buffer` |
//! | `YUMMY_SWEEP_INTERVAL_SECS` | `sweep_interval` |
//! | `YUMMY_DWELL_THRESHOLD_SECS` | `dwell_threshold` |
//! | `YUMMY_ORDERS_PAGE_SIZE` | `orders_page_size` |

use chrono::TimeDelta;
use std::time::Duration;
use thiserror::Error;

pub const ACTOR_BUFFER_VAR: &str = "YUMMY_ACTOR_BUFFER";
pub const SWEEP_INTERVAL_VAR: &str = "YUMMY_SWEEP_INTERVAL_SECS";
pub const DWELL_THRESHOLD_VAR: &str = "YUMMY_DWELL_THRESHOLD_SECS";
pub const ORDERS_PAGE_SIZE_VAR: &str = "YUMMY_ORDERS_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Channel capacity of every resource actor.
    pub actor_buffer: usize,
    /// Delay between two order sweeps.
    pub sweep_interval: Duration,
    /// How long an order stays PROCESSING before the sweeper delivers it.
    pub dwell_threshold: Duration,
    pub orders_page_size: usize,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            sweep_interval: Duration::from_secs(10 * 60),
            dwell_threshold: Duration::from_secs(60 * 60),
            orders_page_size: 6,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by whichever `YUMMY_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = positive(&lookup, ACTOR_BUFFER_VAR)? {
            config.actor_buffer = value as usize;
        }
        if let Some(secs) = positive(&lookup, SWEEP_INTERVAL_VAR)? {
            config.sweep_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = positive(&lookup, DWELL_THRESHOLD_VAR)? {
            config.dwell_threshold = Duration::from_secs(secs);
        }
        if let Some(value) = positive(&lookup, ORDERS_PAGE_SIZE_VAR)? {
            config.orders_page_size = value as usize;
        }
        Ok(config)
    }

    /// The dwell threshold as a `chrono` delta, for comparing against order timestamps.
    pub fn dwell_delta(&self) -> TimeDelta {
        TimeDelta::from_std(self.dwell_threshold).unwrap_or_else(|_| TimeDelta::max_value())
    }
}

fn positive<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 && value <= u32::MAX as u64 => Ok(Some(value)),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
