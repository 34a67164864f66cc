//! Startup configuration.
//!
//! There are no CLI flags; a couple of environment variables cover the cases
//! where a user wants a reproducible run or a log file.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::types::TICK_MS;

/// Seeds the runner RNG (`u32`). Defaults to a clock-derived value.
pub const SEED_ENV: &str = "RUNNERS_SEED";

/// Path of a log file. Logging is off when unset.
pub const LOG_ENV: &str = "RUNNERS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub tick: Duration,
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup(SEED_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{SEED_ENV} must be an unsigned 32-bit integer, got {raw:?}"))?,
            None => clock_seed(),
        };

        let log_path = lookup(LOG_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            seed,
            log_path,
            tick: Duration::from_millis(u64::from(TICK_MS)),
        })
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
