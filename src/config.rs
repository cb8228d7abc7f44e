//! Runtime configuration from `CONNECT_FOUR_*` environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::SessionSettings;
use crate::types::GAME_OVER_DELAY_MS;

pub const ENV_SEED: &str = "CONNECT_FOUR_SEED";
pub const ENV_GAME_OVER_MS: &str = "CONNECT_FOUR_GAME_OVER_MS";
pub const ENV_SOUND: &str = "CONNECT_FOUR_SOUND";
pub const ENV_LOG_PATH: &str = "CONNECT_FOUR_LOG_PATH";
pub const ENV_RECORD_PATH: &str = "CONNECT_FOUR_RECORD_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the computer's random moves; `None` derives one from the clock.
    pub seed: Option<u32>,
    pub game_over_delay_ms: u32,
    /// Ring the terminal bell for sound cues.
    pub sound: bool,
    /// tracing output file; logging is off without one.
    pub log_path: Option<PathBuf>,
    /// JSON Lines game record.
    pub record_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            game_over_delay_ms: GAME_OVER_DELAY_MS,
            sound: true,
            log_path: None,
            record_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values keep their defaults;
    /// malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let seed = get(ENV_SEED)
            .map(|v| {
                v.parse::<u32>()
                    .map_err(|_| anyhow!("{}: invalid seed: {}", ENV_SEED, v))
            })
            .transpose()?;

        let game_over_delay_ms = match get(ENV_GAME_OVER_MS) {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| anyhow!("{}: invalid milliseconds: {}", ENV_GAME_OVER_MS, v))?,
            None => defaults.game_over_delay_ms,
        };

        let sound = match get(ENV_SOUND) {
            Some(v) => parse_switch(&v)
                .ok_or_else(|| anyhow!("{}: expected on/off, got: {}", ENV_SOUND, v))?,
            None => defaults.sound,
        };

        Ok(Self {
            seed,
            game_over_delay_ms,
            sound,
            log_path: get(ENV_LOG_PATH).map(PathBuf::from),
            record_path: get(ENV_RECORD_PATH).map(PathBuf::from),
        })
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Session tunables for a front end with the given pointer cell metrics.
    pub fn session_settings(&self, cell_width: u16, cell_height: u16) -> SessionSettings {
        SessionSettings {
            game_over_delay_ms: self.game_over_delay_ms,
            cell_width,
            cell_height,
        }
    }
}

fn parse_switch(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game_over_delay_ms, 1000);
        assert!(cfg.sound);
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("OFF"), Some(false));
        assert_eq!(parse_switch("Yes"), Some(true));
        assert_eq!(parse_switch("maybe"), None);
    }
}
