use std::time::Duration;

use spinner_shared::constants::{DEFAULT_ENTRIES, SPIN_DURATION_MS, SPIN_START_DELAY_MS};
use spinner_shared::presentation::SpinTiming;
use spinner_shared::validation::parse_label_list;
use thiserror::Error;

pub const ENTRIES_VAR: &str = "SPINNER_ENTRIES";
pub const SPIN_MS_VAR: &str = "SPINNER_SPIN_MS";
pub const START_DELAY_MS_VAR: &str = "SPINNER_START_DELAY_MS";
pub const FRAME_MS_VAR: &str = "SPINNER_FRAME_MS";
pub const SEED_VAR: &str = "SPINNER_SEED";
pub const FANFARE_VAR: &str = "SPINNER_FANFARE";

const DEFAULT_FRAME_MS: u64 = 250;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
    #[error("{name} must be `true` or `false`, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub entries: Vec<String>,
    pub spin_duration: Duration,
    pub start_delay: Duration,
    pub frame_interval: Duration,
    pub seed: Option<u64>,
    pub fanfare: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.iter().map(|name| name.to_string()).collect(),
            spin_duration: Duration::from_millis(SPIN_DURATION_MS),
            start_delay: Duration::from_millis(SPIN_START_DELAY_MS),
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            seed: None,
            fanfare: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // An empty list is a legitimate empty wheel.
        if let Some(raw) = lookup(ENTRIES_VAR) {
            config.entries = parse_label_list(&raw);
        }
        if let Some(ms) = number(&lookup, SPIN_MS_VAR)? {
            config.spin_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = number(&lookup, START_DELAY_MS_VAR)? {
            config.start_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = number(&lookup, FRAME_MS_VAR)? {
            if ms == 0 {
                return Err(ConfigError::Zero { name: FRAME_MS_VAR });
            }
            config.frame_interval = Duration::from_millis(ms);
        }
        config.seed = number(&lookup, SEED_VAR)?;
        if let Some(raw) = lookup(FANFARE_VAR) {
            config.fanfare = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => return Err(ConfigError::InvalidFlag { name: FANFARE_VAR, value: raw }),
            };
        }

        Ok(config)
    }

    pub fn timing(&self) -> SpinTiming {
        SpinTiming {
            start_delay: self.start_delay,
            duration: self.spin_duration,
        }
    }
}

fn number<F>(lookup: &F, name: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.entries.len(), 6);
        assert_eq!(config.timing(), SpinTiming::default());
        assert!(config.fanfare);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            (ENTRIES_VAR, "Ada, Grace ,, Linus"),
            (SPIN_MS_VAR, "1200"),
            (START_DELAY_MS_VAR, "0"),
            (FRAME_MS_VAR, "100"),
            (SEED_VAR, "99"),
            (FANFARE_VAR, "off"),
        ])
        .unwrap();

        assert_eq!(config.entries, vec!["Ada", "Grace", "Linus"]);
        assert_eq!(config.timing().settle_after(), Duration::from_millis(1200));
        assert_eq!(config.frame_interval, Duration::from_millis(100));
        assert_eq!(config.seed, Some(99));
        assert!(!config.fanfare);
    }

    #[test]
    fn test_empty_entry_list_is_allowed() {
        assert!(config(&[(ENTRIES_VAR, "")]).unwrap().entries.is_empty());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            config(&[(SPIN_MS_VAR, "fast")]),
            Err(ConfigError::InvalidNumber {
                name: SPIN_MS_VAR,
                value: "fast".to_string(),
            })
        );
        assert_eq!(
            config(&[(FRAME_MS_VAR, "0")]),
            Err(ConfigError::Zero { name: FRAME_MS_VAR })
        );
        assert!(matches!(
            config(&[(FANFARE_VAR, "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}
