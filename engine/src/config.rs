//! Engine configuration.
//!
//! Defaults match the timings of the hosted demo. Native builds can
//! override them from the environment (a `.env` file is loaded by the CLI).

use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Advertised per-file size limit: 10 MB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Timings and limits for the simulated flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Lower bound of the mock processing delay
    pub min_delay: Duration,
    /// Upper bound (exclusive) of the mock processing delay
    pub max_delay: Duration,
    /// Pause between "preparing" and "done" during export
    pub export_delay: Duration,
    /// Fake network delay of the login form
    pub login_delay: Duration,
    /// Per-file size limit, `None` disables it
    pub max_file_size: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(2000),
            max_delay: Duration::from_millis(5000),
            export_delay: Duration::from_millis(2000),
            login_delay: Duration::from_millis(1500),
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_delay > self.max_delay {
            return Err(ConfigError::InvertedDelayRange {
                min_ms: self.min_delay.as_millis(),
                max_ms: self.max_delay.as_millis(),
            });
        }
        Ok(())
    }

    /// Build from `GOOGLIA_*` environment variables, falling back to defaults.
    ///
    /// | Variable                  | Meaning                         |
    /// |---------------------------|---------------------------------|
    /// | `GOOGLIA_MIN_DELAY_MS`    | min processing delay            |
    /// | `GOOGLIA_MAX_DELAY_MS`    | max processing delay            |
    /// | `GOOGLIA_EXPORT_DELAY_MS` | export delay                    |
    /// | `GOOGLIA_LOGIN_DELAY_MS`  | login delay                     |
    /// | `GOOGLIA_MAX_FILE_SIZE`   | size limit in bytes, 0 disables |
    #[cfg(feature = "native")]
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PipelineConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(ms) = read_u64(&lookup, "GOOGLIA_MIN_DELAY_MS")? {
            config.min_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_u64(&lookup, "GOOGLIA_MAX_DELAY_MS")? {
            config.max_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_u64(&lookup, "GOOGLIA_EXPORT_DELAY_MS")? {
            config.export_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_u64(&lookup, "GOOGLIA_LOGIN_DELAY_MS")? {
            config.login_delay = Duration::from_millis(ms);
        }
        if let Some(bytes) = read_u64(&lookup, "GOOGLIA_MAX_FILE_SIZE")? {
            config.max_file_size = (bytes > 0).then_some(bytes);
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> ConfigResult<Option<u64>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.min_delay, Duration::from_secs(2));
        assert_eq!(config.max_delay, Duration::from_secs(5));
        assert_eq!(config.max_file_size, Some(10 * 1024 * 1024));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = PipelineConfig::from_lookup(lookup_from(&[
            ("GOOGLIA_MIN_DELAY_MS", "10"),
            ("GOOGLIA_MAX_DELAY_MS", "20"),
            ("GOOGLIA_MAX_FILE_SIZE", "0"),
        ]))
        .unwrap();
        assert_eq!(config.min_delay, Duration::from_millis(10));
        assert_eq!(config.max_delay, Duration::from_millis(20));
        assert_eq!(config.max_file_size, None);
        assert_eq!(config.login_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_bad_number() {
        let err = PipelineConfig::from_lookup(lookup_from(&[("GOOGLIA_LOGIN_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "GOOGLIA_LOGIN_DELAY_MS".into(),
                value: "soon".into()
            }
        );
    }

    #[test]
    fn test_inverted_range() {
        let err = PipelineConfig::from_lookup(lookup_from(&[("GOOGLIA_MIN_DELAY_MS", "9000")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedDelayRange { .. }));
    }
}
