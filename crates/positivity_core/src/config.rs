//! Display configuration.
//!
//! # Responsibility
//! - Hold the tunable timings and share payload constants.
//! - Overlay environment variables onto defaults for host shells.
//!
//! # Invariants
//! - A validated config has a positive clock period, timers no longer than
//!   a day, and non-empty share title and url.

use chrono::Duration;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default interval between clock ticks.
pub const DEFAULT_CLOCK_PERIOD_MS: u64 = 60_000;
/// Default length of the refresh transition window.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 300;
/// Default share sheet title.
pub const DEFAULT_SHARE_TITLE: &str = "Daily Positivity";
/// Default reference url passed to the share sheet.
pub const DEFAULT_SHARE_URL: &str = "https://daily-positivity.app/";

/// Upper bound for any timer setting (one day).
pub const MAX_TIMER_MS: u64 = 86_400_000;

pub const ENV_CLOCK_PERIOD_MS: &str = "POSITIVITY_CLOCK_PERIOD_MS";
pub const ENV_TRANSITION_MS: &str = "POSITIVITY_TRANSITION_MS";
pub const ENV_SHARE_TITLE: &str = "POSITIVITY_SHARE_TITLE";
pub const ENV_SHARE_URL: &str = "POSITIVITY_SHARE_URL";

/// Display controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clock tick period in milliseconds.
    pub clock_period_ms: u64,
    /// Delay between a refresh request and the message swap.
    pub transition_delay_ms: u64,
    pub share_title: String,
    pub share_url: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock_period_ms: DEFAULT_CLOCK_PERIOD_MS,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            share_title: DEFAULT_SHARE_TITLE.to_string(),
            share_url: DEFAULT_SHARE_URL.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Defaults overlaid with `POSITIVITY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values returned by `lookup`.
    ///
    /// Blank values are ignored. The result is validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(raw) = value(ENV_CLOCK_PERIOD_MS) {
            config.clock_period_ms = parse_millis(ENV_CLOCK_PERIOD_MS, &raw)?;
        }
        if let Some(raw) = value(ENV_TRANSITION_MS) {
            config.transition_delay_ms = parse_millis(ENV_TRANSITION_MS, &raw)?;
        }
        if let Some(raw) = value(ENV_SHARE_TITLE) {
            config.share_title = raw;
        }
        if let Some(raw) = value(ENV_SHARE_URL) {
            config.share_url = raw;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks config invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_period_ms == 0 {
            return Err(ConfigError::ZeroClockPeriod);
        }
        if self.clock_period_ms > MAX_TIMER_MS {
            return Err(ConfigError::TimerTooLong {
                field: "clock_period_ms",
                millis: self.clock_period_ms,
            });
        }
        if self.transition_delay_ms > MAX_TIMER_MS {
            return Err(ConfigError::TimerTooLong {
                field: "transition_delay_ms",
                millis: self.transition_delay_ms,
            });
        }
        if self.share_title.trim().is_empty() {
            return Err(ConfigError::EmptyShareTitle);
        }
        if self.share_url.trim().is_empty() {
            return Err(ConfigError::EmptyShareUrl);
        }
        Ok(())
    }

    /// Clock tick period, capped at `MAX_TIMER_MS`.
    pub fn clock_period(&self) -> Duration {
        millis_delta(self.clock_period_ms)
    }

    /// Transition window, capped at `MAX_TIMER_MS`.
    pub fn transition_delay(&self) -> Duration {
        millis_delta(self.transition_delay_ms)
    }
}

fn millis_delta(millis: u64) -> Duration {
    Duration::milliseconds(millis.min(MAX_TIMER_MS) as i64)
}

fn parse_millis(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    ZeroClockPeriod,
    TimerTooLong { field: &'static str, millis: u64 },
    EmptyShareTitle,
    EmptyShareUrl,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "`{key}` must be a whole number of milliseconds, got `{value}`")
            }
            Self::ZeroClockPeriod => write!(f, "clock period must be positive"),
            Self::TimerTooLong { field, millis } => {
                write!(f, "`{field}` of {millis}ms exceeds the {MAX_TIMER_MS}ms limit")
            }
            Self::EmptyShareTitle => write!(f, "share title must not be empty"),
            Self::EmptyShareUrl => write!(f, "share url must not be empty"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DisplayConfig, ENV_CLOCK_PERIOD_MS, ENV_SHARE_URL};
    use std::collections::HashMap;
    use chrono::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_display_timings() {
        let config = DisplayConfig::default();
        assert_eq!(config.clock_period(), Duration::seconds(60));
        assert_eq!(config.transition_delay(), Duration::milliseconds(300));
        assert_eq!(config.share_title, "Daily Positivity");
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn env_overlay_ignores_blank_values() {
        let config = DisplayConfig::from_lookup(lookup(&[
            (ENV_CLOCK_PERIOD_MS, "1000"),
            (ENV_SHARE_URL, "   "),
        ]))
        .expect("overlay");
        assert_eq!(config.clock_period_ms, 1000);
        assert_eq!(config.share_url, super::DEFAULT_SHARE_URL);
    }

    #[test]
    fn env_overlay_rejects_bad_numbers_and_zero_period() {
        let err = DisplayConfig::from_lookup(lookup(&[(ENV_CLOCK_PERIOD_MS, "soon")]))
            .expect_err("non-numeric period");
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        let err = DisplayConfig::from_lookup(lookup(&[(ENV_CLOCK_PERIOD_MS, "0")]))
            .expect_err("zero period");
        assert_eq!(err, ConfigError::ZeroClockPeriod);

        let err = DisplayConfig::from_lookup(lookup(&[(super::ENV_TRANSITION_MS, "90000000")]))
            .expect_err("transition longer than a day");
        assert!(matches!(err, ConfigError::TimerTooLong { .. }));
    }

    #[test]
    fn deserializes_partial_documents_over_defaults() {
        let config: DisplayConfig =
            serde_json::from_str(r#"{"transition_delay_ms": 50}"#).expect("json");
        assert_eq!(config.transition_delay_ms, 50);
        assert_eq!(config.clock_period_ms, 60_000);
    }
}
