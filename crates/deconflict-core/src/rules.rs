//! Safety rules and thresholds for mission deconfliction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_positive, Result};

pub const DEFAULT_BUFFER_RADIUS: f64 = 5.0;
pub const DEFAULT_TIME_WINDOW: f64 = 1.0;
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 1.0;

/// How the detector finds candidate sample pairs.
///
/// Both strategies report identical conflicts in identical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Test every primary sample against every other sample
    #[default]
    BruteForce,
    /// Binary-search each primary sample's time window in the other trajectory
    TimeIndexed,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce => f.write_str("brute-force"),
            Self::TimeIndexed => f.write_str("time-indexed"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" => Ok(Self::BruteForce),
            "time-indexed" | "time_indexed" => Ok(Self::TimeIndexed),
            other => Err(format!("unknown search strategy: {other}")),
        }
    }
}

/// Configuration for a conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyRules {
    /// Minimum allowed 3D separation
    pub buffer_radius: f64,
    /// Maximum time offset for two samples to count as simultaneous (seconds)
    pub time_window: f64,
    /// Time step used when sampling trajectories (seconds)
    pub sample_interval: f64,
    #[serde(default)]
    pub strategy: SearchStrategy,
}

impl Default for SafetyRules {
    fn default() -> Self {
        Self {
            buffer_radius: DEFAULT_BUFFER_RADIUS,
            time_window: DEFAULT_TIME_WINDOW,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            strategy: SearchStrategy::default(),
        }
    }
}

impl SafetyRules {
    pub fn with_buffer_radius(mut self, buffer_radius: f64) -> Self {
        self.buffer_radius = buffer_radius;
        self
    }

    pub fn with_time_window(mut self, time_window: f64) -> Self {
        self.time_window = time_window;
        self
    }

    pub fn with_sample_interval(mut self, sample_interval: f64) -> Self {
        self.sample_interval = sample_interval;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject non-positive or non-finite thresholds.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("buffer_radius", self.buffer_radius)?;
        ensure_positive("time_window", self.time_window)?;
        ensure_positive("interval", self.sample_interval)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeconflictError;

    #[test]
    fn test_defaults_match_reference_values() {
        let rules = SafetyRules::default();
        assert_eq!(rules.buffer_radius, 5.0);
        assert_eq!(rules.time_window, 1.0);
        assert_eq!(rules.sample_interval, 1.0);
        assert_eq!(rules.strategy, SearchStrategy::BruteForce);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_validate_names_offending_parameter() {
        let err = SafetyRules::default()
            .with_time_window(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, DeconflictError::invalid_parameter("time_window", 0.0));

        let err = SafetyRules::default()
            .with_sample_interval(-1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, DeconflictError::invalid_parameter("interval", -1.0));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("time-indexed".parse::<SearchStrategy>(), Ok(SearchStrategy::TimeIndexed));
        assert_eq!("Brute_Force".parse::<SearchStrategy>(), Ok(SearchStrategy::BruteForce));
        assert!("grid".parse::<SearchStrategy>().is_err());
        assert_eq!(SearchStrategy::TimeIndexed.to_string(), "time-indexed");
    }

    #[test]
    fn test_rules_deserialize_without_strategy() {
        let rules: SafetyRules = serde_json::from_str(
            r#"{"buffer_radius": 8.0, "time_window": 0.5, "sample_interval": 0.25}"#,
        )
        .unwrap();
        assert_eq!(rules.buffer_radius, 8.0);
        assert_eq!(rules.strategy, SearchStrategy::BruteForce);
    }
}
