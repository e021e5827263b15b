//! Check configuration from environment.

use deconflict_core::rules::{
    DEFAULT_BUFFER_RADIUS, DEFAULT_SAMPLE_INTERVAL, DEFAULT_TIME_WINDOW,
};
use deconflict_core::{SafetyRules, SearchStrategy};
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub buffer_radius: f64,
    pub time_window: f64,
    pub sample_interval: f64,
    pub strategy: SearchStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_radius: DEFAULT_BUFFER_RADIUS,
            time_window: DEFAULT_TIME_WINDOW,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            strategy: SearchStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            buffer_radius: lookup("DECONFLICT_BUFFER_RADIUS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.buffer_radius),
            time_window: lookup("DECONFLICT_TIME_WINDOW")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.time_window),
            sample_interval: lookup("DECONFLICT_SAMPLE_INTERVAL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sample_interval),
            strategy: lookup("DECONFLICT_STRATEGY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.strategy),
        }
    }

    pub fn rules(&self) -> SafetyRules {
        SafetyRules::default()
            .with_buffer_radius(self.buffer_radius)
            .with_time_window(self.time_window)
            .with_sample_interval(self.sample_interval)
            .with_strategy(self.strategy)
    }
}
