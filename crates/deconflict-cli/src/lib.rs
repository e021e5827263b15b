//! Deconfliction CLI - mission loading and command line tools.
//!
//! This crate provides the binaries:
//! - check_mission: check a primary mission against other missions
//! - detect_stress: compare search strategies on random fleets

pub mod config;
pub mod logging;
pub mod missions;
pub mod scenarios;

pub use config::Config;
pub use missions::MissionSet;
pub use scenarios::{Scenario, ScenarioKind};
