//! Pre-flight deconfliction for planned drone missions.
//!
//! Missions are sparse 4D waypoint lists. The [`trajectory`] module turns
//! them into dense time-stamped samples and [`conflict`] tests the primary
//! mission's samples against every other mission for proximity violations.

pub mod conflict;
pub mod error;
pub mod models;
pub mod playback;
pub mod report;
pub mod rules;
pub mod spatial;
pub mod trajectory;

pub use conflict::{check_mission, detect_conflicts, ConflictDetector};
pub use error::{DeconflictError, Result};
pub use models::{Conflict, Mission, SampledPoint, Trajectory, Waypoint};
pub use playback::{Frame, Playback, Track, TrackFrame};
pub use report::{MissionReport, MissionStatus};
pub use rules::{SafetyRules, SearchStrategy};
pub use trajectory::{sample, sample_mission};
