//! Time-stepped playback data for rendering missions and their conflicts.
//!
//! Rendering is left to the consumer; this module only answers "where is
//! each vehicle, where has it been, and which conflicts are active" at each
//! whole second.

use serde::Serialize;

use crate::conflict::ConflictDetector;
use crate::error::Result;
use crate::models::{Conflict, Mission, SampledPoint, Trajectory};
use crate::rules::SafetyRules;
use crate::spatial::round_seconds;
use crate::trajectory::sample_mission;

/// A sampled mission ready for playback.
#[derive(Debug, Clone)]
pub struct Track {
    pub mission_id: String,
    pub trajectory: Trajectory,
}

impl Track {
    /// First sample whose rounded time equals `time`.
    pub fn position_at(&self, time: i64) -> Option<SampledPoint> {
        self.trajectory
            .iter()
            .find(|p| round_seconds(p.time) == time)
            .copied()
    }

    /// All samples at or before `time`.
    pub fn trail_until(&self, time: i64) -> Vec<SampledPoint> {
        let cutoff = time as f64;
        self.trajectory
            .iter()
            .filter(|p| p.time <= cutoff)
            .copied()
            .collect()
    }
}

/// State of one mission at a playback instant.
#[derive(Debug, Clone, Serialize)]
pub struct TrackFrame {
    pub mission_id: String,
    pub position: Option<SampledPoint>,
    pub trail: Vec<SampledPoint>,
}

/// Everything needed to draw one whole second of playback.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub time: i64,
    pub primary: TrackFrame,
    pub others: Vec<TrackFrame>,
    pub conflicts: Vec<Conflict>,
}

/// Sampled missions plus their conflicts, computed once.
#[derive(Debug, Clone)]
pub struct Playback {
    primary: Track,
    others: Vec<Track>,
    conflicts: Vec<Conflict>,
}

impl Playback {
    pub fn new(primary: &Mission, others: &[Mission], rules: SafetyRules) -> Result<Self> {
        rules.validate()?;
        let track = |mission: &Mission| -> Result<Track> {
            Ok(Track {
                mission_id: mission.id.clone(),
                trajectory: sample_mission(mission, rules.sample_interval)?,
            })
        };
        let primary = track(primary)?;
        let others = others.iter().map(track).collect::<Result<Vec<_>>>()?;

        let detector = ConflictDetector::new(rules);
        let mut conflicts = Vec::new();
        for other in &others {
            detector.scan_pair(
                &primary.trajectory,
                &other.trajectory,
                &other.mission_id,
                &mut conflicts,
            );
        }
        Ok(Self {
            primary,
            others,
            conflicts,
        })
    }

    pub fn primary(&self) -> &Track {
        &self.primary
    }

    pub fn others(&self) -> &[Track] {
        &self.others
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Whole seconds from 0 through the latest sample time.
    pub fn time_range(&self) -> std::ops::RangeInclusive<i64> {
        let end = std::iter::once(&self.primary)
            .chain(&self.others)
            .filter_map(|track| track.trajectory.end_time())
            .fold(0.0_f64, f64::max);
        0..=end.ceil() as i64
    }

    pub fn frame(&self, time: i64) -> Frame {
        let track_frame = |track: &Track| TrackFrame {
            mission_id: track.mission_id.clone(),
            position: track.position_at(time),
            trail: track.trail_until(time),
        };
        Frame {
            time,
            primary: track_frame(&self.primary),
            others: self.others.iter().map(track_frame).collect(),
            conflicts: self
                .conflicts
                .iter()
                .filter(|c| c.time == time)
                .cloned()
                .collect(),
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.time_range().map(move |t| self.frame(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;

    fn playback() -> Playback {
        let primary = Mission::new(
            "Primary",
            vec![
                Waypoint::new(0.0, 0.0, 0.0, 0.0),
                Waypoint::new(10.0, 0.0, 0.0, 10.0),
            ],
        );
        let crossing = Mission::new(
            "Cross",
            vec![
                Waypoint::new(5.0, -5.0, 0.0, 0.0),
                Waypoint::new(5.0, 7.0, 0.0, 12.0),
            ],
        );
        Playback::new(&primary, &[crossing], SafetyRules::default()).unwrap()
    }

    #[test]
    fn test_conflicts_match_detector_output() {
        let primary = Mission::new(
            "Primary",
            vec![
                Waypoint::new(0.0, 0.0, 0.0, 0.0),
                Waypoint::new(10.0, 10.0, 10.0, 10.0),
                Waypoint::new(20.0, 10.0, 20.0, 20.0),
            ],
        );
        let others = [
            Mission::new(
                "Sim1",
                vec![
                    Waypoint::new(10.0, 0.0, 0.0, 5.0),
                    Waypoint::new(10.0, 20.0, 20.0, 15.0),
                ],
            ),
            Mission::new(
                "Sim2",
                vec![
                    Waypoint::new(25.0, 10.0, 15.0, 18.0),
                    Waypoint::new(0.0, 10.0, 15.0, 25.0),
                ],
            ),
        ];
        let rules = SafetyRules::default();
        let playback = Playback::new(&primary, &others, rules).unwrap();
        let detected = ConflictDetector::new(rules).detect(&primary, &others).unwrap();
        assert_eq!(playback.conflicts(), detected.as_slice());
        assert_eq!(playback.others().len(), 2);
        assert_eq!(playback.primary().trajectory.len(), 22);
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let mission = Mission::new("Solo", vec![]);
        let rules = SafetyRules::default().with_buffer_radius(0.0);
        assert!(Playback::new(&mission, &[], rules).is_err());
    }

    #[test]
    fn test_time_range_covers_latest_mission() {
        assert_eq!(playback().time_range(), 0..=12);
    }

    #[test]
    fn test_frame_positions_and_trails() {
        let playback = playback();
        let frame = playback.frame(3);
        assert_eq!(frame.primary.position, Some(SampledPoint::new(3.0, 0.0, 0.0, 3.0)));
        assert_eq!(frame.primary.trail.len(), 4);
        assert_eq!(frame.others[0].mission_id, "Cross");
        assert_eq!(frame.others[0].position, Some(SampledPoint::new(5.0, -2.0, 0.0, 3.0)));

        // Primary has landed by t=12
        let late = playback.frame(12);
        assert_eq!(late.primary.position, None);
        assert_eq!(late.primary.trail.len(), 11);
    }

    #[test]
    fn test_frame_conflicts_match_time() {
        let playback = playback();
        assert!(!playback.conflicts().is_empty());
        let total: usize = playback.frames().map(|f| f.conflicts.len()).sum();
        assert_eq!(total, playback.conflicts().len());
        assert!(playback.frame(0).conflicts.is_empty());
        for conflict in &playback.frame(5).conflicts {
            assert_eq!(conflict.time, 5);
        }
        assert!(!playback.frame(5).conflicts.is_empty());
    }
}
