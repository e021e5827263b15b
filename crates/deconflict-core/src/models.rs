//! Core data models for mission deconfliction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position-plus-time control point of a planned route.
///
/// `time` is mission-elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub time: f64,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64, z: f64, time: f64) -> Self {
        Self { x, y, z, time }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.time.is_finite()
    }
}

/// One vehicle's waypoint-defined flight plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

impl Mission {
    pub fn new(id: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        Self {
            id: id.into(),
            waypoints,
        }
    }

    /// Time span covered by the waypoints, if there are any.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let first = self.waypoints.first()?;
        let last = self.waypoints.last()?;
        Some((first.time, last.time))
    }
}

/// Interpolated position of a mission at one sampled instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub time: f64,
}

impl SampledPoint {
    pub const fn new(x: f64, y: f64, z: f64, time: f64) -> Self {
        Self { x, y, z, time }
    }

    pub const fn position(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl From<Waypoint> for SampledPoint {
    fn from(wp: Waypoint) -> Self {
        Self::new(wp.x, wp.y, wp.z, wp.time)
    }
}

/// Dense, time-ordered reconstruction of a mission.
///
/// Points at interior waypoints appear twice, once as the end of a segment
/// and once as the start of the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<SampledPoint>,
}

impl Trajectory {
    pub fn new(points: Vec<SampledPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SampledPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SampledPoint> {
        self.points.iter()
    }

    /// Time of the last sample.
    pub fn end_time(&self) -> Option<f64> {
        self.points.last().map(|p| p.time)
    }

    pub fn into_points(self) -> Vec<SampledPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a SampledPoint;
    type IntoIter = std::slice::Iter<'a, SampledPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A proximity violation between the primary mission and another mission
/// at one sampled instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Primary sample time rounded to whole seconds.
    pub time: i64,
    /// Midpoint of the two samples, each coordinate rounded to 2 decimals.
    pub location: (f64, f64, f64),
    pub conflicting_mission_id: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.location;
        write!(
            f,
            "Conflict at ({x}, {y}, {z}) with {} around {}s",
            self.conflicting_mission_id, self.time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_deserializes_without_waypoints() {
        let mission: Mission = serde_json::from_str(r#"{"id": "Empty"}"#).unwrap();
        assert_eq!(mission.id, "Empty");
        assert!(mission.waypoints.is_empty());
        assert_eq!(mission.time_span(), None);
    }

    #[test]
    fn test_mission_time_span() {
        let mission = Mission::new(
            "Primary",
            vec![
                Waypoint::new(0.0, 0.0, 0.0, 0.0),
                Waypoint::new(10.0, 10.0, 10.0, 10.0),
                Waypoint::new(20.0, 10.0, 20.0, 20.0),
            ],
        );
        assert_eq!(mission.time_span(), Some((0.0, 20.0)));
    }

    #[test]
    fn test_waypoint_finite_check() {
        assert!(Waypoint::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!Waypoint::new(f64::NAN, 2.0, 3.0, 4.0).is_finite());
        assert!(!Waypoint::new(1.0, 2.0, 3.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_conflict_display_and_json() {
        let conflict = Conflict {
            time: 10,
            location: (10.0, 9.5, 9.5),
            conflicting_mission_id: "Sim1".to_string(),
        };
        assert_eq!(
            conflict.to_string(),
            "Conflict at (10, 9.5, 9.5) with Sim1 around 10s"
        );
        let json = serde_json::to_value(&conflict).unwrap();
        assert_eq!(json["time"], 10);
        assert_eq!(json["location"], serde_json::json!([10.0, 9.5, 9.5]));
        assert_eq!(json["conflicting_mission_id"], "Sim1");
    }

    #[test]
    fn test_trajectory_serializes_as_list() {
        let trajectory = Trajectory::new(vec![SampledPoint::new(1.0, 2.0, 3.0, 0.0)]);
        let json = serde_json::to_value(&trajectory).unwrap();
        assert!(json.is_array());
        assert_eq!(trajectory.end_time(), Some(0.0));
    }
}
