//! Mission set loading from JSON files.

use anyhow::{bail, Context, Result};
use deconflict_core::Mission;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A primary mission and the missions it must be checked against.
///
/// ```json
/// {
///   "primary": { "id": "Primary", "waypoints": [{ "x": 0, "y": 0, "z": 0, "time": 0 }] },
///   "others": [{ "id": "Sim1", "waypoints": [] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSet {
    pub primary: Mission,
    #[serde(default)]
    pub others: Vec<Mission>,
}

impl MissionSet {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read mission file {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("invalid mission file {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(raw)?;
        set.ensure_unique_ids()?;
        Ok(set)
    }

    fn ensure_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for mission in std::iter::once(&self.primary).chain(&self.others) {
            if mission.id.trim().is_empty() {
                bail!("mission id must not be empty");
            }
            if !seen.insert(mission.id.as_str()) {
                bail!("duplicate mission id: {}", mission.id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = r#"{
        "primary": {
            "id": "Primary",
            "waypoints": [
                {"x": 0, "y": 0, "z": 0, "time": 0},
                {"x": 10, "y": 10, "z": 10, "time": 10}
            ]
        },
        "others": [
            {"id": "Sim1", "waypoints": [{"x": 10, "y": 0, "z": 0, "time": 5}]},
            {"id": "Idle", "waypoints": []}
        ]
    }"#;

    #[test]
    fn test_parse_mission_set() {
        let set = MissionSet::from_json_str(REFERENCE).unwrap();
        assert_eq!(set.primary.id, "Primary");
        assert_eq!(set.primary.waypoints.len(), 2);
        assert_eq!(set.primary.waypoints[1].time, 10.0);
        assert_eq!(set.others.len(), 2);
        assert!(set.others[1].waypoints.is_empty());
    }

    #[test]
    fn test_others_default_to_empty() {
        let set = MissionSet::from_json_str(r#"{"primary": {"id": "Solo", "waypoints": []}}"#)
            .unwrap();
        assert!(set.others.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{
            "primary": {"id": "A", "waypoints": []},
            "others": [{"id": "B", "waypoints": []}, {"id": "A", "waypoints": []}]
        }"#;
        let err = MissionSet::from_json_str(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate mission id: A"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = MissionSet::load(Path::new("/nonexistent/missions.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/missions.json"));
    }
}
