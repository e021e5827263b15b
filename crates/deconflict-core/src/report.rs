//! Mission check results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::Conflict;

/// Outcome of a mission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "conflict detected")]
    ConflictDetected,
}

impl MissionStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::ConflictDetected => "conflict detected",
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status plus the conflicts that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub status: MissionStatus,
    pub conflicts: Vec<Conflict>,
}

impl MissionReport {
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        let status = if conflicts.is_empty() {
            MissionStatus::Clear
        } else {
            MissionStatus::ConflictDetected
        };
        Self { status, conflicts }
    }

    pub fn is_clear(&self) -> bool {
        self.status == MissionStatus::Clear
    }

    pub fn into_parts(self) -> (MissionStatus, Vec<Conflict>) {
        (self.status, self.conflicts)
    }

    /// Conflict counts per other mission, sorted by id.
    pub fn counts_by_mission(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for conflict in &self.conflicts {
            *counts
                .entry(conflict.conflicting_mission_id.as_str())
                .or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}", self.status)?;
        for conflict in &self.conflicts {
            write!(f, "\n{conflict}")?;
        }
        Ok(())
    }
}
