//! Conflict detection module for mission deconfliction.
//!
//! Samples the primary mission and every other mission, then reports each
//! pair of samples that are close in both time and space.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Conflict, Mission, SampledPoint, Trajectory};
use crate::report::MissionReport;
use crate::rules::{SafetyRules, SearchStrategy};
use crate::spatial::{euclidean_distance, round_seconds, rounded_midpoint};
use crate::trajectory::sample_mission;

/// Pre-flight conflict detection engine.
///
/// Stateless apart from its rules; every call samples its inputs afresh and
/// hands the resulting conflict list to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector {
    rules: SafetyRules,
}

impl ConflictDetector {
    pub fn new(rules: SafetyRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SafetyRules {
        &self.rules
    }

    /// Report every sample pair where the primary comes within the buffer
    /// radius of another mission.
    ///
    /// Conflicts are ordered by other mission, then primary sample, then
    /// other sample. Overlapping pairs from one encounter are all reported.
    pub fn detect(&self, primary: &Mission, others: &[Mission]) -> Result<Vec<Conflict>> {
        self.rules.validate()?;

        // Sample everything up front so a bad mission rejects the whole call
        let primary_path = sample_mission(primary, self.rules.sample_interval)?;
        let other_paths = others
            .iter()
            .map(|other| sample_mission(other, self.rules.sample_interval))
            .collect::<Result<Vec<_>>>()?;

        let mut conflicts = Vec::new();
        for (other, other_path) in others.iter().zip(&other_paths) {
            let before = conflicts.len();
            self.scan_pair(&primary_path, other_path, &other.id, &mut conflicts);
            debug!(
                primary_id = %primary.id,
                other_id = %other.id,
                conflicts = conflicts.len() - before,
                "Checked mission pair"
            );
        }
        Ok(conflicts)
    }

    /// Run `detect` and summarize the outcome.
    pub fn check(&self, primary: &Mission, others: &[Mission]) -> Result<MissionReport> {
        match self.detect(primary, others) {
            Ok(conflicts) => Ok(MissionReport::from_conflicts(conflicts)),
            Err(err) => {
                warn!(primary_id = %primary.id, error = %err, "Mission check rejected");
                Err(err)
            }
        }
    }

    /// Compare one sampled primary against one sampled other mission.
    pub fn scan_pair(
        &self,
        primary: &Trajectory,
        other: &Trajectory,
        other_id: &str,
        out: &mut Vec<Conflict>,
    ) {
        match self.rules.strategy {
            SearchStrategy::BruteForce => {
                for p in primary {
                    for q in other {
                        self.test_pair(p, q, other_id, out);
                    }
                }
            }
            SearchStrategy::TimeIndexed => {
                let points = other.points();
                // Bounds are padded by a full window so interpolation rounding in
                // sample times never drops a candidate; the exact test decides.
                let slack = 2.0 * self.rules.time_window;
                for p in primary {
                    let start = points.partition_point(|q| q.time < p.time - slack);
                    let end = points.partition_point(|q| q.time <= p.time + slack);
                    if start >= end {
                        continue;
                    }
                    for q in &points[start..end] {
                        self.test_pair(p, q, other_id, out);
                    }
                }
            }
        }
    }

    fn test_pair(
        &self,
        p: &SampledPoint,
        q: &SampledPoint,
        other_id: &str,
        out: &mut Vec<Conflict>,
    ) {
        if (p.time - q.time).abs() > self.rules.time_window {
            return;
        }
        if euclidean_distance(p, q) < self.rules.buffer_radius {
            out.push(Conflict {
                time: round_seconds(p.time),
                location: rounded_midpoint(p, q),
                conflicting_mission_id: other_id.to_string(),
            });
        }
    }
}

/// Detect conflicts with the given thresholds and the default sample interval.
pub fn detect_conflicts(
    primary: &Mission,
    others: &[Mission],
    buffer_radius: f64,
    time_window: f64,
) -> Result<Vec<Conflict>> {
    let rules = SafetyRules::default()
        .with_buffer_radius(buffer_radius)
        .with_time_window(time_window);
    ConflictDetector::new(rules).detect(primary, others)
}

/// Check a primary mission against others: `clear` or `conflict detected`.
pub fn check_mission(
    primary: &Mission,
    others: &[Mission],
    buffer_radius: f64,
    time_window: f64,
) -> Result<MissionReport> {
    let rules = SafetyRules::default()
        .with_buffer_radius(buffer_radius)
        .with_time_window(time_window);
    ConflictDetector::new(rules).check(primary, others)
}
