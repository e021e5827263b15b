//! Trajectory sampling: piecewise-linear reconstruction of a mission at a
//! fixed time step.

use tracing::debug;

use crate::error::{ensure_positive, DeconflictError, Result};
use crate::models::{Mission, SampledPoint, Trajectory, Waypoint};
use crate::spatial::lerp;

/// Upper bound on the samples in one trajectory.
pub const MAX_TRAJECTORY_SAMPLES: usize = 10_000_000;

/// Check that waypoints are finite and their times never decrease.
pub fn validate_waypoints(waypoints: &[Waypoint]) -> Result<()> {
    for (index, wp) in waypoints.iter().enumerate() {
        if !wp.is_finite() {
            return Err(DeconflictError::NonFiniteWaypoint { index });
        }
    }
    for (offset, pair) in waypoints.windows(2).enumerate() {
        if pair[1].time < pair[0].time {
            return Err(DeconflictError::NonMonotonicTime {
                index: offset + 1,
                previous: pair[0].time,
                time: pair[1].time,
            });
        }
    }
    Ok(())
}

/// Sample an ordered waypoint list every `interval` seconds.
///
/// Each segment contributes `steps + 1` points with
/// `steps = max(floor(duration / interval), 1)`, so both endpoints of every
/// segment are emitted and shared waypoints appear twice. Fewer than two
/// waypoints yield an empty trajectory. Missions needing more than
/// [`MAX_TRAJECTORY_SAMPLES`] points are rejected before anything is allocated.
pub fn sample(waypoints: &[Waypoint], interval: f64) -> Result<Trajectory> {
    ensure_positive("interval", interval)?;
    validate_waypoints(waypoints)?;

    let (plan, total) = plan_steps(waypoints, interval)?;
    let mut points = Vec::with_capacity(total);
    for (segment, steps) in waypoints.windows(2).zip(plan) {
        let (wp1, wp2) = (&segment[0], &segment[1]);

        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            points.push(SampledPoint {
                x: lerp(wp1.x, wp2.x, t),
                y: lerp(wp1.y, wp2.y, t),
                z: lerp(wp1.z, wp2.z, t),
                time: lerp(wp1.time, wp2.time, t),
            });
        }
    }

    Ok(Trajectory::new(points))
}

/// Sample a mission, tagging validation errors with its id.
pub fn sample_mission(mission: &Mission, interval: f64) -> Result<Trajectory> {
    let trajectory = sample(&mission.waypoints, interval).map_err(|err| match err {
        DeconflictError::InvalidParameter { .. } => err,
        other => other.in_mission(mission.id.as_str()),
    })?;
    debug!(
        mission_id = %mission.id,
        waypoints = mission.waypoints.len(),
        samples = trajectory.len(),
        "Sampled mission trajectory"
    );
    Ok(trajectory)
}

/// Interpolation steps per segment plus the total sample count.
///
/// A segment takes `max(floor(duration / interval), 1)` steps.
fn plan_steps(waypoints: &[Waypoint], interval: f64) -> Result<(Vec<usize>, usize)> {
    let limit = MAX_TRAJECTORY_SAMPLES;
    let mut plan = Vec::with_capacity(waypoints.len().saturating_sub(1));
    let mut total = 0usize;
    for (segment, pair) in waypoints.windows(2).enumerate() {
        let steps = ((pair[1].time - pair[0].time) / interval).floor().max(1.0);
        if steps >= limit as f64 {
            return Err(DeconflictError::TooManySamples { segment, limit });
        }
        let steps = steps as usize;
        total = total
            .checked_add(steps + 1)
            .filter(|&n| n <= limit)
            .ok_or(DeconflictError::TooManySamples { segment, limit })?;
        plan.push(steps);
    }
    Ok((plan, total))
}
