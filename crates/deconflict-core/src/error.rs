//! Error types for mission sampling and conflict checks.

use thiserror::Error;

/// Errors raised when a sampling or detection call is given invalid input.
///
/// Every variant rejects the call before any sampling takes place, so a
/// caller holding an error knows no conflict list was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeconflictError {
    /// A tuning parameter was zero, negative, or not finite.
    #[error("invalid argument: {name} must be positive and finite, got {value}")]
    InvalidParameter {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A waypoint is timed earlier than the one before it.
    #[error("invalid argument: waypoint {index} at t={time} precedes previous waypoint at t={previous}")]
    NonMonotonicTime {
        /// Index of the offending waypoint.
        index: usize,
        /// Time of the preceding waypoint.
        previous: f64,
        /// Time of the offending waypoint.
        time: f64,
    },

    /// A waypoint carries a NaN or infinite coordinate or time.
    #[error("invalid argument: waypoint {index} has a non-finite coordinate or time")]
    NonFiniteWaypoint {
        /// Index of the offending waypoint.
        index: usize,
    },

    /// Sampling would produce more points than a trajectory may hold.
    #[error("invalid argument: segment {segment} pushes the trajectory past {limit} samples")]
    TooManySamples {
        /// Index of the segment where the limit was crossed.
        segment: usize,
        /// Maximum samples per trajectory.
        limit: usize,
    },

    /// Waypoint validation failed for a specific mission.
    #[error("mission {mission_id}: {source}")]
    Mission {
        mission_id: String,
        #[source]
        source: Box<DeconflictError>,
    },
}

impl DeconflictError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Attaches a mission id to a waypoint validation error.
    #[must_use]
    pub fn in_mission(self, mission_id: impl Into<String>) -> Self {
        Self::Mission {
            mission_id: mission_id.into(),
            source: Box::new(self),
        }
    }

    /// All variants are argument errors; a host should refuse to report a
    /// mission status when this returns true.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. }
                | Self::NonMonotonicTime { .. }
                | Self::NonFiniteWaypoint { .. }
                | Self::TooManySamples { .. }
                | Self::Mission { .. }
        )
    }

    /// Id of the mission the error was raised for, if known.
    pub fn mission_id(&self) -> Option<&str> {
        match self {
            Self::Mission { mission_id, .. } => Some(mission_id),
            _ => None,
        }
    }
}

/// Result type for deconfliction operations.
pub type Result<T> = std::result::Result<T, DeconflictError>;

/// Reject values that are not strictly positive and finite.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DeconflictError::invalid_parameter(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = DeconflictError::invalid_parameter("buffer_radius", -1.0);
        assert!(err.to_string().contains("buffer_radius"));
        assert!(err.to_string().contains("-1"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_mission_wrapper_keeps_source() {
        let err = DeconflictError::NonMonotonicTime {
            index: 2,
            previous: 10.0,
            time: 4.0,
        }
        .in_mission("Sim1");
        assert_eq!(err.mission_id(), Some("Sim1"));
        assert!(err.to_string().starts_with("mission Sim1:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("interval", 0.5).is_ok());
        assert!(ensure_positive("interval", 0.0).is_err());
        assert!(ensure_positive("interval", f64::NAN).is_err());
        assert!(ensure_positive("interval", f64::INFINITY).is_err());
    }
}
