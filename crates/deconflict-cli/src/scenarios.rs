//! Pre-defined mission scenarios for testing.

use clap::ValueEnum;
use deconflict_core::{Mission, Waypoint};
use rand::Rng;

/// A named primary mission plus the traffic it is checked against.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub primary: Mission,
    pub others: Vec<Mission>,
}

/// Built-in scenarios selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioKind {
    /// Primary climbing through two simulated drones
    Reference,
    /// Two drones flying parallel paths 100 units apart
    Parallel,
    /// Two drones meeting head-on mid-route
    Crossing,
}

impl ScenarioKind {
    pub fn build(self) -> Scenario {
        match self {
            Self::Reference => create_reference_scenario(),
            Self::Parallel => create_parallel_scenario(),
            Self::Crossing => create_crossing_scenario(),
        }
    }
}

/// Primary climbs diagonally while Sim1 crosses it near t=10 and Sim2
/// sweeps back across its final leg.
pub fn create_reference_scenario() -> Scenario {
    let primary = Mission::new(
        "Primary",
        vec![
            Waypoint::new(0.0, 0.0, 0.0, 0.0),
            Waypoint::new(10.0, 10.0, 10.0, 10.0),
            Waypoint::new(20.0, 10.0, 20.0, 20.0),
        ],
    );
    let others = vec![
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
    Scenario {
        name: "reference".to_string(),
        primary,
        others,
    }
}

/// Create two drones flying parallel paths (no conflict).
pub fn create_parallel_scenario() -> Scenario {
    let separation = 100.0;
    let leg = |id: &str, y: f64| {
        Mission::new(
            id,
            vec![
                Waypoint::new(0.0, y, 15.0, 0.0),
                Waypoint::new(30.0, y, 15.0, 30.0),
            ],
        )
    };
    Scenario {
        name: "parallel".to_string(),
        primary: leg("DRONE001", 0.0),
        others: vec![leg("DRONE002", separation)],
    }
}

/// Create two drones on collision course, meeting at x=15 around t=15.
pub fn create_crossing_scenario() -> Scenario {
    Scenario {
        name: "crossing".to_string(),
        primary: Mission::new(
            "DRONE001",
            vec![
                Waypoint::new(0.0, 0.0, 20.0, 0.0),
                Waypoint::new(30.0, 0.0, 20.0, 30.0),
            ],
        ),
        others: vec![Mission::new(
            "DRONE002",
            vec![
                Waypoint::new(30.0, 0.0, 20.0, 0.0),
                Waypoint::new(0.0, 0.0, 20.0, 30.0),
            ],
        )],
    }
}

/// Generate `count` random missions inside a 100-unit cube, each with
/// 2-5 waypoints spread over `duration` seconds.
pub fn random_fleet(count: usize, duration: f64) -> Vec<Mission> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let legs = rng.random_range(1..=4);
            let mut times: Vec<f64> = (0..=legs)
                .map(|_| rng.random_range(0.0..duration))
                .collect();
            times.sort_by(f64::total_cmp);
            let waypoints = times
                .into_iter()
                .map(|time| {
                    Waypoint::new(
                        rng.random_range(0.0..100.0),
                        rng.random_range(0.0..100.0),
                        rng.random_range(0.0..100.0),
                        time,
                    )
                })
                .collect();
            Mission::new(format!("RAND{:03}", i + 1), waypoints)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deconflict_core::{check_mission, MissionStatus};

    #[test]
    fn test_reference_scenario_conflicts() {
        let scenario = ScenarioKind::Reference.build();
        let report = check_mission(&scenario.primary, &scenario.others, 5.0, 1.0).unwrap();
        assert_eq!(report.status, MissionStatus::ConflictDetected);
        assert_eq!(report.conflicts.len(), 20);
    }

    #[test]
    fn test_parallel_scenario_is_clear() {
        let scenario = ScenarioKind::Parallel.build();
        let report = check_mission(&scenario.primary, &scenario.others, 5.0, 1.0).unwrap();
        assert!(report.is_clear());
    }

    #[test]
    fn test_crossing_scenario_conflicts_mid_route() {
        let scenario = ScenarioKind::Crossing.build();
        let report = check_mission(&scenario.primary, &scenario.others, 5.0, 1.0).unwrap();
        assert!(!report.is_clear());
        assert!(report.conflicts.iter().all(|c| (13..=17).contains(&c.time)));
    }

    #[test]
    fn test_random_fleet_is_valid() {
        let fleet = random_fleet(8, 60.0);
        assert_eq!(fleet.len(), 8);
        for mission in &fleet {
            assert!((2..=5).contains(&mission.waypoints.len()));
            assert!(mission
                .waypoints
                .windows(2)
                .all(|pair| pair[0].time <= pair[1].time));
        }
        assert_eq!(fleet[0].id, "RAND001");
    }
}
