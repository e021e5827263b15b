//! Check a primary mission against other planned missions.
//!
//! Exits 0 when clear, 1 when conflicts are found, 2 on invalid input.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use deconflict_cli::logging::init_tracing;
use deconflict_cli::{Config, MissionSet, ScenarioKind};
use deconflict_core::{
    ConflictDetector, Frame, MissionReport, Playback, SafetyRules, SearchStrategy,
};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Pre-flight conflict check for planned drone missions
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON file with a primary mission and other missions
    #[arg(long, conflicts_with = "scenario")]
    missions: Option<PathBuf>,

    /// Built-in scenario to check when no mission file is given
    #[arg(long, value_enum, default_value = "reference")]
    scenario: ScenarioKind,

    /// Minimum allowed separation (overrides DECONFLICT_BUFFER_RADIUS)
    #[arg(long)]
    buffer_radius: Option<f64>,

    /// Maximum time offset for simultaneous samples in seconds
    #[arg(long)]
    time_window: Option<f64>,

    /// Trajectory sample interval in seconds
    #[arg(long)]
    interval: Option<f64>,

    /// Pair search strategy: brute-force or time-indexed
    #[arg(long)]
    strategy: Option<SearchStrategy>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write playback frames as JSON to this file
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    checked_at: DateTime<Utc>,
    source: &'a str,
    primary_id: &'a str,
    rules: &'a SafetyRules,
    #[serde(flatten)]
    report: &'a MissionReport,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_tracing(args.log_json) {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Mission check failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let rules = resolve_rules(&args);

    let (source, set) = match &args.missions {
        Some(path) => (path.display().to_string(), MissionSet::load(path)?),
        None => {
            let scenario = args.scenario.build();
            (
                format!("scenario:{}", scenario.name),
                MissionSet {
                    primary: scenario.primary,
                    others: scenario.others,
                },
            )
        }
    };

    tracing::info!(
        source = %source,
        primary_id = %set.primary.id,
        others = set.others.len(),
        buffer_radius = rules.buffer_radius,
        time_window = rules.time_window,
        strategy = %rules.strategy,
        "Checking mission"
    );

    let report = ConflictDetector::new(rules)
        .check(&set.primary, &set.others)
        .context("mission check rejected")?;

    if let Some(path) = &args.frames {
        let playback = Playback::new(&set.primary, &set.others, rules)?;
        let frames: Vec<Frame> = playback.frames().collect();
        let json = serde_json::to_string_pretty(&frames)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write frames to {}", path.display()))?;
        tracing::info!(path = %path.display(), frames = frames.len(), "Wrote playback frames");
    }

    if args.json {
        let output = CheckOutput {
            checked_at: Utc::now(),
            source: &source,
            primary_id: &set.primary.id,
            rules: &rules,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{report}");
        for (mission_id, count) in report.counts_by_mission() {
            println!("  {mission_id}: {count} conflicting sample pairs");
        }
    }

    Ok(if report.is_clear() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn resolve_rules(args: &Args) -> SafetyRules {
    let config = Config::from_env();
    let mut rules = config.rules();
    if let Some(buffer_radius) = args.buffer_radius {
        rules = rules.with_buffer_radius(buffer_radius);
    }
    if let Some(time_window) = args.time_window {
        rules = rules.with_time_window(time_window);
    }
    if let Some(interval) = args.interval {
        rules = rules.with_sample_interval(interval);
    }
    if let Some(strategy) = args.strategy {
        rules = rules.with_strategy(strategy);
    }
    rules
}
