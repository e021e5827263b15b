//! Stress the detector with random fleets and compare search strategies.

use anyhow::{ensure, Result};
use clap::Parser;
use deconflict_cli::scenarios::random_fleet;
use deconflict_cli::logging::init_tracing;
use deconflict_cli::Config;
use deconflict_core::{ConflictDetector, SearchStrategy};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fleet sizes to run, primary included
    #[arg(long, value_delimiter = ',', default_values_t = [2usize, 5, 10, 25])]
    fleets: Vec<usize>,

    /// Mission duration in seconds
    #[arg(long, default_value_t = 120.0)]
    duration: f64,

    /// Runs per fleet size
    #[arg(long, default_value_t = 3)]
    rounds: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(false)?;
    ensure!(args.duration > 0.0, "duration must be positive");
    let rules = Config::from_env().rules();

    for &size in &args.fleets {
        if size < 2 {
            continue;
        }
        println!("\n=== fleet of {} over {:.0}s ===", size, args.duration);
        for round in 1..=args.rounds {
            let mut fleet = random_fleet(size, args.duration);
            let primary = fleet.remove(0);

            let started = Instant::now();
            let brute = ConflictDetector::new(rules.with_strategy(SearchStrategy::BruteForce))
                .detect(&primary, &fleet)?;
            let brute_elapsed = started.elapsed();

            let started = Instant::now();
            let indexed = ConflictDetector::new(rules.with_strategy(SearchStrategy::TimeIndexed))
                .detect(&primary, &fleet)?;
            let indexed_elapsed = started.elapsed();

            ensure!(
                brute == indexed,
                "strategies disagree in round {round}: {} vs {} conflicts",
                brute.len(),
                indexed.len()
            );
            println!(
                "Round {}: conflicts={} brute-force={:.2?} time-indexed={:.2?}",
                round,
                brute.len(),
                brute_elapsed,
                indexed_elapsed
            );
        }
    }
    Ok(())
}
