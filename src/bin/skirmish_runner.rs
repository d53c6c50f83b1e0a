//! Headless Skirmish Runner
//!
//! Runs a cavern combat map through the baseline battle and/or the elf power
//! search and prints the scores as JSON or text.

use std::path::PathBuf;

use cavern_combat::battle::{load_from_text, render_with_hit_points, run_tuned, Outcome};
use cavern_combat::core::error::Result;
use clap::Parser;
use serde::Serialize;

/// Headless Skirmish Runner - score cavern combat maps
#[derive(Parser, Debug)]
#[command(name = "skirmish_runner")]
#[command(about = "Run a cavern combat map and print the battle scores")]
struct Args {
    /// Path to the map file (#, ., E, G rows)
    map: PathBuf,

    /// Scenario to run: baseline, tuned or both
    #[arg(long, default_value = "both")]
    scenario: String,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Enable verbose battle logging and final map rendering
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    baseline: Option<ScenarioReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tuned: Option<TunedReport>,
}

#[derive(Serialize)]
struct ScenarioReport {
    score: i64,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Serialize)]
struct TunedReport {
    score: i64,
    attack_power: i32,
    #[serde(flatten)]
    outcome: Outcome,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cavern_combat=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let map_text = std::fs::read_to_string(&args.map)?;

    let baseline = if args.scenario == "baseline" || args.scenario == "both" {
        let mut state = load_from_text(&map_text)?;
        let outcome = state.run_to_completion()?;
        if args.verbose {
            eprintln!("{}", render_with_hit_points(&state));
        }
        Some(outcome)
    } else {
        None
    };

    let tuned = if args.scenario == "tuned" || args.scenario == "both" {
        Some(run_tuned(&map_text)?)
    } else {
        None
    };

    match args.format.as_str() {
        "text" => {
            if let Some(outcome) = &baseline {
                println!(
                    "baseline: {:?} win after {} rounds, {} hit points left, score {}",
                    outcome.winner,
                    outcome.completed_rounds,
                    outcome.surviving_hit_points,
                    outcome.score()
                );
            }
            if let Some(tuned) = &tuned {
                println!(
                    "tuned:    elves win losslessly at attack power {}, score {}",
                    tuned.attack_power,
                    tuned.outcome.score()
                );
            }
        }
        _ => {
            let report = RunReport {
                baseline: baseline.map(|outcome| ScenarioReport {
                    score: outcome.score(),
                    outcome,
                }),
                tuned: tuned.map(|tuned| TunedReport {
                    score: tuned.outcome.score(),
                    attack_power: tuned.attack_power,
                    outcome: tuned.outcome,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
