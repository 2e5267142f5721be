//! Dino Blast balance simulator CLI.
//!
//! Plays seeded sessions headlessly to compare tuning presets.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 200 autopilot runs, Classic
//!   cargo run --bin simulate -- --variant sky -s 7 # Reproducible Sky batch
//!   cargo run --bin simulate -- --idle             # Baseline without input

use dino_blast::runner::Variant;
use dino_blast::simulator::{run_simulation_with_progress, SimConfig};
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if config.verbosity >= 1 && !json {
        println!("DINO BLAST BALANCE SIMULATOR");
        println!();
        println!("Configuration:");
        println!("  Variant:    {}", config.variant.name());
        println!("  Runs:       {}", config.num_runs);
        println!("  Max Ticks:  {}", config.max_ticks_per_run);
        println!(
            "  Player:     {}",
            if config.autopilot { "autopilot" } else { "idle" }
        );
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        println!();
    }

    // stdout carries only the report so `--json` output stays parseable
    let report = run_simulation_with_progress(&config, &mut io::stderr());

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    // Pick the preset first so the other flags apply on top of it
    let mut config = if args.iter().any(|a| a == "--quick") {
        SimConfig::quick(Variant::Classic)
    } else {
        SimConfig::default()
    };
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--variant" => {
                if let Some(variant) = args.get(i + 1).and_then(|v| Variant::parse(v)) {
                    config.variant = variant;
                    i += 1;
                }
            }
            "--idle" => {
                config.autopilot = false;
            }
            "--quick" => {}
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Dino Blast Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of runs (default: 200)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -t, --ticks <T>         Max ticks per run (default: 100,000)");
    println!("    --variant <classic|sky> Tuning preset to play (default: classic)");
    println!("    --idle                  Never jump or fire (baseline)");
    println!("    --quick                 25 seeded runs, 20,000 tick cap");
    println!("    --json                  Print the report as JSON");
    println!("    -v, --verbose           One line per run");
    println!("    -h, --help              Show this help");
}
