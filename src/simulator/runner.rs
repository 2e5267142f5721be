//! Simulation driver: one seeded RNG per run, fixed ticks, no wall clock.

use super::autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::runner::{process_input, tick, RunnerGame, RunnerInput, TickOutcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use tracing::debug;

/// Run the full batch and return a report. Per-run progress lines are
/// discarded; use `run_simulation_with_progress` to see them.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    run_simulation_with_progress(config, &mut io::sink())
}

/// Run the full batch, writing one line per run to `progress` when
/// `verbosity >= 2`. The report itself is never written here, so
/// `progress` can be stderr while stdout carries only the report.
pub fn run_simulation_with_progress<W: Write>(config: &SimConfig, progress: &mut W) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            // Progress is best effort; a closed pipe must not abort the batch
            let _ = writeln!(
                progress,
                "Run {}/{} - Score {}, Ticks {}, Shot down {}, Jumps {}{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.obstacles_destroyed,
                stats.jumps,
                if stats.timed_out { " (timed out)" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(config.variant, all_runs)
}

/// Play one session until game over or the tick cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let tuning = config.variant.tuning();
    let mut game = RunnerGame::with_tuning(config.variant, tuning);
    let mut jumps = 0u32;
    let mut shots = 0u32;
    let mut timed_out = true;

    while game.tick_count < config.max_ticks_per_run {
        if config.autopilot {
            for input in autopilot::decide(&game, config.jump_lead_ticks, config.fire_range) {
                if process_input(&mut game, input) {
                    match input {
                        RunnerInput::Jump => jumps += 1,
                        RunnerInput::Fire => shots += 1,
                        RunnerInput::Restart | RunnerInput::Other => {}
                    }
                }
            }
        }

        if tick(&mut game, rng) == TickOutcome::GameOver {
            timed_out = false;
            break;
        }
    }

    debug!(
        variant = config.variant.name(),
        score = game.score,
        ticks = game.tick_count,
        timed_out,
        "simulated run finished"
    );

    RunStats {
        score: game.score,
        ticks: game.tick_count,
        obstacles_destroyed: game.obstacles_destroyed,
        jumps,
        shots,
        timed_out,
    }
}
