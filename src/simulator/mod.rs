//! Headless balance simulator.
//!
//! Plays many seeded sessions back to back through the same `tick` the
//! terminal game uses, with an optional scripted player, to compare
//! tuning presets:
//! - How long a run survives
//! - How much of the score comes from shooting
//! - How often runs hit the tick cap

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::decide;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, run_simulation_with_progress, simulate_single_run};
