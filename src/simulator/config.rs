//! Simulation configuration.

use crate::runner::Variant;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to simulate
    pub num_runs: u32,

    /// Base random seed; run `i` uses `seed + i` (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a run is stopped and counted as timed out
    pub max_ticks_per_run: u64,

    pub variant: Variant,

    /// Drive the character with the scripted autopilot; otherwise the
    /// character never acts
    pub autopilot: bool,

    /// Ticks of warning the autopilot wants before an obstacle arrives
    pub jump_lead_ticks: f64,

    /// Distance (px) at which the autopilot starts shooting
    pub fire_range: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_ticks_per_run: 100_000,
            variant: Variant::Classic,
            autopilot: true,
            jump_lead_ticks: 12.0,
            fire_range: 400.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch, handy for comparing tuning changes
    pub fn quick(variant: Variant) -> Self {
        Self {
            num_runs: 25,
            seed: Some(42),
            max_ticks_per_run: 20_000,
            variant,
            ..Default::default()
        }
    }
}
