//! Simulation report generation.

use crate::constants::{OBSTACLE_DESTROY_BONUS, TICKS_PER_SECOND};
use crate::runner::Variant;
use serde::Serialize;

/// Outcome of one simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub score: u64,
    pub ticks: u64,
    pub obstacles_destroyed: u32,
    pub jumps: u32,
    pub shots: u32,
    /// Stopped by the tick cap rather than a collision
    pub timed_out: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub variant: String,
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub min_score: u64,
    pub median_score: u64,
    pub max_score: u64,
    pub avg_ticks: f64,
    pub avg_obstacles_destroyed: f64,
    /// Share of all points that came from shooting obstacles (0.0 - 1.0)
    pub bonus_share: f64,
    /// Fraction of fired shots that destroyed something
    pub hit_rate: f64,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(variant: Variant, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let total_score: u64 = runs.iter().map(|r| r.score).sum();
        let total_destroyed: u64 = runs.iter().map(|r| r.obstacles_destroyed as u64).sum();
        let total_shots: u64 = runs.iter().map(|r| r.shots as u64).sum();

        let mut scores: Vec<u64> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();

        let bonus_points = total_destroyed * OBSTACLE_DESTROY_BONUS;
        let bonus_share = if total_score == 0 {
            0.0
        } else {
            bonus_points as f64 / total_score as f64
        };
        let hit_rate = if total_shots == 0 {
            0.0
        } else {
            total_destroyed as f64 / total_shots as f64
        };

        Self {
            variant: variant.name().to_string(),
            num_runs,
            runs_timed_out,
            avg_score: total_score as f64 / divisor,
            min_score: scores.first().copied().unwrap_or(0),
            median_score: scores.get(scores.len() / 2).copied().unwrap_or(0),
            max_score: scores.last().copied().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor,
            avg_obstacles_destroyed: total_destroyed as f64 / divisor,
            bonus_share,
            hit_rate,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("=== {} ({} runs) ===\n\n", self.variant, self.num_runs));

        report.push_str("SCORE\n");
        report.push_str(&format!("  Average: {:>10.1}\n", self.avg_score));
        report.push_str(&format!("  Min:     {:>10}\n", self.min_score));
        report.push_str(&format!("  Median:  {:>10}\n", self.median_score));
        report.push_str(&format!("  Max:     {:>10}\n\n", self.max_score));

        report.push_str("SURVIVAL\n");
        report.push_str(&format!(
            "  Avg Ticks:  {:>10.1} ({:.1}s)\n",
            self.avg_ticks,
            self.avg_ticks / TICKS_PER_SECOND as f64
        ));
        report.push_str(&format!(
            "  Timed Out:  {:>10} / {}\n\n",
            self.runs_timed_out, self.num_runs
        ));

        report.push_str("SHOOTING\n");
        report.push_str(&format!(
            "  Avg Shot Down: {:>7.2}\n",
            self.avg_obstacles_destroyed
        ));
        report.push_str(&format!("  Hit Rate:      {:>6.1}%\n", self.hit_rate * 100.0));
        report.push_str(&format!(
            "  Bonus Share:   {:>6.1}%\n",
            self.bonus_share * 100.0
        ));

        report
    }

    /// Export as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
