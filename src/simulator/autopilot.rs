//! Scripted player used by the simulator.
//!
//! Looks at the nearest obstacle ahead of the character and decides
//! whether to fire or jump this tick. It only reads the session.

use crate::runner::{RunnerGame, RunnerInput};

/// Inputs the autopilot wants to send before the next tick.
pub fn decide(game: &RunnerGame, jump_lead_ticks: f64, fire_range: f64) -> Vec<RunnerInput> {
    let mut inputs = Vec::new();
    let character_right = game.character.x + game.character.width;

    let nearest = game
        .obstacles
        .iter()
        .filter(|o| o.x + o.width > game.character.x)
        .map(|o| o.x - character_right)
        .fold(f64::INFINITY, f64::min);

    if !nearest.is_finite() {
        return inputs;
    }

    if game.is_shot_ready() && nearest > 0.0 && nearest <= fire_range {
        inputs.push(RunnerInput::Fire);
    }

    let jump_distance = game.tuning.obstacle_speed * jump_lead_ticks;
    if game.character.on_ground && nearest <= jump_distance {
        inputs.push(RunnerInput::Jump);
    }

    inputs
}
