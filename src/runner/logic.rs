//! Dino Blast game logic: input handling, the per-tick simulation step and
//! the fixed-step driver.

use super::collision::resolve_collisions;
use super::types::{Projectile, RunnerGame};
use crate::constants::{MAX_FRAME_DT_MS, SCORE_PER_TICK, TICKS_PER_SECOND, TICK_INTERVAL_MS};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,    // Space
    Fire,    // A
    Restart, // R
    Other,
}

/// Result of a simulation step. `GameOver` means the host should stop
/// scheduling ticks until the session is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GameOver,
}

/// Apply one input to the session. Returns true if the state changed.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput) -> bool {
    if game.game_over {
        if input == RunnerInput::Restart {
            let final_score = game.score;
            game.reset();
            info!(variant = game.variant.name(), final_score, "session restarted");
            return true;
        }
        return false;
    }

    match input {
        RunnerInput::Jump => {
            if !game.character.on_ground {
                return false;
            }
            game.character.velocity_y = game.tuning.jump_power;
            game.character.on_ground = false;
            true
        }
        RunnerInput::Fire => {
            if !game.is_shot_ready() {
                return false;
            }
            game.projectiles.push(Projectile::from_character(&game.character));
            game.shoot_cooldown = game.tuning.shoot_cooldown_ticks;
            debug!(tick = game.tick_count, "projectile fired");
            true
        }
        RunnerInput::Restart | RunnerInput::Other => false,
    }
}

/// Advance the session by exactly one tick.
pub fn tick<R: Rng>(game: &mut RunnerGame, rng: &mut R) -> TickOutcome {
    if game.game_over {
        return TickOutcome::GameOver;
    }
    game.tick_count += 1;

    // 1. Gravity and ground clamp
    let character = &mut game.character;
    character.velocity_y += game.tuning.gravity;
    character.y += character.velocity_y;
    let ground_y = character.ground_y();
    if character.y > ground_y {
        character.y = ground_y;
        character.velocity_y = 0.0;
        character.on_ground = true;
    }

    // 2. Spawning, optionally gated by the spawn cooldown
    let gated = game.tuning.obstacle_cooldown_ticks.is_some() && game.obstacle_cooldown > 0;
    if gated {
        game.obstacle_cooldown -= 1;
    } else if rng.gen_bool(game.tuning.spawn_chance) {
        game.spawn_obstacle(rng);
        if let Some(cooldown) = game.tuning.obstacle_cooldown_ticks {
            game.obstacle_cooldown = cooldown;
        }
        debug!(tick = game.tick_count, "obstacle spawned");
    }

    // 3. Scroll obstacles left
    let speed = game.tuning.obstacle_speed;
    for obstacle in &mut game.obstacles {
        obstacle.x -= speed;
    }
    game.obstacles.retain(|o| !o.is_off_screen());

    // 4. Projectiles fly right
    for projectile in &mut game.projectiles {
        projectile.x += projectile.speed;
    }
    game.projectiles.retain(|p| !p.is_off_screen());

    // 5. Shot reload
    game.shoot_cooldown = game.shoot_cooldown.saturating_sub(1);

    // 6. Survival point
    game.score += SCORE_PER_TICK;

    // 7. Collisions
    let report = resolve_collisions(game);
    if report.obstacles_destroyed > 0 {
        debug!(
            tick = game.tick_count,
            destroyed = report.obstacles_destroyed,
            score = game.score,
            "obstacle shot down"
        );
    }
    if report.character_hit {
        info!(
            variant = game.variant.name(),
            score = game.score,
            ticks = game.tick_count,
            "game over"
        );
        return TickOutcome::GameOver;
    }

    TickOutcome::Running
}

/// Advance by wall-clock time. `dt_ms` is the time since the last call;
/// whole ticks are stepped at `TICK_INTERVAL_MS` and the remainder is
/// carried over.
pub fn advance<R: Rng>(game: &mut RunnerGame, dt_ms: u64, rng: &mut R) -> TickOutcome {
    if game.game_over {
        return TickOutcome::GameOver;
    }

    // Clamp dt so a stalled terminal doesn't fast-forward the run
    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);

    while game.accumulated_time_ms >= TICK_INTERVAL_MS {
        game.accumulated_time_ms -= TICK_INTERVAL_MS;
        if tick(game, rng) == TickOutcome::GameOver {
            game.accumulated_time_ms = 0;
            return TickOutcome::GameOver;
        }
    }
    TickOutcome::Running
}

/// Shoot-cooldown indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    Ready,
    Reloading { seconds_left: u64 },
}

impl CooldownStatus {
    pub fn of(game: &RunnerGame) -> Self {
        if game.shoot_cooldown == 0 {
            Self::Ready
        } else {
            Self::Reloading {
                seconds_left: (game.shoot_cooldown as u64).div_ceil(TICKS_PER_SECOND),
            }
        }
    }
}

impl fmt::Display for CooldownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Shot ready!"),
            Self::Reloading { seconds_left } => write!(f, "Reloading... ({}s)", seconds_left),
        }
    }
}
