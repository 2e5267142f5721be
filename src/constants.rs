// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const TICKS_PER_SECOND: u64 = 60;
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 8;

// Logical drawing surface (pixels)
pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 300.0;
pub const GROUND_HEIGHT: f64 = 50.0;

// Character spawn point
pub const CHARACTER_START_X: f64 = 50.0;
pub const CHARACTER_START_Y: f64 = 200.0;

// Projectiles
pub const PROJECTILE_WIDTH: f64 = 10.0;
pub const PROJECTILE_HEIGHT: f64 = 5.0;
pub const PROJECTILE_SPEED: f64 = 10.0;

// Scoring
pub const SCORE_PER_TICK: u64 = 1;
pub const OBSTACLE_DESTROY_BONUS: u64 = 50;

// Key bindings (matched case-insensitively)
pub const JUMP_KEY: char = ' ';
pub const FIRE_KEY: char = 'a';
pub const RESTART_KEY: char = 'r';

/// Top edge of the ground bar; the character rests with its feet here.
pub const GROUND_TOP: f64 = SURFACE_HEIGHT - GROUND_HEIGHT;
