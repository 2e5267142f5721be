//! Dino Blast data structures.
//!
//! An endless runner: the character runs along the ground, jumps over
//! incoming obstacles and can shoot them down for bonus points. All
//! coordinates are logical pixels on an 800x300 surface, y grows downward.

use super::collision::Rect;
use super::tuning::{Size, Tuning};
use crate::constants::{
    CHARACTER_START_X, CHARACTER_START_Y, GROUND_TOP, PROJECTILE_HEIGHT, PROJECTILE_SPEED,
    PROJECTILE_WIDTH, SURFACE_WIDTH,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The two flavours of the game. They share every rule and differ only in
/// tuning and sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    Sky,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::Sky];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Variant::Classic)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Classic => 0,
            Self::Sky => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Sky => "Sky",
        }
    }

    /// Short description for the start menu.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Classic => "Steady pace, long reload",
            Self::Sky => "Fast obstacles, spaced spawns",
        }
    }

    /// Parse a CLI value (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "classic" | "1" => Some(Self::Classic),
            "sky" | "2" => Some(Self::Sky),
            _ => None,
        }
    }

    /// Built-in tuning preset.
    pub fn tuning(&self) -> Tuning {
        match self {
            Self::Classic => Tuning::classic(),
            Self::Sky => Tuning::sky(),
        }
    }
}

/// Obstacle size class. Picked with equal probability on spawn and used by
/// the renderer to choose a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleSize {
    Small,
    Large,
}

impl ObstacleSize {
    pub fn dimensions(&self, tuning: &Tuning) -> Size {
        match self {
            Self::Small => tuning.small_obstacle,
            Self::Large => tuning.large_obstacle,
        }
    }
}

/// The player-controlled runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels per tick, negative = upward.
    pub velocity_y: f64,
    pub on_ground: bool,
}

impl Character {
    pub fn new(size: Size) -> Self {
        Self {
            x: CHARACTER_START_X,
            y: CHARACTER_START_Y,
            width: size.width,
            height: size.height,
            velocity_y: 0.0,
            on_ground: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Lowest allowed y: feet resting on the ground bar.
    pub fn ground_y(&self) -> f64 {
        GROUND_TOP - self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub size: ObstacleSize,
}

impl Obstacle {
    /// A new obstacle standing on the ground just past the right edge.
    pub fn new(size: ObstacleSize, tuning: &Tuning) -> Self {
        let dims = size.dimensions(tuning);
        Self {
            x: SURFACE_WIDTH,
            y: GROUND_TOP - dims.height,
            width: dims.width,
            height: dims.height,
            size,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the obstacle has scrolled fully past the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rightward pixels per tick.
    pub speed: f64,
}

impl Projectile {
    /// Fired from the centre of the character.
    pub fn from_character(character: &Character) -> Self {
        Self {
            x: character.x + character.width / 2.0,
            y: character.y + character.height / 2.0,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: PROJECTILE_SPEED,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_off_screen(&self) -> bool {
        self.x >= SURFACE_WIDTH
    }
}

/// One play session: everything the tick, the input handler and the
/// renderer need.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub variant: Variant,
    pub tuning: Tuning,

    pub character: Character,
    /// Kept in spawn order.
    pub obstacles: Vec<Obstacle>,
    /// Kept in spawn order.
    pub projectiles: Vec<Projectile>,

    /// +1 per tick survived, plus a bonus per obstacle shot down.
    pub score: u64,
    pub obstacles_destroyed: u32,
    /// Ticks until the next shot is allowed (0 = ready).
    pub shoot_cooldown: u32,
    /// Ticks until spawning is allowed again. Only used when the tuning
    /// has a spawn gate.
    pub obstacle_cooldown: u32,
    pub game_over: bool,

    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    pub tick_count: u64,
}

impl RunnerGame {
    pub fn new(variant: Variant) -> Self {
        Self::with_tuning(variant, variant.tuning())
    }

    pub fn with_tuning(variant: Variant, tuning: Tuning) -> Self {
        Self {
            variant,
            character: Character::new(tuning.character),
            tuning,
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            obstacles_destroyed: 0,
            shoot_cooldown: 0,
            obstacle_cooldown: 0,
            game_over: false,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Back to a fresh session with the same variant and tuning.
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.variant, self.tuning.clone());
    }

    pub fn is_shot_ready(&self) -> bool {
        self.shoot_cooldown == 0
    }

    /// Push a new obstacle of random size class.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let size = if rng.gen_bool(0.5) {
            ObstacleSize::Small
        } else {
            ObstacleSize::Large
        };
        self.obstacles.push(Obstacle::new(size, &self.tuning));
    }
}
