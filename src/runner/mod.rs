//! The endless-runner simulation: data model, tuning, collisions and the
//! tick loop. Nothing in here touches the terminal.

pub mod collision;
pub mod logic;
pub mod tuning;
pub mod types;

pub use collision::{CollisionReport, Rect};
pub use logic::{advance, process_input, tick, CooldownStatus, RunnerInput, TickOutcome};
pub use tuning::{Size, Tuning};
pub use types::{Character, Obstacle, ObstacleSize, Projectile, RunnerGame, Variant};
