//! Per-variant tuning constants.
//!
//! Each variant ships a built-in preset. A complete `Tuning` can also be
//! loaded from a JSON file to experiment with the feel of the game without
//! recompiling; loaded values are validated before use.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Width and height of an entity in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// All numbers that shape a run. Velocities are in pixels per tick,
/// durations in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Added to the character's vertical velocity every tick.
    pub gravity: f64,
    /// Vertical velocity set by a jump (negative = upward).
    pub jump_power: f64,
    /// Leftward obstacle speed.
    pub obstacle_speed: f64,
    /// Ticks between shots.
    pub shoot_cooldown_ticks: u32,
    /// Ticks after a spawn during which no further obstacle may spawn.
    /// `None` disables the gate entirely.
    pub obstacle_cooldown_ticks: Option<u32>,
    /// Per-tick probability of spawning an obstacle.
    pub spawn_chance: f64,
    pub character: Size,
    pub small_obstacle: Size,
    pub large_obstacle: Size,
}

impl Tuning {
    /// Classic tuning: slower obstacles, long reload, no spawn gate.
    pub fn classic() -> Self {
        Self {
            gravity: 0.5,
            jump_power: -12.0,
            obstacle_speed: 5.0,
            shoot_cooldown_ticks: 180,
            obstacle_cooldown_ticks: None,
            spawn_chance: 0.015,
            character: Size::new(40.0, 60.0),
            small_obstacle: Size::new(30.0, 50.0),
            large_obstacle: Size::new(60.0, 70.0),
        }
    }

    /// The faster retune with a spawn gate so obstacles never overlap.
    pub fn sky() -> Self {
        Self {
            gravity: 0.5,
            jump_power: -10.0,
            obstacle_speed: 9.0,
            shoot_cooldown_ticks: 130,
            obstacle_cooldown_ticks: Some(25),
            spawn_chance: 0.015,
            character: Size::new(50.0, 50.0),
            small_obstacle: Size::new(50.0, 50.0),
            large_obstacle: Size::new(70.0, 70.0),
        }
    }

    /// Reject values that would make the simulation meaningless.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: &str| Err(io::Error::new(io::ErrorKind::InvalidInput, msg.to_string()));

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return invalid("gravity must be a positive number");
        }
        if !(self.jump_power.is_finite() && self.jump_power < 0.0) {
            return invalid("jump_power must be negative (upward)");
        }
        if !(self.obstacle_speed.is_finite() && self.obstacle_speed > 0.0) {
            return invalid("obstacle_speed must be a positive number");
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return invalid("spawn_chance must be within 0.0..=1.0");
        }
        for (name, size) in [
            ("character", self.character),
            ("small_obstacle", self.small_obstacle),
            ("large_obstacle", self.large_obstacle),
        ] {
            if !(size.width > 0.0 && size.height > 0.0) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} size must be positive", name),
                ));
            }
        }
        Ok(())
    }

    /// Load and validate a tuning file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Pretty JSON, suitable as a starting point for a tuning file.
    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_presets_are_valid() {
        assert!(Tuning::classic().validate().is_ok());
        assert!(Tuning::sky().validate().is_ok());
    }

    #[test]
    fn test_presets_differ_only_in_tuning() {
        let classic = Tuning::classic();
        let sky = Tuning::sky();
        assert_eq!(classic.gravity, sky.gravity);
        assert_eq!(classic.spawn_chance, sky.spawn_chance);
        assert!(classic.obstacle_cooldown_ticks.is_none());
        assert_eq!(sky.obstacle_cooldown_ticks, Some(25));
        assert!(sky.obstacle_speed > classic.obstacle_speed);
    }

    #[test]
    fn test_validate_rejects_upward_gravity() {
        let tuning = Tuning {
            gravity: -0.5,
            ..Tuning::classic()
        };
        let err = tuning.validate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_downward_jump() {
        let tuning = Tuning {
            jump_power: 4.0,
            ..Tuning::sky()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_spawn_chance() {
        let tuning = Tuning {
            spawn_chance: 1.5,
            ..Tuning::classic()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_sprite() {
        let tuning = Tuning {
            large_obstacle: Size::new(0.0, 70.0),
            ..Tuning::classic()
        };
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("large_obstacle"));
    }

    #[test]
    fn test_load_from_file() {
        let custom = Tuning {
            obstacle_speed: 7.5,
            ..Tuning::classic()
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(custom.to_json().unwrap().as_bytes()).unwrap();

        let loaded = Tuning::load(file.path()).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn test_load_malformed_json_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Tuning::load(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = Tuning::load(Path::new("/nonexistent/dino_blast_tuning.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
