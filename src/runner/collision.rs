//! Axis-aligned bounding boxes and collision resolution.

use super::types::RunnerGame;
use crate::constants::OBSTACLE_DESTROY_BONUS;

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do
    /// not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// What the resolver did during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub character_hit: bool,
    pub obstacles_destroyed: u32,
}

/// True if the character touches any obstacle.
pub fn character_hits_obstacle(game: &RunnerGame) -> bool {
    let body = game.character.bounds();
    game.obstacles.iter().any(|o| body.overlaps(&o.bounds()))
}

/// Remove every projectile that hits an obstacle together with the first
/// obstacle it hits. A projectile resolves at most one obstacle per pass.
/// Returns the number of obstacles destroyed.
pub fn resolve_projectile_hits(game: &mut RunnerGame) -> u32 {
    let RunnerGame {
        projectiles,
        obstacles,
        ..
    } = game;

    let mut destroyed = 0;
    projectiles.retain(|projectile| {
        let shot = projectile.bounds();
        match obstacles.iter().position(|o| shot.overlaps(&o.bounds())) {
            Some(index) => {
                obstacles.remove(index);
                destroyed += 1;
                false
            }
            None => true,
        }
    });
    destroyed
}

/// Full collision pass: character first (sets game over), then
/// projectiles (award the destroy bonus).
pub fn resolve_collisions(game: &mut RunnerGame) -> CollisionReport {
    let character_hit = character_hits_obstacle(game);
    if character_hit {
        game.game_over = true;
    }

    let obstacles_destroyed = resolve_projectile_hits(game);
    if obstacles_destroyed > 0 {
        game.score += OBSTACLE_DESTROY_BONUS * obstacles_destroyed as u64;
        game.obstacles_destroyed += obstacles_destroyed;
    }

    CollisionReport {
        character_hit,
        obstacles_destroyed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::{Obstacle, ObstacleSize, Projectile, Variant};

    fn projectile_at(x: f64, y: f64) -> Projectile {
        Projectile {
            x,
            y,
            width: 10.0,
            height: 5.0,
            speed: 10.0,
        }
    }

    fn obstacle_at(game: &RunnerGame, x: f64) -> Obstacle {
        let mut obstacle = Obstacle::new(ObstacleSize::Small, &game.tuning);
        obstacle.x = x;
        obstacle
    }

    // ── Rect ──

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_disjoint_x_never_collides_despite_y_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 100.0);
        let b = Rect::new(20.0, 0.0, 10.0, 100.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_y_never_collides_despite_x_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 10.0);
        let b = Rect::new(0.0, 30.0, 100.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    // ── Resolution ──

    #[test]
    fn test_character_hit_sets_game_over() {
        let mut game = RunnerGame::new(Variant::Classic);
        game.character.y = game.character.ground_y();
        let obstacle = obstacle_at(&game, game.character.x + 10.0);
        game.obstacles.push(obstacle);

        let report = resolve_collisions(&mut game);

        assert!(report.character_hit);
        assert!(game.game_over);
    }

    #[test]
    fn test_character_clears_obstacle_when_airborne() {
        let mut game = RunnerGame::new(Variant::Classic);
        let obstacle = obstacle_at(&game, game.character.x);
        // Feet exactly at the obstacle's top edge.
        game.character.y = obstacle.y - game.character.height;
        game.obstacles.push(obstacle);

        assert!(!character_hits_obstacle(&game));
    }

    #[test]
    fn test_projectile_destroys_one_obstacle() {
        let mut game = RunnerGame::new(Variant::Classic);
        let obstacle = obstacle_at(&game, 400.0);
        let y = obstacle.y + 10.0;
        game.obstacles.push(obstacle);
        game.projectiles.push(projectile_at(395.0, y));

        let report = resolve_collisions(&mut game);

        assert_eq!(report.obstacles_destroyed, 1);
        assert!(!report.character_hit);
        assert!(game.obstacles.is_empty());
        assert!(game.projectiles.is_empty());
        assert_eq!(game.score, OBSTACLE_DESTROY_BONUS);
        assert_eq!(game.obstacles_destroyed, 1);
    }

    #[test]
    fn test_projectile_resolves_only_first_obstacle() {
        let mut game = RunnerGame::new(Variant::Classic);
        // Two overlapping obstacles under the same shot.
        let first = obstacle_at(&game, 400.0);
        let second = obstacle_at(&game, 405.0);
        let y = first.y + 10.0;
        game.obstacles.push(first);
        game.obstacles.push(second);
        game.projectiles.push(projectile_at(402.0, y));

        let destroyed = resolve_projectile_hits(&mut game);

        assert_eq!(destroyed, 1);
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.obstacles[0].x, 405.0, "the earlier-spawned obstacle goes first");
        assert!(game.projectiles.is_empty());
    }

    #[test]
    fn test_two_projectiles_two_obstacles() {
        let mut game = RunnerGame::new(Variant::Classic);
        let first = obstacle_at(&game, 300.0);
        let second = obstacle_at(&game, 600.0);
        let y = first.y + 10.0;
        game.obstacles.push(first);
        game.obstacles.push(second);
        game.projectiles.push(projectile_at(305.0, y));
        game.projectiles.push(projectile_at(605.0, y));

        let report = resolve_collisions(&mut game);

        assert_eq!(report.obstacles_destroyed, 2);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.score, 2 * OBSTACLE_DESTROY_BONUS);
    }

    #[test]
    fn test_missing_projectile_survives() {
        let mut game = RunnerGame::new(Variant::Classic);
        let obstacle = obstacle_at(&game, 400.0);
        game.obstacles.push(obstacle);
        // Well above the obstacle.
        game.projectiles.push(projectile_at(402.0, 10.0));

        let report = resolve_collisions(&mut game);

        assert_eq!(report, CollisionReport::default());
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.projectiles.len(), 1);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_character_hit_checked_before_projectiles() {
        let mut game = RunnerGame::new(Variant::Classic);
        game.character.y = game.character.ground_y();
        let obstacle = obstacle_at(&game, game.character.x + 5.0);
        let y = obstacle.y + 10.0;
        game.obstacles.push(obstacle);
        game.projectiles.push(projectile_at(game.character.x + 6.0, y));

        let report = resolve_collisions(&mut game);

        assert!(report.character_hit);
        assert!(game.game_over);
        assert_eq!(report.obstacles_destroyed, 1);
    }
}
