//! Platformer Physics
//!
//! One gravity-and-collision step per tick for the player body against the
//! level's static obstacles. Velocities are in world units per tick, so the
//! frame delta never enters here.

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::core::aabb::Aabb;
use crate::game::body::Body;

/// Advances a movable body through a set of static obstacles.
pub trait PhysicsStepper {
    /// Take tunables from the session config. Called on every setup.
    fn configure(&mut self, _config: &PhysicsConfig) {}

    /// Apply gravity and move `body` one tick, resolving overlaps with
    /// `obstacles`.
    fn step(&mut self, body: &mut Body, gravity: f32, obstacles: &[Aabb]);

    /// Whether `body` currently rests on one of `obstacles`.
    fn is_grounded(&self, body: &Body, obstacles: &[Aabb]) -> bool;
}

/// Side-scrolling platformer rules: vertical sweep first, then horizontal,
/// each snapping the body flush against whatever it ran into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformerPhysics {
    /// Distance below the body probed by [`PhysicsStepper::is_grounded`]
    pub ground_probe: f32,
}

impl Default for PlatformerPhysics {
    fn default() -> Self {
        Self { ground_probe: 5.0 }
    }
}

impl PlatformerPhysics {
    /// Physics with a custom ground probe distance.
    pub fn new(ground_probe: f32) -> Self {
        Self { ground_probe }
    }
}

/// Obstacles overlapping `bounds`.
fn hits<'a>(bounds: Aabb, obstacles: &'a [Aabb]) -> impl Iterator<Item = &'a Aabb> + 'a {
    obstacles.iter().filter(move |o| bounds.overlaps(o))
}

impl PhysicsStepper for PlatformerPhysics {
    fn configure(&mut self, config: &PhysicsConfig) {
        self.ground_probe = config.ground_probe;
    }

    fn step(&mut self, body: &mut Body, gravity: f32, obstacles: &[Aabb]) {
        let half = body.size * 0.5;

        // 1. Gravity
        body.velocity.y -= gravity;

        // 2. Vertical move
        body.position.y += body.velocity.y;
        let blocking: Vec<Aabb> = hits(body.bounds(), obstacles).copied().collect();
        if !blocking.is_empty() {
            if body.velocity.y < 0.0 {
                let top = blocking.iter().map(Aabb::top).fold(f32::NEG_INFINITY, f32::max);
                body.position.y = top + half.y;
            } else if body.velocity.y > 0.0 {
                let bottom = blocking.iter().map(Aabb::bottom).fold(f32::INFINITY, f32::min);
                body.position.y = bottom - half.y;
            }
            body.velocity.y = 0.0;
        }

        // 3. Horizontal move
        if body.velocity.x == 0.0 {
            return;
        }
        body.position.x += body.velocity.x;
        let blocking: Vec<Aabb> = hits(body.bounds(), obstacles).copied().collect();
        if blocking.is_empty() {
            return;
        }
        if body.velocity.x > 0.0 {
            let left = blocking.iter().map(Aabb::left).fold(f32::INFINITY, f32::min);
            body.position.x = left - half.x;
        } else {
            let right = blocking.iter().map(Aabb::right).fold(f32::NEG_INFINITY, f32::max);
            body.position.x = right + half.x;
        }
    }

    fn is_grounded(&self, body: &Body, obstacles: &[Aabb]) -> bool {
        let probe = body.bounds().translated(Vec2::new(0.0, -self.ground_probe));
        hits(probe, obstacles).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::assets::SpriteAsset;

    fn ground() -> Vec<Aabb> {
        (0..10)
            .map(|i| Aabb::from_center_size(Vec2::new(i as f32 * 64.0, 32.0), Vec2::splat(64.0)))
            .collect()
    }

    fn player_at(x: f32, y: f32) -> Body {
        Body::new(SpriteAsset::Player, Vec2::new(x, y), Vec2::new(67.2, 89.6))
    }

    #[test]
    fn test_falls_without_ground() {
        let mut physics = PlatformerPhysics::default();
        let mut player = player_at(0.0, 500.0);

        physics.step(&mut player, 1.0, &[]);
        assert_eq!(player.velocity.y, -1.0);
        assert_eq!(player.position.y, 499.0);

        physics.step(&mut player, 1.0, &[]);
        assert_eq!(player.position.y, 497.0);
        assert!(!physics.is_grounded(&player, &[]));
    }

    #[test]
    fn test_lands_flush_on_ground() {
        let mut physics = PlatformerPhysics::default();
        let walls = ground();
        let mut player = player_at(64.0, 109.0);

        for _ in 0..5 {
            physics.step(&mut player, 1.0, &walls);
        }

        assert_eq!(player.velocity.y, 0.0);
        assert!((player.bounds().bottom() - 64.0).abs() < 1e-3);
        assert!(physics.is_grounded(&player, &walls));
    }

    #[test]
    fn test_walks_along_ground_without_snagging() {
        let mut physics = PlatformerPhysics::default();
        let walls = ground();
        let mut player = player_at(64.0, 109.0);
        player.velocity.x = 5.0;

        for _ in 0..20 {
            physics.step(&mut player, 1.0, &walls);
        }

        assert!((player.position.x - 164.0).abs() < 1e-3);
    }

    #[test]
    fn test_blocked_by_wall_on_the_right() {
        let mut physics = PlatformerPhysics::default();
        let mut walls = ground();
        walls.push(Aabb::from_center_size(Vec2::new(320.0, 96.0), Vec2::splat(64.0)));
        let mut player = player_at(200.0, 108.8);
        player.velocity.x = 5.0;

        for _ in 0..40 {
            physics.step(&mut player, 1.0, &walls);
        }

        // Crate's left edge is at 288
        assert!((player.bounds().right() - 288.0).abs() < 1e-3);
        assert_eq!(player.velocity.x, 5.0);
    }

    #[test]
    fn test_configured_probe_reaches_further() {
        let walls = ground();
        // Feet 10 units above the ground top
        let player = player_at(64.0, 118.8);
        let mut physics = PlatformerPhysics::default();
        assert!(!physics.is_grounded(&player, &walls));

        physics.configure(&PhysicsConfig { ground_probe: 12.0, ..PhysicsConfig::default() });
        assert!(physics.is_grounded(&player, &walls));
    }

    #[test]
    fn test_head_bump_stops_rise() {
        let mut physics = PlatformerPhysics::default();
        let ceiling = [Aabb::from_center_size(Vec2::new(0.0, 200.0), Vec2::splat(64.0))];
        let mut player = player_at(0.0, 100.0);
        player.velocity.y = 40.0;

        physics.step(&mut player, 1.0, &ceiling);

        assert_eq!(player.velocity.y, 0.0);
        assert!((player.bounds().top() - 168.0).abs() < 1e-3);
    }
}
