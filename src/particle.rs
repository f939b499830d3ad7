//! A single cosmetic body in the particle field.

use glam::Vec2;
use rand::Rng;

use crate::config::BackdropConfig;

/// Pointer distance below which the repulsion impulse is skipped.
/// The impulse is normalized by distance; at zero distance the division
/// would put NaN into the velocity permanently.
const REPEL_EPSILON: f32 = 1e-3;

/// A point body with a visual radius and opacity.
///
/// Positions and velocities are in viewport pixels; the integration step is
/// one frame (velocities are per-frame displacements).
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle with randomized position, drift, radius and opacity.
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Vec2, config: &BackdropConfig) -> Self {
        let (r_min, r_max) = config.radius_range;
        let (o_min, o_max) = config.opacity_range;
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..viewport.x),
                rng.gen_range(0.0..viewport.y),
            ),
            velocity: Vec2::new(
                rng.gen_range(-config.spawn_speed..config.spawn_speed),
                rng.gen_range(-config.spawn_speed..config.spawn_speed),
            ),
            radius: rng.gen_range(r_min..r_max),
            opacity: rng.gen_range(o_min..o_max),
        }
    }

    /// Advance one frame: integrate, repel from the pointer, damp, bounce
    /// off the viewport edges and clamp back into bounds.
    pub fn step(&mut self, pointer: Vec2, viewport: Vec2, config: &BackdropConfig) {
        self.position += self.velocity;

        let to_pointer = pointer - self.position;
        let dist = to_pointer.length();
        if dist < config.repel_radius && dist > REPEL_EPSILON {
            let force = (config.repel_radius - dist) / config.repel_radius;
            self.velocity -= to_pointer / dist * force * config.repel_strength;
        }

        self.velocity *= config.damping;

        if self.position.x < 0.0 || self.position.x > viewport.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > viewport.y {
            self.velocity.y = -self.velocity.y;
        }

        self.position = self.position.clamp(Vec2::ZERO, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(position: Vec2, velocity: Vec2) -> Particle {
        Particle {
            position,
            velocity,
            radius: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_pointer_on_particle_keeps_velocity_finite() {
        let config = BackdropConfig::default();
        let viewport = Vec2::new(800.0, 600.0);
        let mut p = particle_at(Vec2::new(400.0, 300.0), Vec2::ZERO);

        // Pointer exactly where the particle lands after integration.
        p.step(Vec2::new(400.0, 300.0), viewport, &config);

        assert!(p.velocity.is_finite());
        assert!(p.position.is_finite());
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_pushes_away_from_pointer() {
        let config = BackdropConfig::default();
        let viewport = Vec2::new(800.0, 600.0);
        let mut p = particle_at(Vec2::new(400.0, 300.0), Vec2::ZERO);

        // Pointer 100px to the right, inside the repulsion radius.
        p.step(Vec2::new(500.0, 300.0), viewport, &config);

        assert!(p.velocity.x < 0.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn test_no_repulsion_outside_radius() {
        let config = BackdropConfig::default();
        let viewport = Vec2::new(800.0, 600.0);
        let mut p = particle_at(Vec2::new(100.0, 300.0), Vec2::ZERO);

        p.step(Vec2::new(100.0 + config.repel_radius, 300.0), viewport, &config);

        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_damping_shrinks_velocity() {
        let config = BackdropConfig::default();
        let viewport = Vec2::new(800.0, 600.0);
        let far_pointer = Vec2::new(10_000.0, 10_000.0);
        let mut p = particle_at(Vec2::new(400.0, 300.0), Vec2::new(0.2, -0.1));

        let mut last = p.velocity.length();
        for _ in 0..50 {
            p.step(far_pointer, viewport, &config);
            let speed = p.velocity.length();
            assert!(speed < last);
            last = speed;
        }
    }

    #[test]
    fn test_wall_bounce_reverses_crossed_axis() {
        let config = BackdropConfig::default();
        let viewport = Vec2::new(800.0, 600.0);
        let far_pointer = Vec2::new(10_000.0, 10_000.0);
        let mut p = particle_at(Vec2::new(0.5, 300.0), Vec2::new(-1.0, 0.0));

        p.step(far_pointer, viewport, &config);

        assert!(p.velocity.x > 0.0);
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn test_clamp_keeps_position_in_bounds() {
        let config = BackdropConfig::default();
        let viewport = Vec2::new(800.0, 600.0);
        let far_pointer = Vec2::new(10_000.0, 10_000.0);
        let mut p = particle_at(Vec2::new(799.0, 599.0), Vec2::new(5.0, 5.0));

        for _ in 0..10 {
            p.step(far_pointer, viewport, &config);
            assert!(p.position.x >= 0.0 && p.position.x <= viewport.x);
            assert!(p.position.y >= 0.0 && p.position.y <= viewport.y);
        }
    }
}
