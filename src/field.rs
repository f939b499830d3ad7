//! The particle pool and its per-frame physics.
//!
//! A [`ParticleField`] owns a fixed pool of [`Particle`]s, created once and
//! mutated in place for the lifetime of the scene. The pool size comes from
//! the startup viewport class (30 compact, 100 wide).

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BackdropConfig;
use crate::particle::Particle;

/// Alpha scale applied to connection links at zero distance.
const LINK_ALPHA: f32 = 0.2;

/// Opacity bounds used when a particle twinkles.
const TWINKLE_RANGE: (f32, f32) = (0.2, 1.0);

/// A visual link between two particles within connection range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

/// Fixed pool of mutually-interacting point bodies.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field with a randomly seeded pool.
    pub fn new(config: &BackdropConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a field with a fixed seed, for deterministic stepping.
    pub fn with_seed(config: &BackdropConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &BackdropConfig, mut rng: StdRng) -> Self {
        let particles = (0..config.particle_count())
            .map(|_| Particle::spawn(&mut rng, config.viewport, config))
            .collect();
        Self { particles, rng }
    }

    /// Build a field from an explicit pool.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            rng: StdRng::from_entropy(),
        }
    }

    /// The current pool.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle one frame against the current pointer.
    pub fn step(&mut self, pointer: Vec2, viewport: Vec2, config: &BackdropConfig) {
        for particle in &mut self.particles {
            particle.step(pointer, viewport, config);
        }
    }

    /// Re-randomize the opacity of one randomly chosen particle.
    pub fn twinkle(&mut self) {
        if self.particles.is_empty() {
            return;
        }
        let index = self.rng.gen_range(0..self.particles.len());
        let (min, max) = TWINKLE_RANGE;
        self.particles[index].opacity = self.rng.gen_range(min..max);
    }

    /// Links between all particle pairs within connection range.
    ///
    /// All-pairs scan, quadratic in pool size. Pools here stay at 100 or
    /// below; anything much larger would need a spatial index.
    pub fn links(&self, config: &BackdropConfig) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].position;
                let b = self.particles[j].position;
                let dist = a.distance(b);
                if dist < config.connect_radius {
                    links.push(Link {
                        a,
                        b,
                        alpha: (1.0 - dist / config.connect_radius) * LINK_ALPHA,
                    });
                }
            }
        }
        links
    }
}
