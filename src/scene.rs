//! The backdrop scene: everything the driver advances once per frame.
//!
//! [`Backdrop`] owns all simulation state (particle pool, grid offset,
//! cursor glow, twinkle cadence). The windowed driver calls
//! [`Backdrop::tick`] once per display frame; tests call it any number of
//! times with synthetic [`FrameInput`]s.

use glam::Vec2;

use crate::config::BackdropConfig;
use crate::field::ParticleField;
use crate::grid::GridOverlay;
use crate::time::Ticker;

/// Per-frame snapshot of the environment the simulation reads.
///
/// Pointer and scroll are whatever the event handlers last recorded; the
/// tick reads them once at frame start, so they are at most one frame stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Last observed pointer position, viewport pixels.
    pub pointer: Vec2,
    /// Accumulated page-scroll offset, pixels, never negative.
    pub scroll: f32,
    /// Current viewport size, pixels.
    pub viewport: Vec2,
}

/// Soft glow trailing the pointer with exponential smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGlow {
    position: Vec2,
}

impl CursorGlow {
    fn new() -> Self {
        Self {
            position: Vec2::ZERO,
        }
    }

    /// Current glow center, viewport pixels.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    fn follow(&mut self, pointer: Vec2, smoothing: f32) {
        self.position += (pointer - self.position) * smoothing;
    }
}

/// The full backdrop simulation state.
pub struct Backdrop {
    pub config: BackdropConfig,
    field: ParticleField,
    grid: GridOverlay,
    glow: CursorGlow,
    twinkle: Ticker,
}

impl Backdrop {
    /// Create a scene with a randomly seeded particle pool.
    pub fn new(config: BackdropConfig) -> Self {
        let field = ParticleField::new(&config);
        Self::from_parts(config, field)
    }

    /// Create a scene with a fixed seed, for deterministic stepping.
    pub fn with_seed(config: BackdropConfig, seed: u64) -> Self {
        let field = ParticleField::with_seed(&config, seed);
        Self::from_parts(config, field)
    }

    fn from_parts(config: BackdropConfig, field: ParticleField) -> Self {
        let twinkle = Ticker::new(config.twinkle_interval);
        Self {
            config,
            field,
            grid: GridOverlay::new(),
            glow: CursorGlow::new(),
            twinkle,
        }
    }

    /// The particle pool.
    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The grid overlay.
    #[inline]
    pub fn grid(&self) -> &GridOverlay {
        &self.grid
    }

    /// The cursor glow.
    #[inline]
    pub fn glow(&self) -> &CursorGlow {
        &self.glow
    }

    /// Advance the scene one frame.
    ///
    /// Particle physics uses an implicit one-frame timestep (velocities are
    /// per-frame displacements); `dt` only drives the twinkle cadence, which
    /// runs on wall time rather than frame count.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) {
        self.field.step(input.pointer, input.viewport, &self.config);

        for _ in 0..self.twinkle.fire(dt) {
            self.field.twinkle();
        }

        self.grid.advance(&self.config);
        self.glow.follow(input.pointer, self.config.glow_smoothing);
    }
}
