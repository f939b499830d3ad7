//! Backdrop configuration.
//!
//! All tunables live in [`BackdropConfig`], built with method chaining:
//!
//! ```ignore
//! let config = BackdropConfig::default()
//!     .with_viewport(Vec2::new(1920.0, 1080.0))
//!     .with_accent(Vec3::new(1.0, 0.2, 0.6));
//! ```
//!
//! The viewport handed to the config at startup decides the
//! [`ViewportClass`], which fixes the particle pool size and the grid cell
//! for the whole session. Later resizes change the drawing surface but not
//! the class.

use std::time::Duration;

use glam::{Vec2, Vec3};

/// Viewport size class, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Initial width at or below the mobile threshold.
    Compact,
    /// Everything wider.
    Wide,
}

/// Tunables for the backdrop simulation and rendering.
#[derive(Debug, Clone)]
pub struct BackdropConfig {
    /// Initial viewport size in logical pixels.
    pub viewport: Vec2,
    /// Width at or below which the viewport counts as [`ViewportClass::Compact`].
    pub mobile_width: f32,
    /// Pool size for compact viewports.
    pub compact_particles: usize,
    /// Pool size for wide viewports.
    pub wide_particles: usize,
    /// Pointer distance within which particles are pushed away.
    pub repel_radius: f32,
    /// Scale applied to the repulsion impulse.
    pub repel_strength: f32,
    /// Particle distance within which a connection link is drawn.
    pub connect_radius: f32,
    /// Per-frame velocity multiplier.
    pub damping: f32,
    /// Spawn velocity bound per axis (uniform in `[-spawn_speed, spawn_speed]`).
    pub spawn_speed: f32,
    /// Spawn radius bounds.
    pub radius_range: (f32, f32),
    /// Spawn opacity bounds.
    pub opacity_range: (f32, f32),
    /// Grid cell size for compact viewports.
    pub compact_cell: f32,
    /// Grid cell size for wide viewports.
    pub wide_cell: f32,
    /// Grid offset advance per frame.
    pub grid_step: f32,
    /// Alpha of the grid lines.
    pub grid_alpha: f32,
    /// Scroll-to-offset factor applied to horizontal grid lines.
    pub parallax: f32,
    /// Cadence of the opacity twinkle.
    pub twinkle_interval: Duration,
    /// Per-frame interpolation factor of the cursor glow.
    pub glow_smoothing: f32,
    /// Accent color shared by particles, links, grid and glow (linear RGB).
    pub accent: Vec3,
}

impl BackdropConfig {
    /// Create a config with the landing-screen defaults.
    pub fn new() -> Self {
        Self {
            viewport: Vec2::new(1280.0, 720.0),
            mobile_width: 768.0,
            compact_particles: 30,
            wide_particles: 100,
            repel_radius: 150.0,
            repel_strength: 0.2,
            connect_radius: 120.0,
            damping: 0.99,
            spawn_speed: 0.25,
            radius_range: (1.0, 3.0),
            opacity_range: (0.2, 0.7),
            compact_cell: 60.0,
            wide_cell: 40.0,
            grid_step: 0.2,
            grid_alpha: 0.1,
            parallax: 0.3,
            twinkle_interval: Duration::from_millis(200),
            glow_smoothing: 0.1,
            accent: Vec3::new(0.0, 0.94, 1.0),
        }
    }

    /// Set the initial viewport size.
    pub fn with_viewport(mut self, viewport: Vec2) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the accent color (linear RGB, 0.0-1.0).
    pub fn with_accent(mut self, accent: Vec3) -> Self {
        self.accent = accent;
        self
    }

    /// Set the twinkle cadence.
    pub fn with_twinkle_interval(mut self, interval: Duration) -> Self {
        self.twinkle_interval = interval;
        self
    }

    /// The viewport class decided by the initial width.
    pub fn viewport_class(&self) -> ViewportClass {
        if self.viewport.x <= self.mobile_width {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    /// Particle pool size for this session.
    pub fn particle_count(&self) -> usize {
        match self.viewport_class() {
            ViewportClass::Compact => self.compact_particles,
            ViewportClass::Wide => self.wide_particles,
        }
    }

    /// Grid cell size for this session.
    pub fn grid_cell(&self) -> f32 {
        match self.viewport_class() {
            ViewportClass::Compact => self.compact_cell,
            ViewportClass::Wide => self.wide_cell,
        }
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self::new()
    }
}
