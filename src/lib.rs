//! # ENZO Backdrop
//!
//! The animated backdrop of the ENZO landing screen, rendered natively:
//! a drifting particle field that shies away from the pointer, connection
//! lines between nearby particles, a diagonally scrolling grid with scroll
//! parallax, and a soft glow trailing the cursor.
//!
//! ## Quick Start
//!
//! ```ignore
//! use enzo_backdrop::config::BackdropConfig;
//! use enzo_backdrop::window;
//!
//! fn main() {
//!     env_logger::init();
//!     window::run(BackdropConfig::default()).unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The scene
//!
//! All mutable state lives in a [`Backdrop`]: the particle pool, the grid
//! offset and the cursor glow. There is no global state; the windowed driver
//! owns the scene and advances it with [`Backdrop::tick`] once per frame.
//!
//! ### Deterministic stepping
//!
//! `tick` takes a [`FrameInput`] snapshot (pointer, scroll, viewport) and a
//! delta time. Tests build a [`Backdrop`] with a fixed seed, hand it
//! synthetic inputs and call `tick` any number of times, with no window,
//! no GPU and no real clock involved.
//!
//! ### Physics
//!
//! Per frame, each particle integrates its velocity, receives a repulsion
//! impulse when the pointer is within range, is damped, bounces off the
//! viewport edges and is clamped back into bounds. Connection links are an
//! all-pairs scan, quadratic in pool size; pools stay at 100 or below.
//!
//! ### Rendering
//!
//! The [`gpu`] module draws the scene with wgpu: grid and connection lines
//! as a line list, particles as instanced billboards (solid core plus a
//! glow fading out at three radii), and the cursor glow as a radial-fade
//! quad. Geometry is assembled on the CPU and re-uploaded every frame.

pub mod config;
pub mod error;
pub mod field;
pub mod gpu;
pub mod grid;
pub mod input;
pub mod particle;
pub mod platform;
pub mod scene;
pub mod shader;
pub mod time;
pub mod window;

pub use config::{BackdropConfig, ViewportClass};
pub use error::{BackdropError, GpuError};
pub use field::{Link, ParticleField};
pub use glam::Vec2;
pub use grid::{GridLines, GridOverlay};
pub use particle::Particle;
pub use platform::{Platform, PlatformInfo, PlatformPanel};
pub use scene::{Backdrop, CursorGlow, FrameInput};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use enzo_backdrop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{BackdropConfig, ViewportClass};
    pub use crate::field::{Link, ParticleField};
    pub use crate::grid::{GridLines, GridOverlay};
    pub use crate::particle::Particle;
    pub use crate::platform::{Platform, PlatformInfo, PlatformPanel};
    pub use crate::scene::{Backdrop, CursorGlow, FrameInput};
    pub use crate::time::{Ticker, Time};
    pub use crate::window::run;
    pub use glam::Vec2;
}
