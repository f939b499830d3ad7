//! Scrolling grid overlay.
//!
//! A grid of vertical and horizontal lines drifts diagonally over time
//! (both line families share one offset) while the horizontal lines also
//! parallax-shift against the page scroll position.

use glam::Vec2;

use crate::config::BackdropConfig;

/// Line positions for one frame of the grid overlay.
///
/// `verticals` are x coordinates of full-height lines, `horizontals` are
/// y coordinates of full-width lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    pub verticals: Vec<f32>,
    pub horizontals: Vec<f32>,
}

/// The scrolling grid pattern.
///
/// The offset advances a fixed step each frame and is kept wrapped into
/// `[0, cell)`; only its value modulo the cell size is ever observable.
pub struct GridOverlay {
    offset: f32,
}

impl GridOverlay {
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    /// Current offset, always in `[0, cell)`.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Advance the offset one frame.
    pub fn advance(&mut self, config: &BackdropConfig) {
        self.offset = (self.offset + config.grid_step).rem_euclid(config.grid_cell());
    }

    /// Compute the line positions for the current frame.
    ///
    /// Lines are laid out one cell beyond each viewport edge so the drift
    /// never exposes a gap.
    pub fn lines(&self, viewport: Vec2, scroll: f32, config: &BackdropConfig) -> GridLines {
        let cell = config.grid_cell();
        let phase = self.offset.rem_euclid(cell);
        let parallax = scroll * config.parallax;

        let mut verticals = Vec::new();
        let mut x = -cell;
        while x < viewport.x + cell {
            verticals.push(x + phase);
            x += cell;
        }

        let mut horizontals = Vec::new();
        let mut y = -cell;
        while y < viewport.y + cell {
            horizontals.push(y + phase - parallax);
            y += cell;
        }

        GridLines {
            verticals,
            horizontals,
        }
    }
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self::new()
    }
}
