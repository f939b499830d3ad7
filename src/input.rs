//! Pointer and scroll tracking between frames.
//!
//! Window events arrive whenever the platform delivers them; the frame tick
//! wants one coherent snapshot. [`Input`] records the latest pointer
//! position, an accumulated page-scroll offset and the viewport size, and
//! hands them out as a [`FrameInput`] at the start of each frame.
//!
//! There is no page to scroll in a native window, so the scroll wheel
//! accumulates a synthetic scroll position (clamped at zero) that stands in
//! for the page's vertical scroll offset.

use glam::Vec2;
use winit::event::{MouseScrollDelta, WindowEvent};

use crate::scene::FrameInput;

/// Pixels of synthetic page scroll per scroll-wheel line.
const LINE_HEIGHT: f32 = 48.0;

/// Latest pointer, scroll and viewport state.
#[derive(Debug)]
pub struct Input {
    pointer: Vec2,
    scroll: f32,
    viewport: Vec2,
}

impl Input {
    /// Create a tracker for a viewport of the given size.
    ///
    /// The pointer starts at the origin until the first move event, matching
    /// the landing screen's behavior before any pointer activity.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pointer: Vec2::ZERO,
            scroll: 0.0,
            viewport,
        }
    }

    /// Last observed pointer position.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Accumulated page-scroll offset, never negative.
    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Current viewport size.
    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Snapshot for the current frame's tick.
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            scroll: self.scroll,
            viewport: self.viewport,
        }
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.apply_scroll(amount);
            }

            WindowEvent::Resized(size) => {
                self.viewport = Vec2::new(size.width as f32, size.height as f32);
            }

            _ => {}
        }
    }

    /// Scrolling down (negative wheel delta) moves the page offset up.
    fn apply_scroll(&mut self, amount: f32) {
        self.scroll = (self.scroll - amount).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_never_goes_negative() {
        let mut input = Input::new(Vec2::new(800.0, 600.0));

        // Scrolling up past the top stays pinned at zero.
        input.apply_scroll(100.0);
        assert_eq!(input.scroll(), 0.0);

        input.apply_scroll(-150.0);
        assert_eq!(input.scroll(), 150.0);

        input.apply_scroll(500.0);
        assert_eq!(input.scroll(), 0.0);
    }

    #[test]
    fn test_frame_input_snapshot() {
        let mut input = Input::new(Vec2::new(800.0, 600.0));
        input.pointer = Vec2::new(10.0, 20.0);
        input.apply_scroll(-30.0);

        let frame = input.frame_input();
        assert_eq!(frame.pointer, Vec2::new(10.0, 20.0));
        assert_eq!(frame.scroll, 30.0);
        assert_eq!(frame.viewport, Vec2::new(800.0, 600.0));
    }
}
