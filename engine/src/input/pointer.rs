//! Pointer Input Module
//!
//! Tracks the mouse/touch pointer in window pixels and converts it to
//! normalized device coordinates for picking. Decoupled from any
//! windowing system.

use glam::Vec2;

/// Pointer position and click state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    x: f32,
    y: f32,
    width: u32,
    height: u32,
    click_queued: bool,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the pointer position in window pixels, with the window size
    /// for normalization. (0, 0) is the top-left corner.
    pub fn set_position(&mut self, x: f32, y: f32, width: u32, height: u32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// Queue a click at the current position.
    pub fn press(&mut self) {
        self.click_queued = true;
    }

    /// Consume a queued click, if any.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.click_queued)
    }

    /// Position in normalized device coordinates: -1..=1 on both axes,
    /// (0, 0) at screen center, +y up. `None` before the first
    /// `set_position` with a nonzero window size.
    pub fn ndc(&self) -> Option<Vec2> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Vec2::new(
            self.x / self.width as f32 * 2.0 - 1.0,
            -(self.y / self.height as f32 * 2.0 - 1.0),
        ))
    }

    /// Drop the queued click. Call on window focus loss.
    pub fn reset(&mut self) {
        self.click_queued = false;
    }
}
