//! Thumbstick Input Module
//!
//! Analog stick state for VR controllers and gamepads. Raw axis values
//! arrive in the -1..=1 range; a radial deadzone filters out drift near
//! center before the values become movement intent.

use glam::Vec2;

/// Radial deadzone below which stick input is treated as centered.
pub const DEADZONE: f32 = 0.1;

/// Analog thumbstick state.
///
/// Axis convention follows the common gamepad layout: `x` is positive
/// to the right, `y` is positive when the stick is pushed away (up).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thumbstick {
    pub x: f32,
    pub y: f32,
}

impl Thumbstick {
    /// Create a centered thumbstick.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set raw axis values, clamping each to -1..=1.
    pub fn set_axes(&mut self, x: f32, y: f32) {
        self.x = x.clamp(-1.0, 1.0);
        self.y = y.clamp(-1.0, 1.0);
    }

    /// Return to center.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the stick is deflected past the deadzone.
    pub fn is_active(&self) -> bool {
        Vec2::new(self.x, self.y).length_squared() > DEADZONE * DEADZONE
    }

    /// Movement intent: x is strafe right, y is forward.
    ///
    /// Returns `Vec2::ZERO` inside the deadzone; otherwise passes the
    /// deflection through unscaled so partial pushes still map to full
    /// walk speed once normalized by the motion controller.
    pub fn intent(&self) -> Vec2 {
        if self.is_active() {
            Vec2::new(self.x, self.y)
        } else {
            Vec2::ZERO
        }
    }
}
