//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and VR
//! thumbstick movement. This module is decoupled from any specific
//! windowing or XR system to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! input.keyboard.handle_key(KeyCode::W, true); // W pressed
//! input.keyboard.handle_key(KeyCode::Space, true); // jump queued
//!
//! let intent = input.intent(); // (0, 1): walk forward
//! let jump = input.keyboard.take_jump();
//! ```

pub mod keyboard;
pub mod pointer;
pub mod thumbstick;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use pointer::Pointer;
pub use thumbstick::{Thumbstick, DEADZONE};

use glam::Vec2;

/// Combined input state for keyboard and thumbstick.
///
/// Keyboard and stick are tracked independently; the stick wins when
/// deflected so a drifting held key cannot fight VR movement.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub pointer: Pointer,
    pub stick: Thumbstick,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current movement intent: x is strafe right, y is forward.
    pub fn intent(&self) -> Vec2 {
        if self.stick.is_active() {
            self.stick.intent()
        } else {
            self.keyboard.movement.intent()
        }
    }

    /// Check if any movement input is active.
    pub fn is_moving(&self) -> bool {
        self.keyboard.movement.any_pressed() || self.stick.is_active()
    }

    /// Release every input. Call on window focus loss.
    pub fn release_all(&mut self) {
        self.keyboard.release_all();
        self.pointer.reset();
        self.stick.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.is_moving());
        assert_eq!(input.intent(), Vec2::ZERO);
    }

    #[test]
    fn test_keyboard_intent() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::W, true);
        assert!(input.is_moving());
        assert_eq!(input.intent(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_stick_overrides_keyboard() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::S, true);
        input.stick.set_axes(0.0, 0.8);
        assert_eq!(input.intent(), Vec2::new(0.0, 0.8));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::D, true);
        input.stick.set_axes(1.0, 0.0);
        input.release_all();
        assert!(!input.is_moving());
    }
}
