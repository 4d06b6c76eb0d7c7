//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys and action keys.
//! Decoupled from any windowing system to use generic key codes.

use glam::Vec2;

/// Generic key codes for input, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to a specific
/// window library's key enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Action keys
    E,
    R,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// Maintains which movement keys are held down, allowing smooth
/// continuous movement across frames. WASD and the arrow keys are
/// tracked as separate pairs so that e.g. holding W and releasing
/// ArrowUp does not stop forward motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / ArrowUp - walk forward
    pub forward: bool,
    pub forward_arrow: bool,
    /// S / ArrowDown - walk backward
    pub backward: bool,
    pub backward_arrow: bool,
    /// A / ArrowLeft - strafe left
    pub left: bool,
    pub left_arrow: bool,
    /// D / ArrowRight - strafe right
    pub right: bool,
    pub right_arrow: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::ArrowUp => {
                self.forward_arrow = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::ArrowDown => {
                self.backward_arrow = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::ArrowLeft => {
                self.left_arrow = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::ArrowRight => {
                self.right_arrow = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward_axis() != 0 || self.right_axis() != 0
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        ((self.forward || self.forward_arrow) as i32)
            - ((self.backward || self.backward_arrow) as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        ((self.right || self.right_arrow) as i32) - ((self.left || self.left_arrow) as i32)
    }

    /// Movement intent as a vector: x is strafe right, y is forward.
    ///
    /// Each axis is -1, 0, or 1; diagonal input is normalized later by
    /// the motion controller, not here.
    pub fn intent(&self) -> Vec2 {
        Vec2::new(self.right_axis() as f32, self.forward_axis() as f32)
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete keyboard state tracking.
///
/// Tracks held movement keys plus one-shot action triggers. Actions
/// (jump, interact, respawn) fire on the press transition only and are
/// consumed by `take_*`, so a held key never retriggers.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    jump_held: bool,
    jump_queued: bool,
    interact_queued: bool,
    respawn_queued: bool,
    cancel_queued: bool,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if self.movement.handle_key(key, pressed) {
            return true;
        }
        match key {
            KeyCode::Space => {
                if pressed && !self.jump_held {
                    self.jump_queued = true;
                }
                self.jump_held = pressed;
                true
            }
            KeyCode::E | KeyCode::Enter => {
                if pressed {
                    self.interact_queued = true;
                }
                true
            }
            KeyCode::R => {
                if pressed {
                    self.respawn_queued = true;
                }
                true
            }
            KeyCode::Escape => {
                if pressed {
                    self.cancel_queued = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Consume a queued jump press, if any.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_queued)
    }

    /// Consume a queued interact press, if any.
    pub fn take_interact(&mut self) -> bool {
        std::mem::take(&mut self.interact_queued)
    }

    /// Consume a queued respawn press, if any.
    pub fn take_respawn(&mut self) -> bool {
        std::mem::take(&mut self.respawn_queued)
    }

    /// Consume a queued Escape press, if any.
    pub fn take_cancel(&mut self) -> bool {
        std::mem::take(&mut self.cancel_queued)
    }

    /// Release every key and drop queued actions.
    ///
    /// Call this on window focus loss so a key held across the focus
    /// change does not stick.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_movement_keys_forward() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_pressed());
        assert_eq!(keys.forward_axis(), 1);
        assert_eq!(keys.intent(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_movement_axes_cancel() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowUp, true);
        keys.handle_key(KeyCode::W, true);
        assert_eq!(keys.forward_axis(), 1);

        // Releasing one alias must not cancel the other
        keys.handle_key(KeyCode::ArrowUp, false);
        assert_eq!(keys.forward_axis(), 1);
        keys.handle_key(KeyCode::W, false);
        assert_eq!(keys.forward_axis(), 0);
    }

    #[test]
    fn test_jump_fires_once_per_press() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::Space, true);
        assert!(kb.take_jump());
        assert!(!kb.take_jump());

        // Still held: no retrigger
        kb.handle_key(KeyCode::Space, true);
        assert!(!kb.take_jump());

        kb.handle_key(KeyCode::Space, false);
        kb.handle_key(KeyCode::Space, true);
        assert!(kb.take_jump());
    }

    #[test]
    fn test_interact_and_respawn_triggers() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::E, true);
        assert!(kb.take_interact());
        assert!(!kb.take_interact());

        kb.handle_key(KeyCode::Enter, true);
        assert!(kb.take_interact());

        kb.handle_key(KeyCode::R, true);
        assert!(kb.take_respawn());
    }

    #[test]
    fn test_escape_queues_cancel_once() {
        let mut kb = KeyboardState::new();
        assert!(!kb.take_cancel());
        assert!(kb.handle_key(KeyCode::Escape, true));
        assert!(kb.take_cancel());
        assert!(!kb.take_cancel());

        kb.handle_key(KeyCode::Escape, false);
        assert!(!kb.take_cancel());
    }

    #[test]
    fn test_release_all_clears_held_and_queued() {
        let mut kb = KeyboardState::new();
        kb.handle_key(KeyCode::W, true);
        kb.handle_key(KeyCode::Space, true);
        kb.release_all();
        assert!(!kb.movement.any_pressed());
        assert!(!kb.take_jump());
    }

    #[test]
    fn test_non_movement_key() {
        let mut kb = KeyboardState::new();
        assert!(!kb.handle_key(KeyCode::Unknown, true));
        assert!(!kb.movement.any_pressed());
    }
}
