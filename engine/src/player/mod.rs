//! Player Module
//!
//! Character motion simulation: gravity, jumping, walking, and collision
//! response against the static world mesh. The controller is pure state;
//! rendering and input mapping live elsewhere.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::player::{PlayerMotionController, StepInput};
//! use walkabout_engine::physics::CollisionMesh;
//! use glam::{Vec2, Vec3};
//!
//! let mut player = PlayerMotionController::new(Vec3::new(0.0, 2.0, 0.0));
//! let input = StepInput {
//!     dt: 1.0 / 60.0,
//!     intent: Vec2::new(0.0, 1.0), // walk forward
//!     ..Default::default()
//! };
//! player.step(&input, &CollisionMesh::default());
//! ```

pub mod locomotion;
pub mod motion_controller;

// Re-export commonly used types at module level
pub use locomotion::{Locomotion, MoveBasis};
pub use motion_controller::{
    PlayerMotionController, StepInput, StepOutcome, CAPSULE_HEIGHT, CAPSULE_RADIUS,
    FACING_SMOOTHING, FALL_RESPAWN_Y, GRAVITY, JUMP_SPEED, MAX_STEP_DT, MOVE_SPEED,
};
