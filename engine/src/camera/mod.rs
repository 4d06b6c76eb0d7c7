//! Camera Module
//!
//! Third-person follow camera and screen-to-world picking rays.

pub mod follow;

pub use follow::{FollowCamera, CAMERA_OFFSET, DEFAULT_FOV, LOOK_OFFSET};
