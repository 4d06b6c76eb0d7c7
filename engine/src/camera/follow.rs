//! Follow Camera Module
//!
//! A third-person camera that trails the player at a fixed offset and
//! always aims slightly ahead of them. Also builds picking rays from
//! normalized screen coordinates.

use glam::{Vec2, Vec3};

/// World-space offset from the player to the camera.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(-13.0, 39.0, -67.0);

/// Offset from the player to the point the camera looks at.
pub const LOOK_OFFSET: Vec3 = Vec3::new(10.0, 0.0, 10.0);

/// Default vertical field of view in radians (~33 degrees).
pub const DEFAULT_FOV: f32 = 0.576;

/// Third-person follow camera.
///
/// Position and look target are recomputed from the player position
/// every frame; the camera carries no smoothing state of its own.
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: CAMERA_OFFSET,
            target: LOOK_OFFSET,
            fov: DEFAULT_FOV,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl FollowCamera {
    /// Create a camera already framing the given player position.
    pub fn new(player_position: Vec3) -> Self {
        let mut camera = Self::default();
        camera.follow(player_position);
        camera
    }

    /// Snap the camera to its offset from the player.
    pub fn follow(&mut self, player_position: Vec3) {
        self.position = player_position + CAMERA_OFFSET;
        self.target = player_position + LOOK_OFFSET;
    }

    /// Update the aspect ratio after a window resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// View direction from camera to look target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Build a world-space picking ray through a screen point.
    ///
    /// `ndc` is in normalized device coordinates, -1..=1 on both axes
    /// with (0, 0) at screen center and +y up. Returns the ray origin
    /// (the camera position) and normalized direction.
    pub fn pointer_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let half_fov = (self.fov * 0.5).tan();

        let forward = self.forward();
        let up_world = Vec3::Y;

        // Basis degenerates when looking straight up or down
        let (right, up) = if forward.y.abs() > 0.99 {
            let right = Vec3::X;
            let up = forward.cross(right).normalize();
            (right, up)
        } else {
            let right = forward.cross(up_world).normalize();
            let up = right.cross(forward);
            (right, up)
        };

        let dir = (forward + right * ndc.x * self.aspect_ratio * half_fov + up * ndc.y * half_fov)
            .normalize();
        (self.position, dir)
    }
}
