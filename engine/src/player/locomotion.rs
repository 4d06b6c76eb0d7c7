//! Locomotion modes
//!
//! Movement intent is always resolved against a horizontal basis, but where
//! that basis comes from differs per session: desktop sessions derive it from
//! the follow camera, VR sessions from the headset's gaze. The mode is picked
//! once when a session starts or a headset connects, never per statement.

use glam::Vec3;

/// How movement intent is mapped into world space for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locomotion {
    /// Desktop/mobile: intent is relative to the follow camera's forward.
    /// The character turns to face its movement direction.
    #[default]
    CameraRelative,
    /// VR: intent is relative to the headset's gaze. The character turns to
    /// face where the user is looking.
    HeadRelative,
}

/// Horizontal-plane movement basis derived from a view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBasis {
    /// Unit forward on the XZ plane.
    pub forward: Vec3,
    /// Unit right on the XZ plane.
    pub right: Vec3,
}

impl Default for MoveBasis {
    /// Forward along -Z, right along +X.
    fn default() -> Self {
        Self::from_forward(Vec3::NEG_Z)
    }
}

impl MoveBasis {
    /// Build a basis from any view-forward vector.
    ///
    /// The vector is flattened onto the XZ plane and normalized. Looking
    /// straight up or down leaves no horizontal component; -Z is used as a
    /// fallback forward so movement stays well defined.
    pub fn from_forward(view_forward: Vec3) -> Self {
        let flat = Vec3::new(view_forward.x, 0.0, view_forward.z);
        let forward = if flat.length_squared() > 1e-8 {
            flat.normalize()
        } else {
            Vec3::NEG_Z
        };
        Self {
            forward,
            right: forward.cross(Vec3::Y),
        }
    }

    /// Yaw angle of the basis forward, `atan2(x, z)` convention.
    pub fn yaw(&self) -> f32 {
        self.forward.x.atan2(self.forward.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_horizontal_and_normalized() {
        let basis = MoveBasis::from_forward(Vec3::new(0.3, -0.8, 0.5));
        assert!(basis.forward.y.abs() < 1e-6);
        assert!((basis.forward.length() - 1.0).abs() < 1e-5);
        assert!((basis.right.length() - 1.0).abs() < 1e-5);
        assert!(basis.forward.dot(basis.right).abs() < 1e-5);
    }

    #[test]
    fn test_right_is_to_the_right() {
        // Looking down -Z, right is +X.
        let basis = MoveBasis::from_forward(Vec3::NEG_Z);
        assert!((basis.right - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_vertical_gaze_falls_back() {
        let basis = MoveBasis::from_forward(Vec3::NEG_Y);
        assert!((basis.forward - Vec3::NEG_Z).length() < 1e-5);
    }
}
