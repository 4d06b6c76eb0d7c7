//! Player capsule volume
//!
//! A capsule is the segment between `start` and `end` swept by a sphere of
//! `radius` meters. The player capsule stands upright: `start` sits one radius
//! above the feet, `end` at the top of the body. Radius and height never
//! change after construction; movement only translates the segment.

use glam::Vec3;

/// A cylinder-with-hemispherical-caps collision volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Lower segment point (one radius above the feet).
    pub start: Vec3,
    /// Upper segment point.
    pub end: Vec3,
    /// Cap/cylinder radius in meters.
    pub radius: f32,
}

impl Capsule {
    /// Create a capsule from explicit segment points and radius.
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        Self { start, end, radius }
    }

    /// Create an upright player capsule standing at `feet`.
    ///
    /// The segment spans from `feet + (0, radius, 0)` to `feet + (0, height, 0)`,
    /// matching how the spawn transform is converted into collider bounds.
    pub fn upright(feet: Vec3, radius: f32, height: f32) -> Self {
        Self {
            start: feet + Vec3::new(0.0, radius, 0.0),
            end: feet + Vec3::new(0.0, height, 0.0),
            radius,
        }
    }

    /// Translate both segment points by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.start += delta;
        self.end += delta;
    }

    /// The feet position implied by the segment: `start - (0, radius, 0)`.
    pub fn feet(&self) -> Vec3 {
        self.start - Vec3::new(0.0, self.radius, 0.0)
    }

    /// Segment height from feet to top point.
    pub fn height(&self) -> f32 {
        self.end.y - self.feet().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upright_capsule_bounds() {
        let capsule = Capsule::upright(Vec3::new(1.0, 2.0, 3.0), 0.35, 1.0);
        assert_eq!(capsule.start, Vec3::new(1.0, 2.35, 3.0));
        assert_eq!(capsule.end, Vec3::new(1.0, 3.0, 3.0));
        assert_eq!(capsule.radius, 0.35);
    }

    #[test]
    fn test_translate_moves_both_points() {
        let mut capsule = Capsule::upright(Vec3::ZERO, 0.35, 1.0);
        capsule.translate(Vec3::new(2.0, -1.0, 0.5));
        assert_eq!(capsule.start, Vec3::new(2.0, -0.65, 0.5));
        assert_eq!(capsule.end, Vec3::new(2.0, 0.0, 0.5));
    }

    #[test]
    fn test_feet_inverts_upright() {
        let feet = Vec3::new(-4.0, 0.5, 7.0);
        let capsule = Capsule::upright(feet, 0.35, 1.0);
        assert!((capsule.feet() - feet).length() < 1e-6);
    }
}
