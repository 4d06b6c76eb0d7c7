//! Axis-aligned bounding boxes
//!
//! Interactive objects carry a world-space AABB for picking. Ray intersection
//! uses the slab method: entry/exit times per axis, intersect the intervals.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A world-space axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered at `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Ray intersection via the slab method.
    ///
    /// Returns the distance along the ray to the near face, or the exit
    /// distance when the ray starts inside the box. `direction` must be
    /// normalized for the returned `t` to be a world distance.
    pub fn ray_intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        // Near-axis-parallel components get a huge inverse with the right sign.
        let inv = Vec3::new(
            if direction.x.abs() > 1e-10 { 1.0 / direction.x } else { f32::MAX * direction.x.signum() },
            if direction.y.abs() > 1e-10 { 1.0 / direction.y } else { f32::MAX * direction.y.signum() },
            if direction.z.abs() > 1e-10 { 1.0 / direction.z } else { f32::MAX * direction.z.signum() },
        );

        let t_lo = (self.min - origin) * inv;
        let t_hi = (self.max - origin) * inv;

        let t_min = t_lo.min(t_hi).max_element();
        let t_max = t_lo.max(t_hi).min_element();

        if t_max >= t_min && t_max >= 0.0 {
            if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
        } else {
            None
        }
    }

    /// Outward normal of the face closest to a point on the box surface.
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        let half = (self.max - self.min) * 0.5;
        let local = point - self.center();
        let scaled = Vec3::new(local.x / half.x, local.y / half.y, local.z / half.z);
        let a = scaled.abs();

        if a.x >= a.y && a.x >= a.z {
            Vec3::new(scaled.x.signum(), 0.0, 0.0)
        } else if a.y >= a.x && a.y >= a.z {
            Vec3::new(0.0, scaled.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, scaled.z.signum())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_ray_hits_box_from_front() {
        let t = unit_box()
            .ray_intersect(Vec3::new(0.0, 0.0, -5.0), Vec3::Z)
            .expect("should hit");
        assert!((t - 4.0).abs() < 0.001, "expected t=4.0, got {}", t);
    }

    #[test]
    fn test_ray_misses_box() {
        let hit = unit_box().ray_intersect(Vec3::new(0.0, 5.0, -5.0), Vec3::Z);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_starts_inside_box() {
        let t = unit_box()
            .ray_intersect(Vec3::ZERO, Vec3::Z)
            .expect("should hit exit face");
        assert!((t - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_box_behind_origin() {
        let hit = unit_box().ray_intersect(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(hit.is_none());
    }

    #[test]
    fn test_surface_normals() {
        let b = unit_box();
        assert_eq!(b.surface_normal(Vec3::new(1.0, 0.0, 0.0)), Vec3::X);
        assert_eq!(b.surface_normal(Vec3::new(-1.0, 0.0, 0.0)), Vec3::NEG_X);
        assert_eq!(b.surface_normal(Vec3::new(0.0, 1.0, 0.0)), Vec3::Y);
        assert_eq!(b.surface_normal(Vec3::new(0.0, 0.0, -1.0)), Vec3::NEG_Z);
    }

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(0.5));
        assert_eq!(b.min, Vec3::new(1.5, -0.5, -0.5));
        assert_eq!(b.max, Vec3::new(2.5, 0.5, 0.5));
    }
}
