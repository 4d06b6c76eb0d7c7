//! Picking Module
//!
//! Finds the interactive object under a pointer ray. Objects are picked
//! against their axis-aligned bounds; the nearest hit along the ray wins.

use glam::Vec3;

use crate::world::objects::InteractiveObject;

/// Result of a successful pick.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    /// Name of the picked object.
    pub name: String,
    /// Distance along the ray to the entry point.
    pub distance: f32,
}

/// Pick the nearest object hit by the ray, if any.
///
/// `direction` must be normalized. Objects whose bounds lie behind the
/// ray origin are ignored.
pub fn pick_object(objects: &[InteractiveObject], origin: Vec3, direction: Vec3) -> Option<Pick> {
    let mut nearest: Option<Pick> = None;
    for object in objects {
        if let Some(distance) = object.bounds.ray_intersect(origin, direction) {
            if nearest.as_ref().map_or(true, |p| distance < p.distance) {
                nearest = Some(Pick {
                    name: object.name.clone(),
                    distance,
                });
            }
        }
    }
    nearest
}
