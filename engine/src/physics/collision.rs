//! Static world collision
//!
//! The environment collider is an immutable triangle soup built once when the
//! scene loads. The player capsule is tested against every triangle and the
//! deepest contact wins; the caller pushes the capsule out along the contact
//! normal by the penetration depth, so after a single pass the capsule no
//! longer penetrates (deep interpenetration at very high speed can still slip
//! through - single-pass resolution is a known limitation).
//!
//! A capsule-vs-triangle test has two contact families:
//! - the capsule segment approaches the triangle face (plane distance check,
//!   closest approach point inside the face)
//! - the capsule segment approaches a triangle edge (segment-segment
//!   closest-point pairs)
//!
//! Queries are pure: nothing in the mesh is mutated, and a result fits in a
//! single `Contact` value.

use glam::Vec3;

use crate::physics::Capsule;

/// Contact skin in meters. A capsule resting exactly on a surface sits within
/// rounding error of zero separation; the skin keeps the grounded state from
/// flickering between frames.
const CONTACT_SKIN: f32 = 1e-4;

/// A single environment triangle. Winding determines the face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unit face normal from counter-clockwise winding.
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }

    /// Whether `point`, projected onto the triangle plane, lies inside the face.
    fn contains(&self, point: Vec3) -> bool {
        let n = self.normal();
        let edge_sign = |from: Vec3, to: Vec3| (to - from).cross(point - from).dot(n);
        edge_sign(self.a, self.b) >= -1e-6
            && edge_sign(self.b, self.c) >= -1e-6
            && edge_sign(self.c, self.a) >= -1e-6
    }
}

/// Result of a capsule query: push-out direction and penetration depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing out of the geometry, toward the capsule.
    pub normal: Vec3,
    /// How far the capsule must move along `normal` to stop penetrating.
    pub depth: f32,
}

/// Hit returned by [`CollisionMesh::ray_cast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub position: Vec3,
    pub normal: Vec3,
    pub distance: f32,
    /// Index of the hit triangle.
    pub triangle: usize,
}

/// Immutable collider over environment geometry.
///
/// Triangles are tested brute-force; portfolio-sized scenes are a few hundred
/// triangles, well under the cost of maintaining a BVH.
#[derive(Debug, Clone, Default)]
pub struct CollisionMesh {
    triangles: Vec<Triangle>,
}

impl CollisionMesh {
    /// Build a mesh from a flat vertex soup, three vertices per triangle.
    ///
    /// A trailing partial triangle is ignored.
    pub fn from_vertices(vertices: &[Vec3]) -> Self {
        let triangles = vertices
            .chunks_exact(3)
            .map(|v| Triangle::new(v[0], v[1], v[2]))
            .collect();
        Self { triangles }
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flat vertex soup, three vertices per triangle (for serialization).
    pub fn vertices(&self) -> Vec<Vec3> {
        self.triangles
            .iter()
            .flat_map(|t| [t.a, t.b, t.c])
            .collect()
    }

    /// Deepest contact between `capsule` and the mesh, if any.
    pub fn capsule_intersect(&self, capsule: &Capsule) -> Option<Contact> {
        let mut deepest: Option<Contact> = None;
        for triangle in &self.triangles {
            if let Some(contact) = capsule_triangle_intersect(capsule, triangle) {
                if deepest.map_or(true, |d| contact.depth > d.depth) {
                    deepest = Some(contact);
                }
            }
        }
        deepest
    }

    /// Closest ray hit against the mesh within `max_dist`.
    pub fn ray_cast(&self, origin: Vec3, direction: Vec3, max_dist: f32) -> Option<RayHit> {
        let mut closest: Option<RayHit> = None;
        let mut closest_dist = max_dist;

        for (index, triangle) in self.triangles.iter().enumerate() {
            if let Some(t) = ray_triangle_intersect(origin, direction, triangle) {
                if t >= 0.0 && t < closest_dist {
                    closest = Some(RayHit {
                        position: origin + direction * t,
                        normal: triangle.normal(),
                        distance: t,
                        triangle: index,
                    });
                    closest_dist = t;
                }
            }
        }
        closest
    }
}

/// Capsule-vs-triangle contact test.
///
/// Face case first: signed plane distances of both segment endpoints, minus
/// the radius. Both positive means the capsule is clear; both endpoints below
/// the back side means it already passed through. Otherwise the segment's
/// closest approach to the plane is interpolated, and if that point lies
/// inside the face the contact normal is the face normal.
///
/// Edge case second: closest point pairs between the capsule segment and each
/// triangle edge, contact when a pair is closer than the radius.
fn capsule_triangle_intersect(capsule: &Capsule, triangle: &Triangle) -> Option<Contact> {
    let normal = triangle.normal();
    if normal == Vec3::ZERO {
        return None; // degenerate triangle
    }
    let plane_d = normal.dot(triangle.a);

    let d1 = normal.dot(capsule.start) - plane_d - capsule.radius;
    let d2 = normal.dot(capsule.end) - plane_d - capsule.radius;

    if (d1 > CONTACT_SKIN && d2 > CONTACT_SKIN)
        || (d1 < -capsule.radius && d2 < -capsule.radius)
    {
        return None;
    }

    let delta = (d1.abs() / (d1.abs() + d2.abs() + f32::EPSILON)).clamp(0.0, 1.0);
    let approach = capsule.start + (capsule.end - capsule.start) * delta;

    if triangle.contains(approach) {
        return Some(Contact {
            normal,
            depth: d1.min(d2).abs(),
        });
    }

    let radius_sq = capsule.radius * capsule.radius;
    let edges = [
        (triangle.a, triangle.b),
        (triangle.b, triangle.c),
        (triangle.c, triangle.a),
    ];
    let mut best: Option<Contact> = None;
    for (e0, e1) in edges {
        let (on_capsule, on_edge) =
            closest_points_segment_segment(capsule.start, capsule.end, e0, e1);
        let offset = on_capsule - on_edge;
        let dist_sq = offset.length_squared();
        if dist_sq < radius_sq {
            let dist = dist_sq.sqrt();
            let contact = Contact {
                normal: if dist > 1e-6 { offset / dist } else { normal },
                depth: capsule.radius - dist,
            };
            if best.map_or(true, |b| contact.depth > b.depth) {
                best = Some(contact);
            }
        }
    }
    best
}

/// Closest points between segments `p1..q1` and `p2..q2`.
fn closest_points_segment_segment(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> (Vec3, Vec3) {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    let (s, t);
    if a <= f32::EPSILON && e <= f32::EPSILON {
        // Both segments degenerate to points.
        return (p1, p2);
    }
    if a <= f32::EPSILON {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(r);
        if e <= f32::EPSILON {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            let s_unclamped = if denom > f32::EPSILON {
                (b * f - c * e) / denom
            } else {
                0.0 // parallel segments: start of the capsule segment
            };
            let s_clamped = s_unclamped.clamp(0.0, 1.0);
            let t_unclamped = (b * s_clamped + f) / e;
            if t_unclamped < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t_unclamped > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            } else {
                t = t_unclamped;
                s = s_clamped;
            }
        }
    }
    (p1 + d1 * s, p2 + d2 * t)
}

/// Moller-Trumbore ray-triangle intersection. Returns the ray parameter.
fn ray_triangle_intersect(origin: Vec3, direction: Vec3, triangle: &Triangle) -> Option<f32> {
    let edge1 = triangle.b - triangle.a;
    let edge2 = triangle.c - triangle.a;
    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < 1e-8 {
        return None; // ray parallel to triangle plane
    }
    let inv_det = 1.0 / det;
    let s = origin - triangle.a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    if t >= 0.0 { Some(t) } else { None }
}
