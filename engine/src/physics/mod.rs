//! Physics module
//!
//! Custom collision implementation for the walkable world. Built from scratch
//! without an external physics library: the player is a capsule swept against
//! an immutable triangle soup, and interactive objects are picked with
//! ray-AABB tests.
//!
//! # Unit system
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`capsule`] - The player's swept collision volume
//! - [`collision`] - Capsule-vs-triangle-mesh queries and ray casts
//! - [`aabb`] - Axis-aligned boxes with slab-method ray intersection

pub mod aabb;
pub mod capsule;
pub mod collision;

pub use aabb::Aabb;
pub use capsule::Capsule;
pub use collision::{CollisionMesh, Contact, RayHit, Triangle};
