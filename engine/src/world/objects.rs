//! World Objects Module
//!
//! Named interactive objects placed in the world, plus the text content
//! shown when a landmark is activated. Geometry for these objects lives
//! in the render layer; the engine only needs names and bounds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{Aabb, CollisionMesh};

/// What activating an object does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Decorative prop: pokes play a squish animation and a sound cue.
    Prop,
    /// Landmark: opens the modal registered under the object's name.
    Landmark,
}

/// A named, pickable object with an axis-aligned bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveObject {
    pub name: String,
    pub kind: ObjectKind,
    pub bounds: Aabb,
}

impl InteractiveObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind, bounds: Aabb) -> Self {
        Self {
            name: name.into(),
            kind,
            bounds,
        }
    }
}

/// Text content shown when a landmark's modal opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalContent {
    /// Object name this content is keyed by.
    pub object: String,
    pub title: String,
    pub body: String,
    /// Optional external link shown under the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A loaded world: static collision geometry plus placed objects.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Display name of the world.
    pub name: String,
    /// Where the player appears on load and after falling off.
    pub spawn: Vec3,
    /// Static collision geometry.
    pub collision: CollisionMesh,
    /// Pickable objects.
    pub objects: Vec<InteractiveObject>,
    /// Modal content for landmarks, keyed by object name.
    pub modals: Vec<ModalContent>,
}

impl World {
    /// Look up an object by name.
    pub fn object(&self, name: &str) -> Option<&InteractiveObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Look up modal content by object name.
    pub fn modal(&self, object: &str) -> Option<&ModalContent> {
        self.modals.iter().find(|m| m.object == object)
    }
}
