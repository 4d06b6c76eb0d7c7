//! World Module
//!
//! The static world: collision geometry, spawn point, placed interactive
//! objects, and the .wld file format that persists all of it.

pub mod file;
pub mod objects;

// Re-export commonly used types at module level
pub use file::{load_wld, save_wld, WldHeader, WorldFileError, WorldManifest, WLD_MAGIC};
pub use objects::{InteractiveObject, ModalContent, ObjectKind, World};
