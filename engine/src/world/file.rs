//! World File Save/Load (.wld)
//!
//! Binary file format for persisting a walkable world to disk.
//! Layout: fixed 32-byte header | raw collision vertices | manifest JSON.
//!
//! The header carries magic bytes, version, the vertex count and the byte
//! offset of the manifest so each section can be read independently.
//! Collision geometry is written as raw bytes for zero-overhead round-trip
//! fidelity. The manifest (spawn point, objects, modal text) is JSON for
//! human-inspectability.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::CollisionMesh;
use crate::world::objects::{InteractiveObject, ModalContent, World};

/// Magic bytes identifying a .wld file.
pub const WLD_MAGIC: [u8; 4] = *b"WALK";

/// Current file format version.
const WLD_VERSION: u32 = 1;

/// Size of the header in bytes. Must always be 32.
const HEADER_SIZE: u32 = 32;

/// Fixed-size binary header for the .wld format.
///
/// Total size: exactly 32 bytes.
/// - `magic` (4) + `version` (4) + `vertex_count` (4) + `manifest_offset` (4)
///   + `_reserved` (16) = 32.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct WldHeader {
    /// Magic bytes: always `b"WALK"`.
    pub magic: [u8; 4],
    /// File format version (currently 1).
    pub version: u32,
    /// Number of collision vertices (three per triangle).
    pub vertex_count: u32,
    /// Byte offset from the start of the file to the manifest JSON.
    pub manifest_offset: u32,
    /// Reserved for future use; must be zeroed.
    pub _reserved: [u8; 16],
}

static_assertions::assert_eq_size!(WldHeader, [u8; 32]);

/// JSON manifest stored after the collision vertices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldManifest {
    /// Display name of the world.
    pub name: String,
    /// Player spawn point.
    pub spawn: Vec3,
    /// Pickable objects.
    pub objects: Vec<InteractiveObject>,
    /// Modal text for landmarks.
    #[serde(default)]
    pub modals: Vec<ModalContent>,
}

/// Errors that can occur during .wld save/load.
#[derive(Debug)]
pub enum WorldFileError {
    /// File is smaller than its declared sections.
    FileTooShort,
    /// Magic bytes do not match `b"WALK"`.
    InvalidMagic,
    /// File version is not supported.
    UnsupportedVersion(u32),
    /// Vertex count is not a multiple of three.
    PartialTriangle(u32),
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for WorldFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldFileError::FileTooShort => write!(f, "file too short for wld sections"),
            WorldFileError::InvalidMagic => write!(f, "invalid magic bytes (expected WALK)"),
            WorldFileError::UnsupportedVersion(v) => {
                write!(f, "unsupported wld version: {v}")
            }
            WorldFileError::PartialTriangle(n) => {
                write!(f, "vertex count {n} is not a multiple of three")
            }
            WorldFileError::IoError(e) => write!(f, "IO error: {e}"),
            WorldFileError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for WorldFileError {}

impl From<std::io::Error> for WorldFileError {
    fn from(e: std::io::Error) -> Self {
        WorldFileError::IoError(e)
    }
}

impl From<serde_json::Error> for WorldFileError {
    fn from(e: serde_json::Error) -> Self {
        WorldFileError::JsonError(e)
    }
}

/// Write a .wld file to disk.
///
/// File layout:
/// ```text
/// [WldHeader 32 bytes]
/// [collision vertices: vertex_count * 12 bytes]
/// [manifest JSON bytes]
/// ```
pub fn save_wld(path: &Path, world: &World) -> Result<(), WorldFileError> {
    use std::io::Write;

    let vertices: Vec<[f32; 3]> = world
        .collision
        .vertices()
        .iter()
        .map(|v| v.to_array())
        .collect();
    let vertex_bytes = bytemuck::cast_slice::<[f32; 3], u8>(&vertices);

    let manifest = WorldManifest {
        name: world.name.clone(),
        spawn: world.spawn,
        objects: world.objects.clone(),
        modals: world.modals.clone(),
    };
    let manifest_json = serde_json::to_vec(&manifest)?;

    let header = WldHeader {
        magic: WLD_MAGIC,
        version: WLD_VERSION,
        vertex_count: vertices.len() as u32,
        manifest_offset: HEADER_SIZE + vertex_bytes.len() as u32,
        _reserved: [0u8; 16],
    };

    // Ensure parent directories exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(bytemuck::bytes_of(&header))?;
    file.write_all(vertex_bytes)?;
    file.write_all(&manifest_json)?;
    Ok(())
}

/// Read a .wld file from disk and reconstruct the world.
pub fn load_wld(path: &Path) -> Result<World, WorldFileError> {
    let data = std::fs::read(path)?;

    if data.len() < HEADER_SIZE as usize {
        return Err(WorldFileError::FileTooShort);
    }

    let header: &WldHeader = bytemuck::from_bytes(&data[..HEADER_SIZE as usize]);

    if header.magic != WLD_MAGIC {
        return Err(WorldFileError::InvalidMagic);
    }
    if header.version != WLD_VERSION {
        return Err(WorldFileError::UnsupportedVersion(header.version));
    }
    if header.vertex_count % 3 != 0 {
        return Err(WorldFileError::PartialTriangle(header.vertex_count));
    }

    // Vertex data starts right after the header.
    let vertex_byte_count = header.vertex_count as usize * std::mem::size_of::<[f32; 3]>();
    let vertex_start = HEADER_SIZE as usize;
    let vertex_end = vertex_start + vertex_byte_count;

    if data.len() < vertex_end || (header.manifest_offset as usize) != vertex_end {
        return Err(WorldFileError::FileTooShort);
    }

    let vertices: Vec<Vec3> = bytemuck::cast_slice::<u8, [f32; 3]>(&data[vertex_start..vertex_end])
        .iter()
        .map(|v| Vec3::from_array(*v))
        .collect();

    let manifest: WorldManifest = serde_json::from_slice(&data[vertex_end..])?;

    Ok(World {
        name: manifest.name,
        spawn: manifest.spawn,
        collision: CollisionMesh::from_vertices(&vertices),
        objects: manifest.objects,
        modals: manifest.modals,
    })
}
