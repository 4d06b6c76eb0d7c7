//! Walkabout Engine Library
//!
//! A small engine for walkable 3D portfolio worlds: a third-person
//! character with capsule collision against static geometry, pointer
//! picking of interactive objects, squash-and-stretch feedback
//! animations, and a binary world file format. Rendering, audio, and UI
//! are left to the embedding layer, which drives a [`session::WorldSession`]
//! and reacts to the cue events it reports.
//!
//! # Modules
//!
//! - [`physics`] - Capsule-vs-triangle collision, AABBs, raycasts
//! - [`player`] - Gravity, jumping, walking, facing smoothing
//! - [`input`] - Window-agnostic keyboard and thumbstick state
//! - [`camera`] - Third-person follow camera and picking rays
//! - [`world`] - World data and the .wld file format
//! - [`interact`] - Object picking and the landmark modal
//! - [`anim`] - Easing curves and squish timelines
//! - [`session`] - Ties everything together per frame
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::session::WorldSession;
//! use walkabout_engine::input::KeyCode;
//! use walkabout_engine::world::load_wld;
//!
//! let mut session = WorldSession::new();
//! session.attach_world(load_wld("garden.wld".as_ref())?);
//!
//! // Per frame: feed input, step, react to cues
//! session.input.keyboard.handle_key(KeyCode::W, true);
//! for cue in session.update(1.0 / 60.0, None) {
//!     println!("{cue:?}");
//! }
//! ```

pub mod anim;
pub mod camera;
pub mod input;
pub mod interact;
pub mod physics;
pub mod player;
pub mod session;
pub mod world;

// Re-export the session types at crate level for convenience
pub use session::{CharacterTransform, CueEvent, WorldSession};
// Re-export commonly used input types
pub use input::{InputState, KeyCode, KeyboardState, Pointer, Thumbstick};
// Re-export player types
pub use player::PlayerMotionController;
// Re-export world types
pub use world::{load_wld, save_wld, World};
