//! Interact Module
//!
//! Pointer picking of world objects and the modal overlay landmarks open.

pub mod modal;
pub mod picking;

pub use modal::ModalState;
pub use picking::{pick_object, Pick};
