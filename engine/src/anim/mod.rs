//! Animation Module
//!
//! Easing curves and the squash-and-stretch timelines used for prop
//! pokes and the character's landing hop.

pub mod ease;
pub mod squish;

pub use squish::{SquishPlayer, SquishPose, SquishTimeline};
