//! Modal Module
//!
//! Tracks which landmark modal is open. While a modal is open all other
//! interaction is ignored; the embedding UI renders the content and
//! calls `close` when dismissed.

use crate::world::objects::ModalContent;

/// Open/closed state of the single modal overlay.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    open: Option<ModalContent>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal with the given content, replacing any open one.
    pub fn open(&mut self, content: ModalContent) {
        self.open = Some(content);
    }

    /// Dismiss the modal. Returns `true` if one was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Content of the open modal, if any.
    pub fn content(&self) -> Option<&ModalContent> {
        self.open.as_ref()
    }
}
