//! Clipboard seam.
//!
//! The conductor only knows this trait. The desktop binary backs it with the
//! system clipboard; tests use [`MemoryClipboard`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::CardResult;

pub trait Clipboard: Send + 'static {
    fn set_text(&mut self, text: &str) -> CardResult<()>;
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> CardResult<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
