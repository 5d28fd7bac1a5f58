//! System clipboard backed by arboard.

use lovenote_core::{CardError, CardResult, Clipboard};

/// Opens the desktop clipboard on every copy; arboard handles can't be held
/// across threads on every platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> CardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            tracing::warn!("Clipboard not available: {}", e);
            CardError::Clipboard(e.to_string())
        })?;

        clipboard
            .set_text(text)
            .map_err(|e| CardError::Clipboard(e.to_string()))?;

        tracing::debug!("Copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
