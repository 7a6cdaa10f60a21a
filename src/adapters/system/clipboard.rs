//! Clipboard adapter. Implements ClipboardPort via arboard.

use crate::domain::DomainError;
use crate::ports::ClipboardPort;

/// System clipboard backed by arboard.
///
/// A fresh handle is opened per copy: `arboard::Clipboard` is not `Sync`,
/// and copies are rare user actions.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), DomainError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| DomainError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| DomainError::Clipboard(e.to_string()))
    }
}
