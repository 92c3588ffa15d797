//! OS clipboard backend (arboard).

use super::{ClipboardError, ClipboardSink};

pub(crate) struct LocalClipboard;

impl ClipboardSink for LocalClipboard {
    fn name(&self) -> &'static str {
        "local"
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError(format!("clipboard init: {}", e)))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(format!("clipboard set: {}", e)))
    }
}
