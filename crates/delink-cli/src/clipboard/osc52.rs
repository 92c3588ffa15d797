//! OSC 52 backend: copy through the terminal escape sequence.
//!
//! Inside an SSH session there is no local display server to talk to; the
//! OSC 52 sequence asks the terminal emulator to place the payload on the
//! clipboard of the machine the user is actually sitting at.

use std::fs::OpenOptions;
use std::io::Write;

use base64::Engine;

use super::{ClipboardError, ClipboardSink};

pub(crate) struct Osc52Clipboard;

impl ClipboardSink for Osc52Clipboard {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text);
        // Write to the controlling terminal, not stdout: stdout carries the
        // canonical URL and may be piped.
        let mut tty = OpenOptions::new()
            .write(true)
            .open("/dev/tty")
            .map_err(|e| ClipboardError(format!("open /dev/tty: {}", e)))?;
        write!(tty, "\x1b]52;c;{}\x07", payload)
            .and_then(|_| tty.flush())
            .map_err(|e| ClipboardError(format!("write OSC 52 sequence: {}", e)))
    }
}
