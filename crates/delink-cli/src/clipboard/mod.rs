//! Clipboard delivery of the canonical URL.
//!
//! One `ClipboardSink` backend is selected at startup by probing the
//! environment; the resolution core never knows which one is active.
//! Delivery is best-effort: a failure is reported and the printed URL
//! stands.

mod local;
mod osc52;

use std::fmt;

/// Failure to deliver to the clipboard. Reported, never fatal.
#[derive(Debug)]
pub struct ClipboardError(String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// A destination for the resolved URL. Implementations never report the
/// value's content back, only success or failure.
pub trait ClipboardSink {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Best-effort write of `text` to the clipboard.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pick the backend for this session: OSC 52 when the session is remote
/// (SSH), the OS clipboard otherwise.
pub fn detect_backend() -> Box<dyn ClipboardSink> {
    let remote =
        std::env::var_os("SSH_CLIENT").is_some() || std::env::var_os("SSH_TTY").is_some();
    if remote {
        Box::new(osc52::Osc52Clipboard)
    } else {
        Box::new(local::LocalClipboard)
    }
}

/// Copy `text` with the detected backend.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let sink = detect_backend();
    tracing::debug!(backend = sink.name(), "clipboard write");
    sink.copy(text)
}
