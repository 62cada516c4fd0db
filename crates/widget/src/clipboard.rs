//! Clipboard seam.
//!
//! The system clipboard is wrapped behind a minimal trait ("humble object"
//! pattern) — all copy/cut/paste business logic stays in the widget, and the
//! platform wrapper in the shell carries no logic worth testing. Clipboard
//! operations are best-effort: a failed write is dropped, a failed read acts
//! like an empty clipboard.

/// Text clipboard access.
pub trait Clipboard {
    /// Places `text` on the clipboard, replacing previous contents.
    fn put(&mut self, text: &str);

    /// Reads the clipboard. Returns `None` when the clipboard is empty,
    /// holds non-text data, or cannot be read.
    fn get(&mut self) -> Option<String>;
}

/// An in-process clipboard.
///
/// Used by the headless tests, and by the shell as a fallback when the system
/// clipboard is unavailable (e.g. no display server).
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn put(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }

    fn get(&mut self) -> Option<String> {
        self.contents.clone()
    }
}
