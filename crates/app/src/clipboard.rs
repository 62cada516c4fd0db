//! System clipboard behind the widget's `Clipboard` trait.
//!
//! An `arboard` handle is opened per operation; holding one for the process
//! lifetime keeps clipboard ownership pinned on some Linux setups. When the
//! system clipboard is unreachable (headless session, missing display) the
//! wrapper degrades to an in-process clipboard so copy/paste still works
//! inside the application.

use rea_tts_widget::{Clipboard, MemoryClipboard};
use tracing::warn;

#[derive(Default)]
pub struct SystemClipboard {
    fallback: MemoryClipboard,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn put(&mut self, text: &str) {
        // mirror into the fallback so a later read works even if the system
        // clipboard write failed
        self.fallback.put(text);
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(text.to_string()) {
                    warn!(%err, "clipboard write failed");
                }
            }
            Err(err) => warn!(%err, "system clipboard unavailable"),
        }
    }

    fn get(&mut self) -> Option<String> {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(_) => self.fallback.get(),
        }
    }
}
