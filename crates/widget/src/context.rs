//! Per-frame collaborator bundle.
//!
//! The driving loop builds one [`FrameContext`] per rendering frame and
//! threads it through event handling and the frame update for every widget.
//! Bundling the collaborators keeps the widget methods' signatures stable as
//! providers are added.

use std::time::Instant;

use crate::clipboard::Clipboard;
use crate::font::TextMetrics;

/// Collaborators and the clock reading for one frame.
pub struct FrameContext<'a> {
    /// Monotonic timestamp for this frame; used for caret blink timing.
    pub now: Instant,
    /// Font measurement provider.
    pub metrics: &'a dyn TextMetrics,
    /// Clipboard provider.
    pub clipboard: &'a mut dyn Clipboard,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        now: Instant,
        metrics: &'a dyn TextMetrics,
        clipboard: &'a mut dyn Clipboard,
    ) -> Self {
        Self {
            now,
            metrics,
            clipboard,
        }
    }
}
