//! Vertical scrolling state and scrollbar geometry.
//!
//! [`LineScroller`] owns the first-visible-line offset and keeps it clamped
//! against the wrapped line count and the viewport height. The slider
//! geometry helpers convert between the offset and track pixels for rendering
//! and for drag handling.

use crate::geom::Rect;

/// Width of the scrollbar track in pixels.
pub const SCROLLBAR_WIDTH: f32 = 12.0;

/// The slider never shrinks below this height, so it stays grabbable on long
/// documents.
pub const MIN_SLIDER_HEIGHT: f32 = 20.0;

/// Tracks which wrapped lines are visible in the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct LineScroller {
    /// Index of the first visible wrapped line.
    offset: usize,
    /// Number of lines the viewport can show.
    visible: usize,
    /// Total wrapped line count, updated each frame.
    total: usize,
    /// Fractional residue of wheel scrolling, so slow wheels accumulate.
    remainder: f32,
}

impl LineScroller {
    pub fn new(visible: usize) -> Self {
        Self {
            offset: 0,
            visible,
            total: 0,
            remainder: 0.0,
        }
    }

    /// First visible wrapped line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Largest valid offset for the current document.
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// True when the document is taller than the viewport.
    pub fn overflows(&self) -> bool {
        self.total > self.visible
    }

    /// Records this frame's wrapped line count and viewport height, then
    /// clamps the offset.
    pub fn update_size(&mut self, total: usize, visible: usize) {
        self.total = total;
        self.visible = visible;
        self.clamp();
    }

    /// Scrolls by a (possibly fractional) number of lines; positive moves the
    /// view down the document.
    pub fn scroll_by(&mut self, lines: f32) {
        let amount = self.remainder + lines;
        let whole = amount.trunc();
        self.remainder = amount - whole;
        let target = self.offset as isize + whole as isize;
        self.offset = target.max(0) as usize;
        self.clamp();
    }

    /// Jumps directly to `offset` (clamped).
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset;
        self.clamp();
    }

    /// Moves the minimum amount so `line` is inside the viewport.
    pub fn ensure_visible(&mut self, line: usize) {
        let visible = self.visible.max(1);
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + visible {
            self.offset = line + 1 - visible;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// The slider rectangle within `track`, sized and positioned
    /// proportionally to the visible window.
    ///
    /// Only meaningful when the document overflows; with nothing to scroll
    /// the slider fills the track.
    pub fn slider_rect(&self, track: Rect) -> Rect {
        if self.total == 0 {
            return track;
        }
        let fraction = (self.visible as f32 / self.total as f32).min(1.0);
        let height = (track.h * fraction).max(MIN_SLIDER_HEIGHT).min(track.h);
        let max_offset = self.max_offset();
        let y = if max_offset == 0 {
            track.y
        } else {
            track.y + (track.h - height) * (self.offset as f32 / max_offset as f32)
        };
        Rect {
            x: track.x,
            y,
            w: track.w,
            h: height,
        }
    }

    /// Maps a drag position (the slider's prospective top edge, in view
    /// space) back to a line offset. Returns `None` when there is nothing to
    /// scroll.
    pub fn offset_for_slider_y(&self, track: Rect, slider_top: f32) -> Option<usize> {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return None;
        }
        let height = self.slider_rect(track).h;
        let span = track.h - height;
        if span <= 0.0 {
            return None;
        }
        let fraction = ((slider_top - track.y) / span).clamp(0.0, 1.0);
        Some((fraction * max_offset as f32).round() as usize)
    }
}
