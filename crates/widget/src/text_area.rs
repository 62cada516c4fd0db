//! The scrollable, selectable, editable multi-line text box.
//!
//! [`TextArea`] interprets raw input events into buffer, cursor, selection,
//! and scroll mutations, and renders itself with the surface primitives. It
//! holds no toolkit types; fonts, clipboard, and drawing all arrive through
//! the [`FrameContext`] and [`Surface`] seams.
//!
//! Event handling never fails. Out-of-range positions clamp, clicks that
//! resolve to no line place the caret at the end of the buffer, and clipboard
//! failures behave like an empty clipboard.

use std::time::{Duration, Instant};

use rea_tts_buffer::TextBuffer;
use rea_tts_input::{InputEvent, Key, KeyEvent};

use crate::context::FrameContext;
use crate::font::TextMetrics;
use crate::geom::Rect;
use crate::palette;
use crate::scrollbar::{LineScroller, SCROLLBAR_WIDTH};
use crate::surface::Surface;
use crate::wrap::{wrap, LineLayout};

/// How long the caret stays in each blink phase.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Inset between the border and the text, in pixels.
const PADDING: f32 = 3.0;
const BORDER_WIDTH: f32 = 2.0;
const CORNER_RADIUS: f32 = 3.0;

/// What a key event asks the widget to do.
///
/// Keys are translated to commands first and the commands applied second, so
/// the selection-replacement rule can be stated once rather than per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditCommand {
    SelectAll,
    Copy,
    Cut,
    Paste,
    DeleteBackward,
    DeleteForward,
    Newline,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Insert(char),
}

impl EditCommand {
    fn for_key(event: &KeyEvent) -> Option<Self> {
        if event.modifiers.shortcut() {
            return match event.key {
                Key::Char('a') | Key::Char('A') => Some(Self::SelectAll),
                Key::Char('c') | Key::Char('C') => Some(Self::Copy),
                Key::Char('x') | Key::Char('X') => Some(Self::Cut),
                Key::Char('v') | Key::Char('V') => Some(Self::Paste),
                _ => None,
            };
        }
        match event.key {
            Key::Backspace => Some(Self::DeleteBackward),
            Key::Delete => Some(Self::DeleteForward),
            Key::Return => Some(Self::Newline),
            Key::Left => Some(Self::MoveLeft),
            Key::Right => Some(Self::MoveRight),
            Key::Up => Some(Self::MoveUp),
            Key::Down => Some(Self::MoveDown),
            Key::Char(ch) if !event.modifiers.alt => Some(Self::Insert(ch)),
            _ => None,
        }
    }

    /// Commands that first delete a non-empty selection and collapse the
    /// caret before applying their own effect. Navigation moves and the
    /// clipboard commands manage the selection themselves.
    fn replaces_selection(&self) -> bool {
        matches!(
            self,
            Self::DeleteBackward
                | Self::DeleteForward
                | Self::Newline
                | Self::Insert(_)
        )
    }
}

/// A scrollable multi-line text editor drawn from primitives.
pub struct TextArea {
    rect: Rect,
    buffer: TextBuffer,
    focused: bool,
    scroller: LineScroller,
    layout: LineLayout,
    /// Pointer-y offset from the slider top at drag start, so the slider
    /// tracks the pointer instead of snapping its top edge to it.
    drag_anchor: Option<f32>,
    caret_visible: bool,
    last_blink: Option<Instant>,
    /// This frame's slider rectangle; `None` when the content fits.
    slider: Option<Rect>,
    /// Line height from the last frame, used for click row mapping.
    line_height: f32,
}

impl TextArea {
    /// Creates a text area over `rect` holding `initial` text, caret at the
    /// end, unfocused.
    pub fn new(rect: Rect, initial: &str) -> Self {
        Self {
            rect,
            buffer: TextBuffer::from_str(initial),
            focused: false,
            scroller: LineScroller::new(0),
            layout: LineLayout::empty(),
            drag_anchor: None,
            caret_visible: true,
            last_blink: None,
            slider: None,
            line_height: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Buffer contents trimmed of leading/trailing whitespace; what the
    /// application hands onward.
    pub fn text(&self) -> String {
        self.buffer.trimmed()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Direct buffer access, for the shell (presetting contents) and tests
    /// (establishing selections).
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroller.offset()
    }

    fn inner_width(&self) -> f32 {
        self.rect.w - SCROLLBAR_WIDTH - 2.0 * PADDING
    }

    fn inner_height(&self) -> f32 {
        self.rect.h - 2.0 * PADDING
    }

    fn track_rect(&self) -> Rect {
        Rect {
            x: self.rect.right() - SCROLLBAR_WIDTH,
            y: self.rect.y,
            w: SCROLLBAR_WIDTH,
            h: self.rect.h,
        }
    }

    // ==================== Event handling ====================

    /// Interprets one input event. Events the widget has no use for are
    /// ignored.
    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut FrameContext<'_>) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(*x, *y, ctx),
            InputEvent::PointerUp => self.drag_anchor = None,
            InputEvent::PointerMoved { y, .. } => self.pointer_moved(*y),
            InputEvent::Wheel { lines } => {
                if self.focused {
                    self.scroller.scroll_by(*lines);
                }
            }
            InputEvent::Key(key) => {
                if self.focused {
                    if let Some(cmd) = EditCommand::for_key(key) {
                        self.apply(cmd, ctx);
                        self.wake_caret(ctx.now);
                    }
                }
            }
            InputEvent::Text(text) => {
                if self.focused && !text.is_empty() {
                    if self.buffer.has_selection() {
                        self.buffer.delete_selection();
                    }
                    self.buffer.insert_str(text);
                    self.wake_caret(ctx.now);
                }
            }
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32, ctx: &FrameContext<'_>) {
        if let Some(slider) = self.slider {
            if slider.contains(x, y) {
                self.drag_anchor = Some(y - slider.y);
                return;
            }
        }
        if self.rect.contains(x, y) {
            self.focused = true;
            self.buffer.clear_selection();
            self.place_caret_at_pointer(x, y, ctx.metrics);
            self.wake_caret(ctx.now);
        } else {
            self.focused = false;
        }
    }

    fn pointer_moved(&mut self, y: f32) {
        if let Some(anchor) = self.drag_anchor {
            let slider_top = y - anchor;
            if let Some(offset) = self.scroller.offset_for_slider_y(self.track_rect(), slider_top) {
                self.scroller.scroll_to(offset);
            }
        }
    }

    /// Maps a click to a caret offset. A click below the last visible line
    /// (or with no lines at all) lands at the end of the buffer.
    fn place_caret_at_pointer(&mut self, x: f32, y: f32, metrics: &dyn TextMetrics) {
        if self.layout.is_empty() || self.line_height <= 0.0 {
            self.buffer.set_cursor(self.buffer.len());
            return;
        }
        let cx = x - self.rect.x - PADDING;
        let cy = y - self.rect.y - PADDING;
        let row = self.scroller.offset() as isize + (cy / self.line_height).floor() as isize;
        let row = row.max(0) as usize;
        let Some(line) = self.layout.line(row) else {
            self.buffer.set_cursor(self.buffer.len());
            return;
        };
        let mut col = line.char_len();
        for candidate in 0..=line.char_len() {
            if metrics.text_width(line.prefix(candidate)) >= cx {
                col = candidate;
                break;
            }
        }
        self.buffer.set_cursor(self.layout.offset_at(row, col));
    }

    fn apply(&mut self, cmd: EditCommand, ctx: &mut FrameContext<'_>) {
        if cmd.replaces_selection() && self.buffer.has_selection() {
            self.buffer.delete_selection();
        }
        match cmd {
            EditCommand::SelectAll => self.buffer.select_all(),
            EditCommand::Copy => {
                let text = self
                    .buffer
                    .selected_text()
                    .unwrap_or_else(|| self.buffer.content());
                ctx.clipboard.put(&text);
            }
            EditCommand::Cut => {
                if let Some(text) = self.buffer.selected_text() {
                    ctx.clipboard.put(&text);
                    self.buffer.delete_selection();
                }
            }
            EditCommand::Paste => {
                if let Some(text) = ctx.clipboard.get() {
                    if !text.is_empty() {
                        self.buffer.delete_selection();
                        self.buffer.insert_str(&text);
                    }
                }
            }
            EditCommand::DeleteBackward => self.buffer.delete_backward(),
            EditCommand::DeleteForward => self.buffer.delete_forward(),
            EditCommand::Newline => self.buffer.insert_newline(),
            EditCommand::Insert(ch) => self.buffer.insert_char(ch),
            EditCommand::MoveLeft => {
                self.buffer.clear_selection();
                self.buffer.move_left();
            }
            EditCommand::MoveRight => {
                self.buffer.clear_selection();
                self.buffer.move_right();
            }
            EditCommand::MoveUp => self.move_vertical(-1),
            EditCommand::MoveDown => self.move_vertical(1),
        }
    }

    /// Moves the caret to the same column on an adjacent wrapped line,
    /// clamped to that line's length, and scrolls it into view.
    fn move_vertical(&mut self, delta: isize) {
        self.buffer.clear_selection();
        if self.layout.is_empty() {
            return;
        }
        let (line, col) = self.layout.position_for_offset(self.buffer.cursor());
        let target = line as isize + delta;
        if target < 0 || target as usize >= self.layout.len() {
            return;
        }
        let target = target as usize;
        self.buffer.set_cursor(self.layout.offset_at(target, col));
        self.scroller.ensure_visible(target);
    }

    fn wake_caret(&mut self, now: Instant) {
        self.caret_visible = true;
        self.last_blink = Some(now);
    }

    // ==================== Frame update ====================

    /// Rewraps, clamps the scroll offset, advances the caret blink, and
    /// recomputes the slider. Call once per frame before [`Self::render`].
    pub fn advance_frame(&mut self, ctx: &FrameContext<'_>) {
        self.line_height = ctx.metrics.line_height();
        self.layout = wrap(&self.buffer.content(), self.inner_width(), ctx.metrics);

        let visible = if self.line_height > 0.0 {
            (self.inner_height() / self.line_height) as usize
        } else {
            0
        };
        self.scroller.update_size(self.layout.len(), visible);

        match self.last_blink {
            None => self.last_blink = Some(ctx.now),
            Some(last) => {
                if ctx.now.duration_since(last) >= CURSOR_BLINK_INTERVAL {
                    self.caret_visible = !self.caret_visible;
                    self.last_blink = Some(ctx.now);
                }
            }
        }

        self.slider = self
            .scroller
            .overflows()
            .then(|| self.scroller.slider_rect(self.track_rect()));
    }

    // ==================== Rendering ====================

    /// Draws the widget. Pure read; mutation happens only in event handling
    /// and [`Self::advance_frame`].
    pub fn render(&self, surface: &mut dyn Surface, ctx: &FrameContext<'_>) {
        surface.fill_rect(self.rect, palette::WIDGET_BACKGROUND, CORNER_RADIUS);
        let border = if self.focused {
            palette::BORDER_FOCUSED
        } else {
            palette::BORDER_UNFOCUSED
        };
        surface.stroke_rect(self.rect, BORDER_WIDTH, border, CORNER_RADIUS);

        let text_x = self.rect.x + PADDING;
        let text_y = self.rect.y + PADDING;
        let first = self.scroller.offset();
        let last = (first + self.scroller.visible()).min(self.layout.len());

        if let Some((sel_start, sel_end)) = self.buffer.selection_range() {
            if sel_start != sel_end {
                for row in first..last {
                    self.render_selection_span(
                        surface,
                        ctx.metrics,
                        row,
                        first,
                        sel_start,
                        sel_end,
                        text_x,
                        text_y,
                    );
                }
            }
        }

        for row in first..last {
            if let Some(line) = self.layout.line(row) {
                let y = text_y + (row - first) as f32 * self.line_height;
                surface.draw_text(text_x, y, line.text(), palette::TEXT);
            }
        }

        if self.focused && self.caret_visible {
            self.render_caret(surface, ctx.metrics, first, last, text_x, text_y);
        }

        if let Some(slider) = self.slider {
            surface.fill_rect(self.track_rect(), palette::SCROLLBAR_TRACK, 0.0);
            surface.fill_rect(slider, palette::SCROLLBAR_SLIDER, 0.0);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_selection_span(
        &self,
        surface: &mut dyn Surface,
        metrics: &dyn TextMetrics,
        row: usize,
        first: usize,
        sel_start: usize,
        sel_end: usize,
        text_x: f32,
        text_y: f32,
    ) {
        let Some(line) = self.layout.line(row) else {
            return;
        };
        let line_start = line.start();
        let line_end = line_start + line.char_len();
        let lo = sel_start.max(line_start);
        let hi = sel_end.min(line_end);
        if hi <= lo {
            return;
        }
        let x0 = metrics.text_width(line.prefix(lo - line_start));
        let x1 = metrics.text_width(line.prefix(hi - line_start));
        let y = text_y + (row - first) as f32 * self.line_height;
        surface.fill_rect(
            Rect::new(text_x + x0, y, x1 - x0, self.line_height),
            palette::SELECTION,
            0.0,
        );
    }

    fn render_caret(
        &self,
        surface: &mut dyn Surface,
        metrics: &dyn TextMetrics,
        first: usize,
        last: usize,
        text_x: f32,
        text_y: f32,
    ) {
        let (row, col) = self.layout.position_for_offset(self.buffer.cursor());
        if row < first || row >= last {
            return;
        }
        let Some(line) = self.layout.line(row) else {
            return;
        };
        let x = text_x + metrics.text_width(line.prefix(col));
        let y = text_y + (row - first) as f32 * self.line_height;
        surface.draw_line(x, y, x, y + self.line_height, palette::TEXT);
    }
}
