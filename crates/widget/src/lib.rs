//! rea-tts-widget: a scrollable, selectable, editable multi-line text box
//! implemented directly on a low-level 2D drawing surface.
//!
//! The windowing layer used by the application exposes only primitive drawing
//! calls (filled/stroked rectangles, text runs, lines) and raw input events —
//! there is no native multi-line text widget to lean on. This crate builds
//! one: [`TextArea`] owns a text buffer, cursor, optional selection, scroll
//! offset, and a per-frame word-wrap layout, and interprets pointer, wheel,
//! and keyboard events into edits.
//!
//! Everything the widget needs from the outside world comes in through three
//! narrow traits, which is what makes the whole crate testable headless:
//!
//! - [`TextMetrics`] — pixel width of a string and the line height
//! - [`Clipboard`] — put/get text, failures swallowed
//! - [`Surface`] — the drawing primitives
//!
//! Per frame the driving loop calls, in order: [`TextArea::handle_event`] for
//! every queued event, one [`TextArea::advance_frame`], one
//! [`TextArea::render`]. All methods are infallible; malformed events and
//! out-of-range indices are clamped or ignored.

mod button;
mod clipboard;
mod context;
mod font;
mod geom;
pub mod palette;
mod scrollbar;
mod surface;
mod text_area;
mod wrap;

pub use button::Button;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use context::FrameContext;
pub use font::TextMetrics;
pub use geom::{Color, Rect};
pub use scrollbar::{LineScroller, MIN_SLIDER_HEIGHT, SCROLLBAR_WIDTH};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use text_area::{TextArea, CURSOR_BLINK_INTERVAL};
pub use wrap::{wrap, Line, LineLayout};
