//! rea-tts-buffer: the text buffer behind the rea-tts editor widget.
//!
//! This crate provides a gap buffer-backed text buffer addressed by character
//! offsets, with cursor tracking and an optional selection range. It is the
//! model half of the scrollable text box: every editing operation the widget
//! performs (typing, backspace, cut, paste, select-all) bottoms out here.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Character and string insertion at the cursor offset
//! - Grapheme-cluster-aware cursor movement and deletion
//! - An unordered selection range (anchor may come before or after the head)
//! - Defensive clamping: no operation can leave the cursor or selection
//!   outside `[0, len]`
//!
//! # Example
//!
//! ```
//! use rea_tts_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::from_str("hello world");
//! assert_eq!(buffer.cursor(), 11); // cursor starts at the end
//!
//! buffer.move_left();
//! buffer.move_left();
//! buffer.delete_backward();
//! assert_eq!(buffer.content(), "hello wold");
//! assert_eq!(buffer.cursor(), 8);
//! ```
//!
//! # Offsets, not (line, column)
//!
//! The widget rewraps the whole buffer every frame, so there is no persistent
//! line structure to index into. The buffer therefore exposes a single flat
//! character offset; the widget's line layout maps offsets to wrapped rows.

mod gap_buffer;
mod grapheme;
mod text_buffer;

pub use gap_buffer::GapBuffer;
pub use grapheme::{boundary_left, boundary_right, snap_to_boundary};
pub use text_buffer::{Selection, TextBuffer};
