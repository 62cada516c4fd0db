//! TextBuffer: cursor + selection on top of the gap buffer.
//!
//! All positions are character offsets in `[0, len]`. Every public operation
//! clamps rather than fails; feeding this type out-of-range offsets can never
//! corrupt it, which is what lets the widget treat malformed input events as
//! ignorable.

use crate::gap_buffer::GapBuffer;
use crate::grapheme;

/// A selection span between two character offsets.
///
/// The span is stored unordered: `anchor` is where the selection started and
/// `head` is where it currently ends, and either may be the smaller offset.
/// A span with `anchor == head` is an *empty* selection — present, but not
/// participating in cut/copy/replace semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Returns the span as an ordered `(start, end)` pair.
    pub fn ordered(&self) -> (usize, usize) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// Returns true if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// An editable character sequence with a cursor and optional selection.
///
/// Invariants, maintained by every operation:
/// - `0 <= cursor <= len`
/// - the cursor sits on a grapheme cluster boundary
/// - selection bounds, when present, lie within `[0, len]`
#[derive(Debug)]
pub struct TextBuffer {
    buffer: GapBuffer,
    cursor: usize,
    selection: Option<Selection>,
}

impl TextBuffer {
    /// Creates an empty buffer with the cursor at 0.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            cursor: 0,
            selection: None,
        }
    }

    /// Creates a buffer holding `text`, with the cursor at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let buffer = GapBuffer::from_str(text);
        let cursor = buffer.len();
        Self {
            buffer,
            cursor,
            selection: None,
        }
    }

    // ==================== Accessors ====================

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The full contents as a `String`.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// The contents with leading and trailing whitespace trimmed.
    ///
    /// This is what the application hands to the speech engine.
    pub fn trimmed(&self) -> String {
        self.content().trim().to_string()
    }

    /// Current cursor offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Places the cursor at `offset`, clamped to the buffer and snapped to
    /// the nearest grapheme boundary at or before it.
    pub fn set_cursor(&mut self, offset: usize) {
        let chars = self.buffer.to_chars();
        self.cursor = grapheme::snap_to_boundary(&chars, offset);
    }

    // ==================== Selection ====================

    /// The raw (unordered) selection span, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The selection as an ordered `(start, end)` pair, if any.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection.map(|sel| sel.ordered())
    }

    /// Returns true if a *non-empty* selection exists.
    pub fn has_selection(&self) -> bool {
        self.selection.map_or(false, |sel| !sel.is_empty())
    }

    /// Sets the selection span, clamping both bounds to the buffer.
    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        let len = self.len();
        self.selection = Some(Selection::new(anchor.min(len), head.min(len)));
    }

    /// Removes the selection (distinct from an empty selection).
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Selects the whole buffer and moves the cursor to the end.
    pub fn select_all(&mut self) {
        let len = self.len();
        self.selection = Some(Selection::new(0, len));
        self.cursor = len;
    }

    /// The selected substring, or `None` when there is no non-empty selection.
    pub fn selected_text(&self) -> Option<String> {
        let sel = self.selection?;
        if sel.is_empty() {
            return None;
        }
        let (start, end) = sel.ordered();
        Some(self.buffer.slice(start, end))
    }

    /// Deletes the selected span, collapsing the cursor to its start.
    ///
    /// Returns true if anything was deleted. The selection is cleared either
    /// way it was non-empty; an absent or empty selection is a no-op.
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (start, end) = self.selection.unwrap().ordered();
        self.buffer.remove_range(start, end);
        self.cursor = start;
        self.selection = None;
        self.clamp();
        true
    }

    // ==================== Editing ====================

    /// Inserts a character at the cursor and advances past it.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
        self.clamp();
    }

    /// Inserts a string at the cursor and advances past it.
    pub fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(self.cursor, s);
        self.cursor += s.chars().count();
        self.clamp();
    }

    /// Inserts a newline at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes one grapheme cluster before the cursor, if any.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars = self.buffer.to_chars();
        let start = grapheme::boundary_left(&chars, self.cursor);
        self.buffer.remove_range(start, self.cursor);
        self.cursor = start;
        self.clamp();
    }

    /// Deletes one grapheme cluster at the cursor, if any.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let chars = self.buffer.to_chars();
        let end = grapheme::boundary_right(&chars, self.cursor);
        self.buffer.remove_range(self.cursor, end);
        self.clamp();
    }

    // ==================== Cursor movement ====================

    /// Moves the cursor one grapheme cluster left (clamped at 0).
    pub fn move_left(&mut self) {
        let chars = self.buffer.to_chars();
        self.cursor = grapheme::boundary_left(&chars, self.cursor);
    }

    /// Moves the cursor one grapheme cluster right (clamped at len).
    pub fn move_right(&mut self) {
        let chars = self.buffer.to_chars();
        self.cursor = grapheme::boundary_right(&chars, self.cursor);
    }

    // ==================== Invariant maintenance ====================

    /// Re-clamps cursor and selection after a mutation.
    fn clamp(&mut self) {
        let len = self.len();
        self.cursor = self.cursor.min(len);
        if let Some(sel) = self.selection {
            self.selection = Some(Selection::new(sel.anchor.min(len), sel.head.min(len)));
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction ====================

    #[test]
    fn test_new_is_empty() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn test_from_str_cursor_at_end() {
        let buf = TextBuffer::from_str("hello");
        assert_eq!(buf.content(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    // ==================== Editing ====================

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut buf = TextBuffer::new();
        buf.insert_char('h');
        buf.insert_char('i');
        assert_eq!(buf.content(), "hi");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_str_in_middle() {
        let mut buf = TextBuffer::from_str("hd");
        buf.set_cursor(1);
        buf.insert_str("ello worl");
        assert_eq!(buf.content(), "hello world");
        assert_eq!(buf.cursor(), 10);
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_cursor(0);
        buf.delete_backward();
        assert_eq!(buf.content(), "abc");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = TextBuffer::from_str("abc");
        buf.delete_forward();
        assert_eq!(buf.content(), "abc");
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_cursor(1);
        buf.delete_forward();
        assert_eq!(buf.content(), "ac");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_newline_insertion() {
        let mut buf = TextBuffer::from_str("ab");
        buf.set_cursor(1);
        buf.insert_newline();
        assert_eq!(buf.content(), "a\nb");
        assert_eq!(buf.cursor(), 2);
    }

    // ==================== Grapheme awareness ====================

    #[test]
    fn test_backspace_removes_whole_cluster() {
        let mut buf = TextBuffer::from_str("ae\u{301}");
        buf.delete_backward();
        assert_eq!(buf.content(), "a");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_move_left_over_cluster() {
        let mut buf = TextBuffer::from_str("ae\u{301}b");
        buf.move_left(); // over 'b'
        buf.move_left(); // over the e-acute cluster
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_set_cursor_snaps_inside_cluster() {
        let mut buf = TextBuffer::from_str("e\u{301}x");
        buf.set_cursor(1); // inside the cluster
        assert_eq!(buf.cursor(), 0);
    }

    // ==================== Selection ====================

    #[test]
    fn test_select_all() {
        let mut buf = TextBuffer::from_str("abcdef");
        buf.select_all();
        assert_eq!(buf.selection_range(), Some((0, 6)));
        assert_eq!(buf.cursor(), 6);
        assert_eq!(buf.selected_text().as_deref(), Some("abcdef"));
    }

    #[test]
    fn test_empty_selection_is_not_a_selection() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_selection(2, 2);
        assert!(buf.selection().is_some());
        assert!(!buf.has_selection());
        assert_eq!(buf.selected_text(), None);
    }

    #[test]
    fn test_reversed_selection_orders() {
        let mut buf = TextBuffer::from_str("abcdefgh");
        buf.set_selection(7, 3);
        assert_eq!(buf.selection_range(), Some((3, 7)));
        assert_eq!(buf.selected_text().as_deref(), Some("defg"));
    }

    #[test]
    fn test_delete_selection_collapses_to_start() {
        let mut buf = TextBuffer::from_str("abcdefgh");
        buf.set_selection(3, 7);
        assert!(buf.delete_selection());
        assert_eq!(buf.content(), "abch");
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn test_delete_selection_without_selection() {
        let mut buf = TextBuffer::from_str("abc");
        assert!(!buf.delete_selection());
        assert_eq!(buf.content(), "abc");
    }

    #[test]
    fn test_selection_bounds_clamped() {
        let mut buf = TextBuffer::from_str("abc");
        buf.set_selection(0, 99);
        assert_eq!(buf.selection_range(), Some((0, 3)));
    }

    // ==================== Trimming ====================

    #[test]
    fn test_trimmed() {
        let buf = TextBuffer::from_str("  hello world \n");
        assert_eq!(buf.trimmed(), "hello world");
    }

    #[test]
    fn test_trimmed_is_idempotent() {
        let buf = TextBuffer::from_str("  x  ");
        let once = buf.trimmed();
        assert_eq!(TextBuffer::from_str(&once).trimmed(), once);
    }
}
