//! Greedy word-wrap layout.
//!
//! The buffer is rewrapped from scratch every frame: paragraph by paragraph
//! (split on `'\n'`), space-separated words are greedily packed into lines
//! measured against the inner pixel width. Each produced line records the
//! character offset at which it begins, which is what makes caret placement,
//! click mapping, and selection highlighting possible on wrapped text.
//!
//! # Offset bookkeeping
//!
//! The offset counter advances by `committed_chars + 1` per committed line,
//! treating the separator that ended the line (a space or the paragraph's
//! newline) as one character. Two known approximations are kept deliberately,
//! matching the behavior this widget reproduces:
//!
//! - when a word is wider than the whole line, the greedy pass first commits
//!   the (possibly empty) accumulated candidate and the counter still
//!   advances past a separator that was never there;
//! - only the *final* line's start offset is corrected afterwards, from the
//!   true buffer tail, to absorb trailing-whitespace drift.
//!
//! Interior offsets immediately after an over-wide word can therefore be off
//! by one. [`LineLayout::position_for_offset`] clamps, so the caret and
//! selection stay inside the widget regardless.

use crate::font::TextMetrics;

/// One wrapped visual line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    text: String,
    start: usize,
    char_len: usize,
}

impl Line {
    /// The line's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset in the buffer at which this line begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the line in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// The first `cols` characters of the line.
    ///
    /// Used for prefix-width measurement; `cols` past the end yields the
    /// whole line.
    pub fn prefix(&self, cols: usize) -> &str {
        match self.text.char_indices().nth(cols) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// The wrapped view of a buffer at one widget width.
///
/// Always contains at least one line (an empty buffer wraps to one empty
/// line).
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    lines: Vec<Line>,
}

impl LineLayout {
    /// An empty layout, used before the first frame has run.
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// The index of the line containing `offset`.
    ///
    /// An offset at a line's end (on the separator) resolves to that line,
    /// and end-of-buffer to the last line. Returns 0 for an empty layout.
    pub fn line_for_offset(&self, offset: usize) -> usize {
        for (index, line) in self.lines.iter().enumerate() {
            let end = line.start + line.char_len;
            let next_start = self
                .lines
                .get(index + 1)
                .map(|next| next.start)
                .unwrap_or(usize::MAX);
            if offset <= end && offset < next_start {
                return index;
            }
        }
        self.lines.len().saturating_sub(1)
    }

    /// Converts a buffer offset into `(line, column)`, column clamped to the
    /// line's length.
    pub fn position_for_offset(&self, offset: usize) -> (usize, usize) {
        let index = self.line_for_offset(offset);
        match self.lines.get(index) {
            Some(line) => (index, offset.saturating_sub(line.start).min(line.char_len)),
            None => (0, 0),
        }
    }

    /// Converts `(line, column)` back into a buffer offset, with the column
    /// clamped to the line's length.
    pub fn offset_at(&self, line: usize, col: usize) -> usize {
        match self.lines.get(line) {
            Some(line) => line.start + col.min(line.char_len),
            None => 0,
        }
    }
}

/// Wraps `text` against `inner_width` pixels, measuring through `metrics`.
pub fn wrap(text: &str, inner_width: f32, metrics: &dyn TextMetrics) -> LineLayout {
    let mut lines = Vec::new();
    let mut offset = 0usize;

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if metrics.text_width(&candidate) <= inner_width {
                current = candidate;
            } else {
                let char_len = current.chars().count();
                lines.push(Line {
                    text: current,
                    start: offset,
                    char_len,
                });
                offset += char_len + 1;
                current = word.to_string();
            }
        }
        let char_len = current.chars().count();
        lines.push(Line {
            text: current,
            start: offset,
            char_len,
        });
        offset += char_len + 1;
    }

    // Re-anchor the final line on the true buffer tail; the greedy pass
    // over-counts separators around over-wide words and trailing spaces.
    if let Some(last) = lines.last_mut() {
        let total = text.chars().count();
        last.start = total.saturating_sub(last.char_len);
    }

    LineLayout { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance metrics: every char is 8px wide, lines are 16px tall.
    struct MonoMetrics;

    impl TextMetrics for MonoMetrics {
        fn text_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 8.0
        }

        fn line_height(&self) -> f32 {
            16.0
        }
    }

    fn texts(layout: &LineLayout) -> Vec<&str> {
        layout.lines().iter().map(|l| l.text()).collect()
    }

    fn starts(layout: &LineLayout) -> Vec<usize> {
        layout.lines().iter().map(|l| l.start()).collect()
    }

    // ==================== Basic wrapping ====================

    #[test]
    fn test_empty_text_wraps_to_one_empty_line() {
        let layout = wrap("", 80.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec![""]);
        assert_eq!(starts(&layout), vec![0]);
    }

    #[test]
    fn test_single_short_line() {
        let layout = wrap("hello", 80.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["hello"]);
        assert_eq!(starts(&layout), vec![0]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        // 10 columns at 8px; "hello world" needs 11
        let layout = wrap("hello world", 80.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["hello", "world"]);
        assert_eq!(starts(&layout), vec![0, 6]);
    }

    #[test]
    fn test_packs_words_greedily() {
        // 11 columns: "aa bb cc" = 8 chars fits; adding "dd" would be 11... fits at 88px
        let layout = wrap("aa bb cc dd", 88.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["aa bb cc dd"]);
        let layout = wrap("aa bb cc dd ee", 88.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["aa bb cc dd", "ee"]);
        assert_eq!(starts(&layout), vec![0, 12]);
    }

    // ==================== Paragraphs ====================

    #[test]
    fn test_newlines_split_paragraphs() {
        let layout = wrap("line one\nline two\nline three", 800.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["line one", "line two", "line three"]);
        assert_eq!(starts(&layout), vec![0, 9, 18]);
    }

    #[test]
    fn test_empty_paragraph_produces_empty_line() {
        let layout = wrap("a\n\nb", 800.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["a", "", "b"]);
        assert_eq!(starts(&layout), vec![0, 2, 3]);
    }

    #[test]
    fn test_trailing_newline_produces_trailing_empty_line() {
        let layout = wrap("ab\n", 800.0, &MonoMetrics);
        assert_eq!(texts(&layout), vec!["ab", ""]);
        // final line re-anchored to the buffer tail
        assert_eq!(starts(&layout), vec![0, 3]);
    }

    // ==================== Over-wide words ====================

    #[test]
    fn test_overwide_word_gets_its_own_line_without_looping() {
        let word = "supercalifragilisticexpialidocious";
        let layout = wrap(word, 80.0, &MonoMetrics); // 10 columns, word is 34
        assert!(layout.lines().iter().any(|l| l.text() == word));
        // every recorded start stays within the buffer
        let total = word.chars().count();
        for line in layout.lines() {
            assert!(line.start() <= total);
        }
    }

    #[test]
    fn test_overwide_word_after_short_words() {
        let layout = wrap("aa supercalifragilisticexpialidocious", 80.0, &MonoMetrics);
        assert_eq!(
            texts(&layout),
            vec!["aa", "supercalifragilisticexpialidocious"]
        );
        assert_eq!(starts(&layout), vec![0, 3]);
    }

    // ==================== Last-line correction ====================

    #[test]
    fn test_last_line_start_matches_buffer_tail() {
        let text = "hello world again";
        let layout = wrap(text, 80.0, &MonoMetrics);
        let last = layout.lines().last().unwrap();
        assert_eq!(
            last.start(),
            text.chars().count() - last.char_len(),
            "last line must be anchored on the true tail"
        );
    }

    // ==================== Offset mapping ====================

    #[test]
    fn test_line_for_offset() {
        let layout = wrap("hello world", 80.0, &MonoMetrics);
        assert_eq!(layout.line_for_offset(0), 0);
        assert_eq!(layout.line_for_offset(4), 0);
        // offset 5 is the separator at the end of "hello"
        assert_eq!(layout.line_for_offset(5), 0);
        assert_eq!(layout.line_for_offset(6), 1);
        assert_eq!(layout.line_for_offset(11), 1);
        // past the end clamps to the last line
        assert_eq!(layout.line_for_offset(99), 1);
    }

    #[test]
    fn test_position_for_offset_clamps_column() {
        let layout = wrap("hello world", 80.0, &MonoMetrics);
        assert_eq!(layout.position_for_offset(8), (1, 2));
        assert_eq!(layout.position_for_offset(99), (1, 5));
    }

    #[test]
    fn test_offset_at_round_trips() {
        let layout = wrap("hello world wide web", 80.0, &MonoMetrics);
        for offset in [0, 3, 6, 9, 12, 15, 19] {
            let (line, col) = layout.position_for_offset(offset);
            assert_eq!(layout.offset_at(line, col), offset);
        }
    }

    #[test]
    fn test_offset_at_clamps() {
        let layout = wrap("hello", 800.0, &MonoMetrics);
        assert_eq!(layout.offset_at(0, 99), 5);
        assert_eq!(layout.offset_at(99, 0), 0);
    }

    #[test]
    fn test_prefix_is_char_based() {
        let layout = wrap("héllo", 800.0, &MonoMetrics);
        let line = layout.line(0).unwrap();
        assert_eq!(line.prefix(2), "hé");
        assert_eq!(line.prefix(99), "héllo");
    }
}
