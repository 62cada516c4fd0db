//! Gap buffer storage for the text buffer.
//!
//! A gap buffer is a character array with a movable hole. Edits near the hole
//! are O(1); moving the hole costs O(distance). Text-box editing is strongly
//! local, so the hole tends to already sit where the next edit lands.
//!
//! Unlike a classic gap buffer that exposes gap-anchored backspace/delete,
//! this one is addressed by logical position: `insert_str(pos, ..)` and
//! `remove_range(start, end)`. The cursor lives in `TextBuffer`, which may be
//! moved by clicks and arrow keys independently of where the last edit was,
//! so the gap is repositioned on demand rather than tracked as the cursor.

const INITIAL_GAP: usize = 64;

/// Character storage with a movable gap.
///
/// Invariant: `data` is laid out as `[front | gap | back]` where
/// `front = data[..gap_start]` and `back = data[gap_end..]`. Logical content
/// is `front` followed by `back`; the gap cells hold stale data.
#[derive(Debug)]
pub struct GapBuffer {
    data: Vec<char>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    /// Creates an empty buffer with a preallocated gap.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP],
            gap_start: 0,
            gap_end: INITIAL_GAP,
        }
    }

    /// Creates a buffer holding `text`, with the gap at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + INITIAL_GAP, '\0');
        Self {
            data,
            gap_start: len,
            gap_end: len + INITIAL_GAP,
        }
    }

    /// Logical length in characters (the gap does not count).
    pub fn len(&self) -> usize {
        self.data.len() - (self.gap_end - self.gap_start)
    }

    /// Returns true if the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap so that it starts at logical position `pos`.
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to at least `min_size`, keeping its position.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }
        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len());

        let old_len = self.data.len();
        let back_len = old_len - self.gap_end;
        self.data.resize(old_len + growth, '\0');
        if back_len > 0 {
            let new_back_start = self.data.len() - back_len;
            self.data.copy_within(self.gap_end..old_len, new_back_start);
        }
        self.gap_end = self.data.len() - back_len;
    }

    /// Inserts a single character at logical position `pos` (clamped to len).
    pub fn insert(&mut self, pos: usize, ch: char) {
        self.move_gap_to(pos);
        self.ensure_gap(1);
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
    }

    /// Inserts a string at logical position `pos` (clamped to len).
    pub fn insert_str(&mut self, pos: usize, s: &str) {
        self.move_gap_to(pos);
        let count = s.chars().count();
        self.ensure_gap(count);
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
    }

    /// Removes the logical range `[start, end)` and returns the removed text.
    ///
    /// Out-of-range bounds are clamped; an inverted or empty range removes
    /// nothing.
    pub fn remove_range(&mut self, start: usize, end: usize) -> String {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return String::new();
        }
        let removed = self.slice(start, end);
        self.move_gap_to(start);
        self.gap_end += end - start;
        removed
    }

    /// Returns the character at logical position `pos`, if in range.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Iterates over the logical content front-to-back.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Collects the logical content into a `Vec<char>`.
    ///
    /// Grapheme boundary search operates on char slices; buffers in a TTS
    /// input box are small enough that materializing one is not a concern.
    pub fn to_chars(&self) -> Vec<char> {
        self.chars().collect()
    }

    /// Returns the logical range `[start, end)` as a `String` (bounds clamped).
    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len);
        let mut out = String::new();
        for pos in start..end {
            if let Some(ch) = self.char_at(pos) {
                out.push(ch);
            }
        }
        out
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
