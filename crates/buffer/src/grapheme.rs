//! Grapheme cluster boundary detection for cursor movement and deletion.
//!
//! The buffer stores Rust `char`s (Unicode scalar values), but the cursor must
//! only ever rest on a grapheme cluster boundary — what the user perceives as
//! a single character may span several scalars:
//!
//! - combining sequences: é as `e` + combining acute (2 chars)
//! - ZWJ emoji sequences (up to 7+ chars)
//! - regional indicator pairs (flags, 2 chars)
//!
//! All helpers take a `&[char]` view of the buffer and work in char offsets.

use unicode_segmentation::UnicodeSegmentation;

/// Char offsets of every grapheme cluster start, plus the end offset.
///
/// Always contains at least one element (the end offset, 0 for empty input).
fn cluster_starts(chars: &[char]) -> Vec<usize> {
    let s: String = chars.iter().collect();
    let mut starts = Vec::new();
    let mut offset = 0;
    for grapheme in s.graphemes(true) {
        starts.push(offset);
        offset += grapheme.chars().count();
    }
    starts.push(offset);
    starts
}

/// Returns the boundary immediately to the left of `offset`.
///
/// If `offset` falls inside a cluster, this is the start of that cluster;
/// if it sits on a boundary, the start of the previous cluster. Returns 0
/// at the beginning of the buffer.
pub fn boundary_left(chars: &[char], offset: usize) -> usize {
    if offset == 0 || chars.is_empty() {
        return 0;
    }
    let offset = offset.min(chars.len());

    // ASCII chars are always single-char graphemes, so the boundary
    // before an ASCII char is simply one position back.
    if chars[offset - 1].is_ascii() {
        return offset - 1;
    }

    let mut result = 0;
    for start in cluster_starts(chars) {
        if start < offset {
            result = start;
        } else {
            break;
        }
    }
    result
}

/// Returns the boundary immediately to the right of `offset`.
///
/// If `offset` falls inside a cluster, this is the end of that cluster;
/// if it sits on a boundary, the end of the cluster starting there.
/// Returns `chars.len()` at the end of the buffer.
pub fn boundary_right(chars: &[char], offset: usize) -> usize {
    if offset >= chars.len() {
        return chars.len();
    }

    // An ASCII char at the offset followed by another ASCII char (or the
    // buffer end) is a single-char grapheme.
    if chars[offset].is_ascii()
        && chars.get(offset + 1).map_or(true, |ch| ch.is_ascii())
    {
        return offset + 1;
    }

    for start in cluster_starts(chars) {
        if start > offset {
            return start;
        }
    }
    chars.len()
}

/// Snaps `offset` to the nearest boundary at or before it.
///
/// Used when the cursor is placed arbitrarily (clicks, select-all,
/// column-preserving vertical movement) to maintain the invariant that the
/// cursor never lands inside a cluster.
pub fn snap_to_boundary(chars: &[char], offset: usize) -> usize {
    let offset = offset.min(chars.len());
    if offset == 0 || offset == chars.len() {
        return offset;
    }
    if chars[offset - 1].is_ascii() {
        return offset;
    }

    let mut result = 0;
    for start in cluster_starts(chars) {
        if start <= offset {
            result = start;
        } else {
            break;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // ==================== ASCII ====================

    #[test]
    fn test_ascii_left() {
        let chars = chars_of("abc");
        assert_eq!(boundary_left(&chars, 3), 2);
        assert_eq!(boundary_left(&chars, 1), 0);
        assert_eq!(boundary_left(&chars, 0), 0);
    }

    #[test]
    fn test_ascii_right() {
        let chars = chars_of("abc");
        assert_eq!(boundary_right(&chars, 0), 1);
        assert_eq!(boundary_right(&chars, 2), 3);
        assert_eq!(boundary_right(&chars, 3), 3);
    }

    // ==================== Combining sequences ====================

    #[test]
    fn test_combining_acute_left() {
        // "e" + U+0301 is one cluster of two chars
        let chars = chars_of("ae\u{301}b");
        assert_eq!(boundary_left(&chars, 3), 1); // from 'b' back over the cluster
        assert_eq!(boundary_left(&chars, 2), 1); // from inside the cluster
    }

    #[test]
    fn test_combining_acute_right() {
        let chars = chars_of("ae\u{301}b");
        assert_eq!(boundary_right(&chars, 1), 3); // over the whole cluster
        assert_eq!(boundary_right(&chars, 2), 3); // from inside the cluster
    }

    // ==================== ZWJ emoji ====================

    #[test]
    fn test_zwj_family_is_one_cluster() {
        // family emoji: 4 people + 3 ZWJ = 7 chars
        let chars = chars_of("👨\u{200d}👩\u{200d}👧\u{200d}👦");
        assert_eq!(chars.len(), 7);
        assert_eq!(boundary_right(&chars, 0), 7);
        assert_eq!(boundary_left(&chars, 7), 0);
    }

    // ==================== snap_to_boundary ====================

    #[test]
    fn test_snap_on_boundary_is_identity() {
        let chars = chars_of("ae\u{301}b");
        assert_eq!(snap_to_boundary(&chars, 0), 0);
        assert_eq!(snap_to_boundary(&chars, 1), 1);
        assert_eq!(snap_to_boundary(&chars, 3), 3);
        assert_eq!(snap_to_boundary(&chars, 4), 4);
    }

    #[test]
    fn test_snap_inside_cluster_moves_left() {
        let chars = chars_of("ae\u{301}b");
        assert_eq!(snap_to_boundary(&chars, 2), 1);
    }

    #[test]
    fn test_snap_clamps_past_end() {
        let chars = chars_of("ab");
        assert_eq!(snap_to_boundary(&chars, 99), 2);
    }

    #[test]
    fn test_empty_input() {
        let chars: Vec<char> = Vec::new();
        assert_eq!(boundary_left(&chars, 5), 0);
        assert_eq!(boundary_right(&chars, 5), 0);
        assert_eq!(snap_to_boundary(&chars, 5), 0);
    }
}
