//! UTF-8 boundary helpers for caret offsets.
//!
//! Offsets into text nodes are byte indices; every helper here returns one
//! that sits on a character boundary.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use edit_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 4), 4); // 'b'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous valid caret offset (character boundary) before `i`.
///
/// Returns 0 if already at the start.
///
/// # Examples
///
/// ```
/// use edit_core::prev_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(prev_cursor_boundary(s, 4), 1); // 'b' -> '€'
/// assert_eq!(prev_cursor_boundary(s, 0), 0); // already at start
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Find the next valid caret offset (character boundary) after `i`.
///
/// Returns `s.len()` if already at or beyond the end.
///
/// # Examples
///
/// ```
/// use edit_core::next_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(next_cursor_boundary(s, 1), 4); // '€' -> 'b'
/// assert_eq!(next_cursor_boundary(s, 5), 5); // already at end
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i >= s.len() {
        return s.len();
    }

    let mut it = s[i..].char_indices();
    let _ = it.next(); // current char at 0
    it.next().map(|(idx, _)| i + idx).unwrap_or(s.len())
}
