//! Word-boundary and character search within a single line.
//!
//! All offsets are character (code point) indices, never byte offsets. A word
//! character is a letter, a digit or an underscore.

/// Returns true for characters that make up a word.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Returns the offset of the next word start after `pos`.
///
/// Skips the run of word characters at `pos`, then the run of non-word
/// characters after it. Returns the line length when no further word exists.
///
/// # Example
///
/// ```
/// use viquill::editor::word::next_word_boundary;
///
/// assert_eq!(next_word_boundary("hello world", 0), 6);
/// assert_eq!(next_word_boundary("hello world", 6), 11);
/// ```
pub fn next_word_boundary(line: &str, pos: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut pos = pos.min(len);

    while pos < len && is_word_char(chars[pos]) {
        pos += 1;
    }
    while pos < len && !is_word_char(chars[pos]) {
        pos += 1;
    }

    pos
}

/// Returns the offset of the start of the word before `pos`.
///
/// Skips the run of non-word characters immediately before `pos`, then the run
/// of word characters before that, and returns where that run starts. Returns 0
/// when no earlier word exists.
///
/// # Example
///
/// ```
/// use viquill::editor::word::prev_word_boundary;
///
/// assert_eq!(prev_word_boundary("hello world", 11), 6);
/// assert_eq!(prev_word_boundary("hello world", 6), 0);
/// ```
pub fn prev_word_boundary(line: &str, pos: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut pos = pos.min(chars.len());

    while pos > 0 && !is_word_char(chars[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && is_word_char(chars[pos - 1]) {
        pos -= 1;
    }

    pos
}

/// Finds the nearest `target` strictly after the character at `pos`.
///
/// The character under the cursor never matches, so repeating the search from
/// a match moves on to the following one.
pub fn next_occurrence(line: &str, pos: usize, target: char) -> Option<usize> {
    line.chars()
        .enumerate()
        .skip(pos.saturating_add(1))
        .find(|&(_, ch)| ch == target)
        .map(|(i, _)| i)
}

/// Finds the nearest `target` strictly before the character at `pos`.
pub fn prev_occurrence(line: &str, pos: usize, target: char) -> Option<usize> {
    line.chars()
        .take(pos)
        .enumerate()
        .filter(|&(_, ch)| ch == target)
        .last()
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('.'));
    }

    #[test]
    fn test_next_word_boundary() {
        assert_eq!(next_word_boundary("hello world", 0), 6);
        assert_eq!(next_word_boundary("hello world", 3), 6);
        assert_eq!(next_word_boundary("foo.bar", 0), 4);
        assert_eq!(next_word_boundary("  foo", 0), 2);
    }

    #[test]
    fn test_next_word_boundary_at_end() {
        assert_eq!(next_word_boundary("hello", 5), 5);
        assert_eq!(next_word_boundary("hello", 2), 5);
        assert_eq!(next_word_boundary("", 0), 0);
    }

    #[test]
    fn test_next_word_boundary_clamps_past_end() {
        assert_eq!(next_word_boundary("abc", 10), 3);
    }

    #[test]
    fn test_prev_word_boundary() {
        assert_eq!(prev_word_boundary("hello world", 11), 6);
        assert_eq!(prev_word_boundary("hello world", 8), 6);
        assert_eq!(prev_word_boundary("hello world", 6), 0);
        assert_eq!(prev_word_boundary("foo.bar", 4), 0);
    }

    #[test]
    fn test_prev_word_boundary_at_start() {
        assert_eq!(prev_word_boundary("hello", 0), 0);
        assert_eq!(prev_word_boundary("   ", 3), 0);
    }

    #[test]
    fn test_boundaries_are_char_based() {
        // "héllo wörld": byte offsets differ from char offsets
        let line = "héllo wörld";
        assert_eq!(next_word_boundary(line, 0), 6);
        assert_eq!(prev_word_boundary(line, 11), 6);
    }

    #[test]
    fn test_next_occurrence() {
        assert_eq!(next_occurrence("a,b,c", 0, ','), Some(1));
        assert_eq!(next_occurrence("a,b,c", 1, ','), Some(3));
        assert_eq!(next_occurrence("a,b,c", 3, ','), None);
        assert_eq!(next_occurrence("abc", 0, 'z'), None);
    }

    #[test]
    fn test_adjacent_occurrences_are_found() {
        assert_eq!(next_occurrence("a,,b", 1, ','), Some(2));
        assert_eq!(prev_occurrence("a,,b", 2, ','), Some(1));
        assert_eq!(prev_occurrence("a,b,c", 4, ','), Some(3));
    }

    #[test]
    fn test_prev_occurrence() {
        assert_eq!(prev_occurrence("a,b,c", 5, ','), Some(3));
        assert_eq!(prev_occurrence("a,b,c", 3, ','), Some(1));
        assert_eq!(prev_occurrence("a,b,c", 1, ','), None);
        assert_eq!(prev_occurrence("abc", 3, 'z'), None);
        assert_eq!(prev_occurrence("a,b", 99, ','), Some(1));
    }
}
