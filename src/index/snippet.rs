//! Context snippet extraction
//!
//! Turns a match offset into a readable window of surrounding text. Windows
//! that would run past either end of the corpus are clamped, never rejected.

use serde::Serialize;

/// Bytes of context taken on each side of a match start
pub const DEFAULT_WINDOW: usize = 250;

/// A context window around one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Snippet text
    pub text: String,
    /// Corpus offset of the first byte of `text`
    pub start: usize,
    /// Match start within `text` (bytes)
    pub match_start: usize,
    /// Match end within `text` (bytes, exclusive)
    pub match_end: usize,
}

/// Extract the context window around a match as a plain string
pub fn extract(corpus: &[u8], offset: usize, pattern_len: usize, window: usize) -> String {
    extract_snippet(corpus, offset, pattern_len, window).text
}

/// Extract the context window around a match with match positions
///
/// Covers `[offset - window, offset + window)`, widened to include the whole
/// match, clamped to `[0, corpus.len())`, and narrowed so neither edge splits
/// a UTF-8 sequence. Invalid bytes become U+FFFD. The text before the match,
/// the match itself and the text after it are decoded separately, so the
/// match positions hold for the decoded text.
pub fn extract_snippet(
    corpus: &[u8],
    offset: usize,
    pattern_len: usize,
    window: usize,
) -> Snippet {
    let (start, end) = window_bounds(corpus, offset, pattern_len, window);
    let match_from = offset.clamp(start, end);
    let match_to = offset.saturating_add(pattern_len).clamp(start, end);

    let before = String::from_utf8_lossy(&corpus[start..match_from]);
    let matched = String::from_utf8_lossy(&corpus[match_from..match_to]);
    let after = String::from_utf8_lossy(&corpus[match_to..end]);

    let match_start = before.len();
    let match_end = match_start + matched.len();

    Snippet {
        text: [before, matched, after].concat(),
        start,
        match_start,
        match_end,
    }
}

/// Compute clamped `[start, end)` byte bounds for a window
pub fn window_bounds(
    corpus: &[u8],
    offset: usize,
    pattern_len: usize,
    window: usize,
) -> (usize, usize) {
    let len = corpus.len();
    let offset = offset.min(len);

    let mut start = offset.saturating_sub(window);
    let reach = window.max(pattern_len);
    let mut end = offset.saturating_add(reach).min(len);

    // Nudge edges inward off UTF-8 continuation bytes, but never past the match
    while start < offset && is_continuation(corpus[start]) {
        start += 1;
    }
    let match_end = offset.saturating_add(pattern_len).min(len);
    while end > match_end && end < len && is_continuation(corpus[end]) {
        end -= 1;
    }

    (start, end)
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}
