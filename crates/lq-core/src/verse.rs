//! Verse display formatting.
//!
//! Splitting a verse into display lines is a pure, stateless transform:
//! split on a fixed set of punctuation and whitespace delimiters, drop
//! empty fragments, preserve order. The same input always yields the same
//! ordered sequence.

/// Punctuation that ends a verse line, CJK and ASCII.
const DELIMITERS: [char; 12] = [
    '。', '，', '、', '；', '！', '？', '.', ',', ';', '!', '?', '…',
];

/// Split a verse into ordered, non-empty display lines.
pub fn lines(verse: &str) -> Vec<&str> {
    verse
        .split(|c: char| DELIMITERS.contains(&c) || c.is_whitespace())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
