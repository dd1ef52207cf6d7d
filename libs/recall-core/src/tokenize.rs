//! Text normalization for answer comparison.
//!
//! Two tokenizations live here on purpose. [`tokenize`] is the strict one
//! used by the scorers: lower-cased, punctuation stripped. [`split_words`]
//! is the coarse whitespace split used by the difference explainer, which
//! keeps punctuation attached so the reported words look like what the
//! user actually typed.

/// Punctuation stripped by [`tokenize`]. Fixed character class, no locale
/// rules.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')', '?', '\'', '"', '<', '>', '[', ']', '+', '@', '|', '\\',
];

/// Normalize text into comparable word tokens.
///
/// Lower-cases, strips punctuation, splits on whitespace runs and drops
/// tokens that end up empty. Empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.replace(PUNCTUATION, ""))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Coarse lower-cased whitespace split, punctuation kept.
pub fn split_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
