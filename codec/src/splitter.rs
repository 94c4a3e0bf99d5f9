//! Splitting mnemonic text into words.

/// Split `text` at every character matching `is_separator`.
///
/// Empty pieces are kept, so leading, trailing or doubled separators show
/// up as empty words for the caller to reject.
pub fn split_words(text: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    text.split(is_separator).collect()
}
