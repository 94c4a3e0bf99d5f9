//! Unicode compatibility decomposition (NFKD) of mnemonic text.

use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// NFKD-normalize `text` into a buffer that is wiped on drop.
///
/// A counting pass sizes the buffer exactly, so it never reallocates and
/// no unwiped copy of the secret text is left in freed memory.
pub fn nfkd(text: &str) -> Zeroizing<String> {
    let len: usize = text.nfkd().map(char::len_utf8).sum();
    let mut out = Zeroizing::new(String::with_capacity(len));
    for c in text.nfkd() {
        out.push(c);
    }
    debug_assert_eq!(out.len(), len);
    out
}

/// True when `text` is already in NFKD form.
pub fn is_nfkd(text: &str) -> bool {
    unicode_normalization::is_nfkd(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_unchanged() {
        assert_eq!(nfkd("abandon about").as_str(), "abandon about");
        assert!(is_nfkd("abandon about"));
    }

    #[test]
    fn halfwidth_katakana_maps_to_decomposed_fullwidth() {
        assert_eq!(nfkd("ｶ").as_str(), nfkd("カ").as_str());
        assert_eq!(nfkd("ｶ").as_str(), "カ");
    }

    #[test]
    fn ideographic_space_becomes_ascii_space() {
        assert_eq!(nfkd("あいこくしん\u{3000}あおぞら").as_str(), nfkd("あいこくしん あおぞら").as_str());
    }

    #[test]
    fn expanding_input_sized_exactly() {
        // SQUARE APAATO: 3 bytes in, five decomposed katakana (15 bytes) out.
        let out = nfkd("\u{3300}");
        assert_eq!(out.as_str(), "\u{30A2}\u{30CF}\u{309A}\u{30FC}\u{30C8}");
        assert_eq!(out.capacity(), out.len());

        let out = nfkd(&"\u{3300}".repeat(4));
        assert_eq!(out.len(), 60);
        assert_eq!(out.capacity(), 60);
    }

    #[test]
    fn composed_accents_decompose() {
        let composed = "\u{00e9}"; // é
        assert!(!is_nfkd(composed));
        assert_eq!(nfkd(composed).as_str(), "e\u{0301}");
    }
}
