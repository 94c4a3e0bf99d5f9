use proptest::prelude::*;

use seedphrase_codec::{encode, word_indexes, MnemonicValidator, WordIndex};
use seedphrase_types::{ValidationError, WordCount};
use seedphrase_wordlists::{Language, WordSource};

fn any_word_count() -> impl Strategy<Value = WordCount> {
    prop::sample::select(WordCount::ALL.to_vec())
}

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn entropy_for(wc: WordCount) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), wc.entropy_bytes())
}

proptest! {
    /// Every encoded phrase validates and decodes to the entropy it came from.
    #[test]
    fn encode_decode_roundtrip(
        lang in any_language(),
        entropy in any_word_count().prop_flat_map(entropy_for),
    ) {
        let phrase = encode(&entropy, &lang).unwrap();
        let validator = MnemonicValidator::new(&lang);
        let decoded = validator.to_entropy(&phrase).unwrap();
        prop_assert_eq!(decoded.as_bytes(), entropy.as_slice());
    }

    /// Encoding is a pure function of entropy and word list.
    #[test]
    fn encoding_is_deterministic(entropy in prop::collection::vec(any::<u8>(), 32)) {
        let a = encode(&entropy, &Language::Czech).unwrap();
        let b = encode(&entropy, &Language::Czech).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Word count and index range follow from the entropy length alone.
    #[test]
    fn index_shape(entropy in any_word_count().prop_flat_map(entropy_for)) {
        let wc = WordCount::from_entropy_bits(entropy.len() * 8).unwrap();
        let indexes = word_indexes(&entropy).unwrap();
        prop_assert_eq!(indexes.len(), wc.words());
        prop_assert!(indexes.iter().all(|&i| i < 2048));
    }

    /// An unknown ASCII word is bracketed by its two suggestions, or clamped
    /// to the first or last pair when it sorts outside the list.
    #[test]
    fn suggestions_bracket_unknown_words(text in "[a-z]{1,10}") {
        let index = WordIndex::build(&Language::English);
        let words = Language::English.words();
        match index.resolve(&text) {
            Ok(i) => prop_assert_eq!(words[usize::from(i)], text.as_str()),
            Err(ValidationError::WordNotFound { word, suggestion1, suggestion2 }) => {
                prop_assert_eq!(&word, &text);
                prop_assert!(suggestion1 < suggestion2);
                if text.as_str() < words[0] {
                    prop_assert_eq!(suggestion1.as_str(), words[0]);
                } else if text.as_str() > words[2047] {
                    prop_assert_eq!(suggestion2.as_str(), words[2047]);
                } else {
                    prop_assert!(suggestion1 < text && text < suggestion2);
                }
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// Swapping two distinct words never yields a format error: the phrase
    /// either fails the checksum or decodes to different entropy.
    #[test]
    fn swapped_words_never_decode_to_original(
        entropy in prop::collection::vec(any::<u8>(), 16),
        a in 0usize..12,
        b in 0usize..12,
    ) {
        let phrase = encode(&entropy, &Language::English).unwrap();
        let mut words: Vec<&str> = phrase.split(' ').collect();
        prop_assume!(words[a] != words[b]);
        words.swap(a, b);
        let validator = MnemonicValidator::new(&Language::English);
        match validator.words_to_entropy(&words) {
            Ok(decoded) => prop_assert_ne!(decoded.as_bytes(), entropy.as_slice()),
            Err(e) => prop_assert_eq!(e, ValidationError::InvalidChecksum),
        }
    }

    /// Any word count outside the five valid lengths is rejected up front.
    #[test]
    fn invalid_word_counts(count in 0usize..40) {
        prop_assume!(WordCount::from_words(count).is_none());
        let words = vec!["abandon"; count];
        let validator = MnemonicValidator::new(&Language::English);
        prop_assert_eq!(
            validator.validate_words(&words),
            Err(ValidationError::InvalidWordCount { count })
        );
    }

    /// Phrases validate whether joined by the list separator or ASCII space.
    #[test]
    fn separators_interchangeable(entropy in prop::collection::vec(any::<u8>(), 24)) {
        let lang = Language::Japanese;
        let phrase = encode(&entropy, &lang).unwrap();
        let spaced = phrase.replace(lang.separator_char(), " ");
        let validator = MnemonicValidator::new(&lang);
        prop_assert_eq!(validator.validate(&phrase), Ok(()));
        prop_assert_eq!(validator.validate(&spaced), Ok(()));
    }
}
