#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use seedphrase_codec::MnemonicValidator;
use seedphrase_types::ValidationError;
use seedphrase_wordlists::Language;

static ENGLISH: OnceLock<MnemonicValidator> = OnceLock::new();
static JAPANESE: OnceLock<MnemonicValidator> = OnceLock::new();

fuzz_target!(|text: &str| {
    // Arbitrary text must produce a verdict, never a panic.
    for validator in [
        ENGLISH.get_or_init(|| MnemonicValidator::new(&Language::English)),
        JAPANESE.get_or_init(|| MnemonicValidator::new(&Language::Japanese)),
    ] {
        match validator.to_entropy(text) {
            Ok(entropy) => {
                let words = text.split([' ', '\u{3000}']).count();
                assert_eq!(entropy.word_count().words(), words);
            }
            Err(ValidationError::WordNotFound {
                suggestion1,
                suggestion2,
                ..
            }) => {
                assert!(validator.index().contains(&suggestion1));
                assert!(validator.index().contains(&suggestion2));
            }
            Err(_) => {}
        }
    }
});
