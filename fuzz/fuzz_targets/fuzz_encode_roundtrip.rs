#![no_main]

use libfuzzer_sys::fuzz_target;
use seedphrase_codec::{encode, MnemonicValidator};
use seedphrase_wordlists::Language;

fuzz_target!(|data: &[u8]| {
    // Any accepted entropy must decode back to itself.
    let Ok(phrase) = encode(data, &Language::English) else {
        return;
    };
    let validator = MnemonicValidator::new(&Language::English);
    let decoded = validator
        .to_entropy(&phrase)
        .expect("encoded phrase must validate");
    assert_eq!(decoded.as_bytes(), data);
});
