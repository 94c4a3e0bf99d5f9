//! Entropy to mnemonic encoding.
//!
//! `ENT` bits of entropy get `ENT / 32` checksum bits appended (the leading
//! bits of SHA-256(entropy)); the result is cut into 11-bit word indexes.

use seedphrase_crypto::checksum_byte;
use seedphrase_types::entropy::check_entropy_bits;
use seedphrase_types::{Entropy, EntropyError};
use seedphrase_wordlists::WordSource;
use zeroize::Zeroizing;

use crate::bits::{read11, BITS_PER_WORD};

/// Compute the word indexes for `entropy`.
///
/// The checksummed scratch buffer is wiped before returning, and the
/// returned indexes are wiped when dropped.
pub fn word_indexes(entropy: &[u8]) -> Result<Zeroizing<Vec<u16>>, EntropyError> {
    let ent = entropy.len() * 8;
    check_entropy_bits(ent)?;

    let cs = ent / 32;
    let ms = (ent + cs) / BITS_PER_WORD;

    let mut with_checksum = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    with_checksum.extend_from_slice(entropy);
    with_checksum.push(checksum_byte(entropy));

    let mut indexes = Zeroizing::new(Vec::with_capacity(ms));
    for wi in 0..ms {
        indexes.push(read11(&with_checksum, wi * BITS_PER_WORD));
    }
    Ok(indexes)
}

/// Append the mnemonic for `entropy` to `target`.
///
/// Words are joined by the source's separator with none at either end.
pub fn encode_into(
    entropy: &[u8],
    words: &dyn WordSource,
    target: &mut String,
) -> Result<(), EntropyError> {
    let indexes = word_indexes(entropy)?;
    let separator = words.separator_char();

    // Reserve once so the phrase is never copied into a bigger allocation.
    let len: usize = indexes
        .iter()
        .map(|&i| words.word_at(usize::from(i)).len())
        .sum::<usize>()
        + separator.len_utf8() * (indexes.len() - 1);
    target.reserve(len);

    for (i, &index) in indexes.iter().enumerate() {
        if i > 0 {
            target.push(separator);
        }
        target.push_str(words.word_at(usize::from(index)));
    }

    tracing::debug!(
        language = words.name(),
        entropy_bits = entropy.len() * 8,
        words = indexes.len(),
        "encoded mnemonic"
    );
    Ok(())
}

/// Encode raw entropy bytes into a mnemonic phrase.
pub fn encode(entropy: &[u8], words: &dyn WordSource) -> Result<Zeroizing<String>, EntropyError> {
    let mut phrase = Zeroizing::new(String::new());
    encode_into(entropy, words, &mut phrase)?;
    Ok(phrase)
}

/// Encode entropy given as an even-length, case-insensitive hex string.
///
/// The decoded bytes are wiped once the phrase is built.
pub fn encode_hex(
    entropy_hex: &str,
    words: &dyn WordSource,
) -> Result<Zeroizing<String>, EntropyError> {
    let entropy = Entropy::from_hex(entropy_hex)?;
    Ok(encode_entropy(&entropy, words))
}

/// Encode already-checked entropy; this cannot fail.
pub fn encode_entropy(entropy: &Entropy, words: &dyn WordSource) -> Zeroizing<String> {
    encode(entropy.as_bytes(), words).expect("entropy length is checked on construction")
}
