//! Mnemonic validation and decoding back to entropy.
//!
//! Checks run in order: word count, then each word (the first unknown word
//! short-circuits), then the checksum. A checksum mismatch is reported as
//! [`ValidationError::InvalidChecksum`], distinct from every format error.

use std::sync::Arc;

use seedphrase_crypto::checksum_byte;
use seedphrase_types::{Entropy, ValidationError, WordCount};
use seedphrase_wordlists::WordSource;
use zeroize::{Zeroize, Zeroizing};

use crate::bits::{write11, BITS_PER_WORD};
use crate::splitter::split_words;
use crate::word_index::WordIndex;

/// Validates phrases against one word list.
///
/// Cheap to clone; the underlying [`WordIndex`] is shared.
#[derive(Clone, Debug)]
pub struct MnemonicValidator {
    index: Arc<WordIndex>,
}

impl MnemonicValidator {
    /// Build the word index for `words` and wrap it.
    pub fn new(words: &dyn WordSource) -> Self {
        Self::with_index(Arc::new(WordIndex::build(words)))
    }

    /// Reuse an index that was already built.
    pub fn with_index(index: Arc<WordIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<WordIndex> {
        &self.index
    }

    /// Validate a whole phrase.
    ///
    /// Words may be separated by the list's separator or by an ASCII space
    /// (the NFKD form of every separator in use). Leading, trailing or
    /// doubled separators fail with [`ValidationError::UnexpectedWhiteSpace`].
    pub fn validate(&self, mnemonic: &str) -> Result<(), ValidationError> {
        self.to_entropy(mnemonic).map(drop)
    }

    /// Validate a phrase that was already split into words.
    pub fn validate_words<S: AsRef<str>>(&self, words: &[S]) -> Result<(), ValidationError> {
        self.words_to_entropy(words).map(drop)
    }

    /// Like [`validate`](Self::validate), but a checksum mismatch is `Ok(false)`.
    ///
    /// Format and lookup errors are still returned as errors.
    pub fn is_valid(&self, mnemonic: &str) -> Result<bool, ValidationError> {
        match self.validate(mnemonic) {
            Ok(()) => Ok(true),
            Err(ValidationError::InvalidChecksum) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Decode a whole phrase back to the entropy it encodes.
    pub fn to_entropy(&self, mnemonic: &str) -> Result<Entropy, ValidationError> {
        if mnemonic.is_empty() {
            return Err(ValidationError::InvalidWordCount { count: 0 });
        }
        let separator = self.index.separator();
        let words = split_words(mnemonic, |c| c == separator || c == ' ');
        if words.iter().any(|w| w.is_empty()) {
            return Err(ValidationError::UnexpectedWhiteSpace);
        }
        self.words_to_entropy(&words)
    }

    /// Decode pre-split words back to the entropy they encode.
    pub fn words_to_entropy<S: AsRef<str>>(&self, words: &[S]) -> Result<Entropy, ValidationError> {
        let count = words.len();
        let word_count =
            WordCount::from_words(count).ok_or(ValidationError::InvalidWordCount { count })?;
        let ent_plus_cs = count * BITS_PER_WORD;
        let cs = word_count.checksum_bits();

        let mut indexes = Zeroizing::new(Vec::with_capacity(count));
        for word in words {
            indexes.push(self.index.resolve(word.as_ref())?);
        }

        let mut with_checksum = Zeroizing::new(vec![0u8; (ent_plus_cs + 7) / 8]);
        for (i, &index) in indexes.iter().enumerate() {
            write11(&mut with_checksum, index, i * BITS_PER_WORD);
        }

        let split = with_checksum.len() - 1;
        let entropy = Entropy::from_bytes(&with_checksum[..split])
            .expect("word count fixes a valid entropy length");
        let last_byte = with_checksum[split];
        with_checksum.zeroize();

        let expected = checksum_byte(entropy.as_bytes());
        if (expected ^ last_byte) & checksum_mask(cs) != 0 {
            tracing::debug!(
                language = self.index.name(),
                words = count,
                "mnemonic checksum mismatch"
            );
            return Err(ValidationError::InvalidChecksum);
        }
        Ok(entropy)
    }
}

/// Mask selecting the top `n` bits of a byte, `n` in 1..=8.
fn checksum_mask(n: usize) -> u8 {
    !((1u8 << (8 - n)).wrapping_sub(1))
}
