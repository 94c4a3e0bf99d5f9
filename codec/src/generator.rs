//! Fresh mnemonic generation from an entropy source.

use seedphrase_types::{EntropyError, EntropySource, MnemonicError, WordCount};
use seedphrase_wordlists::WordSource;
use zeroize::Zeroizing;

use crate::encoder::encode;

/// Entropy from the operating system's secure random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::getrandom(buf).map_err(|e| EntropyError::SourceFailed(e.to_string()))
    }

    fn name(&self) -> &str {
        "os"
    }
}

/// Draw entropy for `word_count` words from `source` and encode it.
///
/// The drawn bytes are wiped once the phrase is built.
pub fn generate_mnemonic(
    source: &dyn EntropySource,
    word_count: WordCount,
    words: &dyn WordSource,
) -> Result<Zeroizing<String>, MnemonicError> {
    let mut entropy = Zeroizing::new(vec![0u8; word_count.entropy_bytes()]);
    source.fill(&mut entropy)?;
    tracing::debug!(
        source = source.name(),
        words = word_count.words(),
        "drew entropy for new mnemonic"
    );
    Ok(encode(&entropy, words)?)
}
