//! Normalized word cache and the word-list seed derivation path.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use seedphrase_crypto::{derive_seed_bytes, nfkd};
use seedphrase_types::{Seed, SeedError};
use seedphrase_wordlists::{WordSource, WORD_LIST_LEN};
use zeroize::Zeroizing;

use crate::seed::salt_for;

/// Maps each word of a list, as spelled there, to its NFKD form.
///
/// Built on first use and never invalidated. Reads after the first build
/// take no lock.
pub struct NormalizedWordCache {
    source: Arc<dyn WordSource>,
    map: OnceLock<HashMap<String, String>>,
}

impl NormalizedWordCache {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            map: OnceLock::new(),
        }
    }

    /// Look up the NFKD form of `word`, which must match a list entry exactly.
    pub fn normalized(&self, word: &str) -> Option<&str> {
        self.map().get(word).map(String::as_str)
    }

    pub fn is_built(&self) -> bool {
        self.map.get().is_some()
    }

    pub fn source(&self) -> &Arc<dyn WordSource> {
        &self.source
    }

    fn map(&self) -> &HashMap<String, String> {
        self.map.get_or_init(|| {
            let map: HashMap<String, String> = (0..WORD_LIST_LEN)
                .map(|i| {
                    let word = self.source.word_at(i);
                    (word.to_owned(), nfkd(word).as_str().to_owned())
                })
                .collect();
            tracing::debug!(
                language = self.source.name(),
                words = map.len(),
                "built normalized word cache"
            );
            map
        })
    }
}

impl std::fmt::Debug for NormalizedWordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizedWordCache")
            .field("source", &self.source.name())
            .field("built", &self.is_built())
            .finish()
    }
}

/// Derives seeds from phrases already split into words of a known list.
///
/// Words skip per-call normalization by going through the cache; a word
/// not spelled exactly as in the list is rejected. Checksums are not
/// checked on this path.
///
/// Cheap to clone; the cache is shared.
#[derive(Clone, Debug)]
pub struct WordListSeedDeriver {
    cache: Arc<NormalizedWordCache>,
}

impl WordListSeedDeriver {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self::with_cache(Arc::new(NormalizedWordCache::new(source)))
    }

    /// Reuse a cache that other derivers may already share.
    pub fn with_cache(cache: Arc<NormalizedWordCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<NormalizedWordCache> {
        &self.cache
    }

    /// Derive the seed for `words` joined by single ASCII spaces.
    ///
    /// An empty slice is rejected with [`SeedError::EmptyWordList`].
    pub fn derive<S: AsRef<str>>(&self, words: &[S], passphrase: &str) -> Result<Seed, SeedError> {
        if words.is_empty() {
            return Err(SeedError::EmptyWordList);
        }

        // Size the password exactly before writing any of it, so it never
        // reallocates, leaving no unwiped copy behind.
        let mut len = words.len() - 1;
        for word in words {
            len += self
                .cache
                .normalized(word.as_ref())
                .ok_or(SeedError::WordNotExactlyFromWordList)?
                .len();
        }

        let mut password = Zeroizing::new(String::with_capacity(len));
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                password.push(' ');
            }
            password.push_str(
                self.cache
                    .normalized(word.as_ref())
                    .ok_or(SeedError::WordNotExactlyFromWordList)?,
            );
        }
        debug_assert_eq!(password.len(), len);

        let salt = salt_for(&nfkd(passphrase));
        Ok(derive_seed_bytes(password.as_bytes(), &salt))
    }
}
