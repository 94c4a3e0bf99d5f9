//! Sorted word lookup with alphabetical suggestions on a miss.
//!
//! The table is ordered by plain character order of each word's NFKD form
//! (a shorter word sorts first on a shared prefix); no locale collation is
//! involved. A lookup either finds the original index or reports the two
//! real words that bracket where the unknown text would sort.

use seedphrase_crypto::{is_nfkd, nfkd};
use seedphrase_types::ValidationError;
use seedphrase_wordlists::{WordSource, WORD_LIST_LEN};

#[derive(Debug)]
struct Entry {
    /// NFKD form, the sort and search key.
    key: String,
    /// Spelling as it appears in the word list, used for suggestions.
    word: String,
    index: u16,
}

/// Lookup table over one word list.
///
/// Immutable after [`WordIndex::build`], so a single instance can be shared
/// across threads (e.g. behind an `Arc`) without locking.
#[derive(Debug)]
pub struct WordIndex {
    entries: Vec<Entry>,
    separator: char,
    name: String,
}

impl WordIndex {
    /// Materialize and sort all 2048 words of `words`.
    pub fn build(words: &dyn WordSource) -> Self {
        let mut entries: Vec<Entry> = (0..WORD_LIST_LEN)
            .map(|i| {
                let word = words.word_at(i);
                Entry {
                    key: nfkd(word).as_str().to_owned(),
                    word: word.to_owned(),
                    index: i as u16,
                }
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        tracing::debug!(language = words.name(), words = entries.len(), "built word index");

        Self {
            entries,
            separator: words.separator_char(),
            name: words.name().to_owned(),
        }
    }

    /// Resolve `text` to its index in the word list.
    ///
    /// `text` is compared in NFKD form; already-normalized input is used as
    /// is. On a miss the error carries `text` as given plus two suggestions.
    pub fn resolve(&self, text: &str) -> Result<u16, ValidationError> {
        let normalized;
        let key = if is_nfkd(text) {
            text
        } else {
            normalized = nfkd(text);
            normalized.as_str()
        };

        match self.entries.binary_search_by(|e| e.key.as_str().cmp(key)) {
            Ok(pos) => Ok(self.entries[pos].index),
            Err(insertion_point) => {
                let (suggestion1, suggestion2) = self.suggestions_at(insertion_point);
                Err(ValidationError::WordNotFound {
                    word: text.to_owned(),
                    suggestion1: suggestion1.to_owned(),
                    suggestion2: suggestion2.to_owned(),
                })
            }
        }
    }

    /// True if `text` is a word of this list.
    pub fn contains(&self, text: &str) -> bool {
        self.resolve(text).is_ok()
    }

    /// The adjacent pair around `insertion_point`, clamped to the table ends.
    fn suggestions_at(&self, insertion_point: usize) -> (&str, &str) {
        let first = insertion_point
            .saturating_sub(1)
            .min(self.entries.len() - 2);
        (&self.entries[first].word, &self.entries[first + 1].word)
    }

    /// Separator of the word list this index was built from.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Name of the word list this index was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
