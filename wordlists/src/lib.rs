//! Word lists for mnemonic encoding.
//!
//! A [`WordSource`] is a fixed table of exactly 2048 words plus the character
//! that separates words in a rendered phrase. [`Language`] exposes the
//! standard tables; the words themselves come from the `bip39` crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of words in every word list (2^11).
pub const WORD_LIST_LEN: usize = 1 << 11;

/// A fixed, read-only list of 2048 words.
pub trait WordSource: Send + Sync {
    /// The word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2048`.
    fn word_at(&self, index: usize) -> &str;

    /// Character placed between words when rendering a phrase.
    fn separator_char(&self) -> char;

    /// Short name for logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn word_at(&self, index: usize) -> &str {
        (**self).word_at(index)
    }

    fn separator_char(&self) -> char {
        (**self).separator_char()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: WordSource + ?Sized> WordSource for std::sync::Arc<T> {
    fn word_at(&self, index: usize) -> &str {
        (**self).word_at(index)
    }

    fn separator_char(&self) -> char {
        (**self).separator_char()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// The languages with a standard word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    English,
    Japanese,
    Spanish,
    French,
    Italian,
    Czech,
    Korean,
    ChineseSimplified,
    ChineseTraditional,
}

/// Ideographic space, the Japanese word separator.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

impl Language {
    pub const ALL: [Self; 9] = [
        Self::English,
        Self::Japanese,
        Self::Spanish,
        Self::French,
        Self::Italian,
        Self::Czech,
        Self::Korean,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
    ];

    /// Human-readable name, also accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Czech => "czech",
            Self::Korean => "korean",
            Self::ChineseSimplified => "chinese-simplified",
            Self::ChineseTraditional => "chinese-traditional",
        }
    }

    /// The full 2048-word table.
    pub fn words(&self) -> &'static [&'static str; WORD_LIST_LEN] {
        self.table().word_list()
    }

    fn table(&self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::Japanese => bip39::Language::Japanese,
            Self::Spanish => bip39::Language::Spanish,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Czech => bip39::Language::Czech,
            Self::Korean => bip39::Language::Korean,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl WordSource for Language {
    fn word_at(&self, index: usize) -> &str {
        self.words()[index]
    }

    fn separator_char(&self) -> char {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => ' ',
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == lower)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
