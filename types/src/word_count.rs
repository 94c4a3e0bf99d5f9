//! Mnemonic lengths and the entropy/checksum sizes they imply.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five mnemonic lengths a valid phrase can have.
///
/// Every length satisfies `11 * words == ent + ent / 32`, where `ent` is the
/// entropy bit length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour,
}

impl WordCount {
    pub const ALL: [Self; 5] = [
        Self::Twelve,
        Self::Fifteen,
        Self::Eighteen,
        Self::TwentyOne,
        Self::TwentyFour,
    ];

    /// Map a raw word count to a supported length.
    pub fn from_words(words: usize) -> Option<Self> {
        match words {
            12 => Some(Self::Twelve),
            15 => Some(Self::Fifteen),
            18 => Some(Self::Eighteen),
            21 => Some(Self::TwentyOne),
            24 => Some(Self::TwentyFour),
            _ => None,
        }
    }

    /// Map an entropy bit length to the mnemonic length it encodes to.
    pub fn from_entropy_bits(bits: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.entropy_bits() == bits)
    }

    pub fn words(&self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::TwentyOne => 21,
            Self::TwentyFour => 24,
        }
    }

    /// `ENT`: entropy bits carried by the phrase.
    pub fn entropy_bits(&self) -> usize {
        self.words() * 11 * 32 / 33
    }

    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bits() / 8
    }

    /// `CS`: checksum bits appended after the entropy.
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self::TwentyFour
    }
}

impl TryFrom<usize> for WordCount {
    type Error = String;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        Self::from_words(words)
            .ok_or_else(|| format!("unsupported word count {words}, expected 12, 15, 18, 21 or 24"))
    }
}

impl From<WordCount> for usize {
    fn from(wc: WordCount) -> Self {
        wc.words()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}
