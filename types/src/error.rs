//! Error taxonomy shared across crates.
//!
//! Entropy, validation and seed errors are kept as separate enums so a caller
//! can tell a malformed phrase apart from a checksum mismatch without string
//! matching. [`MnemonicError`] wraps all three for callers that don't care.

use thiserror::Error;

/// Errors raised while accepting entropy for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    #[error("entropy too low, 128-256 bits allowed (got {bits})")]
    EntropyTooLow { bits: usize },

    #[error("entropy too high, 128-256 bits allowed (got {bits})")]
    EntropyTooHigh { bits: usize },

    #[error("number of entropy bits must be divisible by 32 (got {bits})")]
    EntropyNotAligned { bits: usize },

    #[error("length of hex chars must be divisible by 2")]
    OddHexLength,

    #[error("invalid hex char {0:?}")]
    InvalidHexDigit(char),

    #[error("entropy source failed: {0}")]
    SourceFailed(String),
}

/// Errors raised while validating or decoding a mnemonic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a correct number of words (got {count})")]
    InvalidWordCount { count: usize },

    #[error("word not found in word list {word:?}, suggestions {suggestion1:?}, {suggestion2:?}")]
    WordNotFound {
        word: String,
        suggestion1: String,
        suggestion2: String,
    },

    #[error("unexpected whitespace")]
    UnexpectedWhiteSpace,

    #[error("invalid checksum")]
    InvalidChecksum,
}

/// Errors raised by seed derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("word not exactly as in the supplied word list")]
    WordNotExactlyFromWordList,
    #[error("no words supplied")]
    EmptyWordList,
}

/// Umbrella error for callers driving the whole codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl ValidationError {
    /// True for a well-formed phrase whose checksum bits don't match.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Self::InvalidChecksum)
    }
}
