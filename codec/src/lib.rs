//! Mnemonic codec.
//!
//! Encodes entropy into word phrases with an embedded checksum, decodes and
//! validates phrases (suggesting the two nearest words when one is unknown),
//! and derives the 64-byte seed from a phrase and passphrase.
//!
//! Every operation takes its word list as a [`WordSource`]; the stock lists
//! are the [`Language`] variants.
//!
//! [`WordSource`]: seedphrase_wordlists::WordSource
//! [`Language`]: seedphrase_wordlists::Language

pub mod bits;
pub mod encoder;
pub mod generator;
pub mod seed;
pub mod splitter;
pub mod validator;
pub mod word_cache;
pub mod word_index;

pub use encoder::{encode, encode_entropy, encode_hex, encode_into, word_indexes};
pub use generator::{generate_mnemonic, OsEntropy};
pub use seed::derive_seed;
pub use splitter::split_words;
pub use validator::MnemonicValidator;
pub use word_cache::{NormalizedWordCache, WordListSeedDeriver};
pub use word_index::WordIndex;
