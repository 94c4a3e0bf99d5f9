//! Fundamental types for the seedphrase workspace.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! entropy buffers, derived seeds, mnemonic word counts, the entropy source seam,
//! and the error taxonomy surfaced by the codec.

pub mod entropy;
pub mod error;
pub mod seed;
pub mod word_count;

pub use entropy::{Entropy, EntropySource};
pub use error::{EntropyError, MnemonicError, SeedError, ValidationError};
pub use seed::{Seed, SEED_LEN};
pub use word_count::WordCount;
