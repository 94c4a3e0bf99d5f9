//! Cryptographic primitives for the seedphrase codec.
//!
//! - **SHA-256** for the entropy checksum byte
//! - **PBKDF2-HMAC-SHA512** (2048 rounds, 512-bit output) for seed derivation
//! - **NFKD** Unicode normalization for mnemonic and passphrase text
//!
//! These are thin wrappers with fixed parameters; the codec treats them as
//! black boxes.

pub mod hash;
pub mod kdf;
pub mod normalize;

pub use hash::{checksum_byte, sha256};
pub use kdf::{derive_seed_bytes, PBKDF2_ROUNDS, SALT_PREFIX};
pub use normalize::{is_nfkd, nfkd};
