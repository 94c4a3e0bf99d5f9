//! SHA-256 hashing for the entropy checksum.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Compute the SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// First byte of SHA-256(entropy).
///
/// The leading `ENT / 32` bits of this byte are the mnemonic checksum.
/// The digest is wiped before returning.
pub fn checksum_byte(entropy: &[u8]) -> u8 {
    let mut digest = sha256(entropy);
    let first = digest[0];
    digest.zeroize();
    first
}
