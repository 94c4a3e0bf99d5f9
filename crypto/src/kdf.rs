//! PBKDF2-HMAC-SHA512 seed derivation with the fixed mnemonic parameters.

use hmac::Hmac;
use seedphrase_types::{Seed, SEED_LEN};
use sha2::Sha512;
use zeroize::Zeroize;

/// Iteration count for mnemonic-to-seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Fixed prefix of every salt; the normalized passphrase follows it.
pub const SALT_PREFIX: &[u8] = b"mnemonic";

/// Run PBKDF2-HMAC-SHA512 (2048 rounds, 512-bit output) over prepared inputs.
///
/// `password` is the normalized mnemonic and `salt` is [`SALT_PREFIX`]
/// followed by the normalized passphrase. Both buffers stay owned by the
/// caller, who is responsible for wiping them.
pub fn derive_seed_bytes(password: &[u8], salt: &[u8]) -> Seed {
    let mut out = [0u8; SEED_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, PBKDF2_ROUNDS, &mut out)
        .expect("HMAC accepts keys of any length");
    let seed = Seed::new(out);
    out.zeroize();
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_seed_empty_passphrase() {
        let mnemonic = b"solar puppy hawk oxygen trip brief erase slot fossil mechanic filter voice";
        let seed = derive_seed_bytes(mnemonic, SALT_PREFIX);
        assert_eq!(
            seed.to_hex().as_str(),
            "2eea1e4d099089606b7678809be6090ccba0fca171d4ed42c550194ca8e3600cd1e5989dcca38e5f903f5c358c92e0dcaffc9e71a48ad489bb868025c907d1e1"
        );
    }

    #[test]
    fn salt_changes_output() {
        let a = derive_seed_bytes(b"password", b"mnemonic");
        let b = derive_seed_bytes(b"password", b"mnemonicX");
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn deterministic() {
        let a = derive_seed_bytes(b"password", b"mnemonic");
        let b = derive_seed_bytes(b"password", b"mnemonic");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
