//! Mnemonic to seed derivation.
//!
//! The mnemonic and passphrase are NFKD-normalized, the salt is
//! `"mnemonic"` followed by the normalized passphrase, and the seed is
//! PBKDF2-HMAC-SHA512 over the normalized mnemonic. No checksum validation
//! is done here; any text derives a seed.

use seedphrase_crypto::{derive_seed_bytes, nfkd, SALT_PREFIX};
use seedphrase_types::Seed;
use zeroize::Zeroizing;

/// Build the salt for `passphrase`, which must already be NFKD.
pub(crate) fn salt_for(normalized_passphrase: &str) -> Zeroizing<Vec<u8>> {
    let mut salt = Zeroizing::new(Vec::with_capacity(
        SALT_PREFIX.len() + normalized_passphrase.len(),
    ));
    salt.extend_from_slice(SALT_PREFIX);
    salt.extend_from_slice(normalized_passphrase.as_bytes());
    salt
}

/// Derive the 64-byte seed for `mnemonic` and `passphrase`.
///
/// Pass `""` for no passphrase. Normalized copies of both inputs and the
/// salt are wiped before returning.
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let password = nfkd(mnemonic);
    let salt = salt_for(&nfkd(passphrase));
    derive_seed_bytes(password.as_bytes(), &salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLAR: &str =
        "solar puppy hawk oxygen trip brief erase slot fossil mechanic filter voice";

    #[test]
    fn empty_passphrase() {
        assert_eq!(
            derive_seed(SOLAR, "").to_hex().as_str(),
            "2eea1e4d099089606b7678809be6090ccba0fca171d4ed42c550194ca8e3600cd1e5989dcca38e5f903f5c358c92e0dcaffc9e71a48ad489bb868025c907d1e1"
        );
    }

    #[test]
    fn with_passphrase() {
        assert_eq!(
            derive_seed(SOLAR, "CryptoIsCool").to_hex().as_str(),
            "36732d826f4fa483b5fe8373ef8d6aa3cb9c8fb30463d6c0063ee248afca2f87d11ebe6e75c2fb2736435994b868f8e9d4f4474c65ee05ac47aad7ef8a497846"
        );
    }

    #[test]
    fn passphrase_is_normalized() {
        // Halfwidth and fullwidth katakana KA share one NFKD form.
        let half = derive_seed(SOLAR, "\u{FF76}");
        let full = derive_seed(SOLAR, "\u{30AB}");
        assert_eq!(half.as_bytes(), full.as_bytes());
        assert_eq!(
            half.to_hex().as_str(),
            "76115a44ba5d43cf85d655e7c795c97f0a8d109ccac459268387ca4c73fed88d0f1d1e2f3695414c5461fa891242180208ec424be1a39d60f65b1378608f7cb5"
        );
    }

    #[test]
    fn ideographic_space_normalizes_to_ascii_space() {
        let ascii = derive_seed(SOLAR, "");
        let ideographic = derive_seed(&SOLAR.replace(' ', "\u{3000}"), "");
        assert_eq!(ascii.as_bytes(), ideographic.as_bytes());
    }

    #[test]
    fn salt_layout() {
        assert_eq!(salt_for("").as_slice(), b"mnemonic");
        assert_eq!(salt_for("TREZOR").as_slice(), b"mnemonicTREZOR");
    }

    #[test]
    fn no_checksum_validation() {
        // Twelve words with a bad checksum still derive.
        let seed = derive_seed(&["abandon"; 12].join(" "), "");
        assert_eq!(seed.as_bytes().len(), 64);
    }
}
