//! The 64-byte seed produced by key derivation.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of a derived seed in bytes (512 bits).
pub const SEED_LEN: usize = 64;

/// A 64-byte seed for hierarchical wallet key generation.
///
/// This type intentionally does not implement `Serialize` or `Clone`, and its
/// `Debug` output is redacted. Seed bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, the conventional display form.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_full_length() {
        let seed = Seed::new([0xAB; SEED_LEN]);
        let hex = seed.to_hex();
        assert_eq!(hex.len(), SEED_LEN * 2);
        assert!(hex.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn debug_is_redacted() {
        let seed = Seed::new([7; SEED_LEN]);
        assert_eq!(format!("{seed:?}"), "Seed(..)");
    }

    #[test]
    fn zeroize_wipes_bytes() {
        let mut seed = Seed::new([0xFF; SEED_LEN]);
        seed.zeroize();
        assert_eq!(seed.as_bytes(), &[0u8; SEED_LEN]);
    }
}
