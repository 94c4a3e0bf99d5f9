//! Entropy buffers and the seam for drawing fresh entropy.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::EntropyError;
use crate::word_count::WordCount;

pub const MIN_ENTROPY_BITS: usize = 128;
pub const MAX_ENTROPY_BITS: usize = 256;

/// 128–256 bits of secret entropy, a multiple of 32 bits long.
///
/// The length is checked on construction, so every `Entropy` can be encoded.
/// This type intentionally does not implement `Serialize`, and its `Debug`
/// output only shows the bit length. Bytes are zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Copy `bytes` into a new entropy buffer after checking its length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EntropyError> {
        check_entropy_bits(bytes.len() * 8)?;
        Ok(Self(bytes.to_vec()))
    }

    /// Parse case-insensitive hex. The decoded scratch buffer is wiped.
    pub fn from_hex(hex_str: &str) -> Result<Self, EntropyError> {
        let bytes = Zeroizing::new(hex::decode(hex_str).map_err(|e| match e {
            hex::FromHexError::OddLength => EntropyError::OddHexLength,
            hex::FromHexError::InvalidHexCharacter { c, .. } => EntropyError::InvalidHexDigit(c),
            _ => EntropyError::OddHexLength,
        })?);
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Number of words this entropy encodes to.
    pub fn word_count(&self) -> WordCount {
        WordCount::from_entropy_bits(self.bit_len())
            .expect("entropy length is checked on construction")
    }

    /// Lowercase hex rendering. The caller owns the secret string.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.0))
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy({} bits)", self.bit_len())
    }
}

/// Check an entropy bit length, reporting the first rule it breaks.
pub fn check_entropy_bits(bits: usize) -> Result<(), EntropyError> {
    if bits < MIN_ENTROPY_BITS {
        return Err(EntropyError::EntropyTooLow { bits });
    }
    if bits > MAX_ENTROPY_BITS {
        return Err(EntropyError::EntropyTooHigh { bits });
    }
    if bits % 32 != 0 {
        return Err(EntropyError::EntropyNotAligned { bits });
    }
    Ok(())
}

/// A source of fresh random bytes for mnemonic generation.
///
/// Production code uses the operating system RNG; tests swap in a
/// deterministic source.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` completely with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;

    /// Human-readable source name, for logs.
    fn name(&self) -> &str;
}
