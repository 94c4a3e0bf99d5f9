//! Nullable entropy: deterministic bytes in place of the OS generator.

use std::sync::Mutex;

use seedphrase_types::{EntropyError, EntropySource};

/// A deterministic entropy source for testing.
///
/// Returns pre-configured outputs in order, wrapping around at the end.
/// Each output is repeated as needed to fill the caller's buffer.
pub struct NullEntropy {
    outputs: Mutex<Vec<Vec<u8>>>,
    index: Mutex<usize>,
    failure: Option<String>,
}

impl NullEntropy {
    /// Create with a sequence of deterministic outputs.
    ///
    /// An empty sequence, like an empty output, fills with zeros.
    pub fn new(outputs: Vec<Vec<u8>>) -> Self {
        Self {
            outputs: Mutex::new(outputs),
            index: Mutex::new(0),
            failure: None,
        }
    }

    /// Create with a single byte pattern returned for every call.
    pub fn constant(value: &[u8]) -> Self {
        Self::new(vec![value.to_vec()])
    }

    /// Create a source whose every call fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outputs: Mutex::new(Vec::new()),
            index: Mutex::new(0),
            failure: Some(reason.into()),
        }
    }

    /// Number of `fill` calls served so far.
    pub fn calls(&self) -> usize {
        *self.index.lock().unwrap()
    }
}

impl EntropySource for NullEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        if let Some(reason) = &self.failure {
            return Err(EntropyError::SourceFailed(reason.clone()));
        }
        let outputs = self.outputs.lock().unwrap();
        let mut idx = self.index.lock().unwrap();
        let current = outputs
            .get(*idx % outputs.len().max(1))
            .map(Vec::as_slice)
            .unwrap_or_default();
        *idx += 1;
        if current.is_empty() {
            buf.fill(0);
        } else {
            for (dst, src) in buf.iter_mut().zip(current.iter().cycle()) {
                *dst = *src;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "null-entropy"
    }
}
