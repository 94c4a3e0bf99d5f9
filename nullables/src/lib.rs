//! Nullable infrastructure for deterministic testing.
//!
//! The one external dependency of the codec, the OS random generator, sits
//! behind the `EntropySource` trait. This crate provides a test-friendly
//! implementation that:
//! - Returns deterministic bytes
//! - Can be made to fail on demand
//! - Never touches the operating system
//!
//! Usage: pass a nullable wherever an `EntropySource` is expected.

pub mod entropy;

pub use entropy::NullEntropy;
