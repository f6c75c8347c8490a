//! Symmetric cipher traits and configuration for tfcrypt-symmetric
//!
//! This module defines the core trait implemented by the symmetric
//! encryption algorithms in the library, together with the closed set of
//! supported chaining modes.

use crate::error::Result;

/// Common trait for all symmetric encryption algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Supported block chaining modes
///
/// The set is closed; requesting anything outside it is impossible by
/// construction rather than rejected at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook, each block independent, no IV
    Ecb,
    /// Cipher block chaining, requires a block-sized IV
    Cbc,
}
