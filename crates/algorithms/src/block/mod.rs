//! Block cipher primitives
//!
//! This module defines the block cipher traits, the Twofish implementations,
//! the modes of operation (ECB, CBC) and the padding schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};

pub mod modes;
pub mod padding;
pub mod twofish;

// Re-exports
pub use modes::{Cbc, Ecb};
pub use twofish::{Twofish128, Twofish192, Twofish256};

/// Compile-time constants describing a block cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Block size accessor usable through a trait bound
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Key size accessor usable through a trait bound
    fn key_size() -> usize {
        Self::KEY_SIZE
    }
}

/// A block cipher operating in place on single blocks
pub trait BlockCipher: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: CipherAlgorithm;

    /// Key type accepted by this cipher
    type Key;

    /// Creates a cipher instance with an expanded key schedule
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    ///
    /// The slice must be exactly one block long.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    ///
    /// The slice must be exactly one block long.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generates a random key for this cipher
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
