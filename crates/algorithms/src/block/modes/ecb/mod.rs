//! Electronic Codebook (ECB) mode implementation
//!
//! ECB encrypts every block independently; identical plaintext blocks give
//! identical ciphertext blocks. It carries no chaining state, so an
//! initialization vector never takes part in the computation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, CipherAlgorithm};
use crate::error::{Error, Result};

/// ECB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + CipherAlgorithm + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Creates a new ECB mode instance with the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts a message using ECB mode
    ///
    /// The plaintext must be a multiple of the block size. For plaintext
    /// that is not a multiple of the block size, padding must be applied
    /// before calling this function.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if plaintext.len() % block_size != 0 {
            let expected_len = ((plaintext.len() / block_size) + 1) * block_size;
            return Err(Error::Length {
                context: "ECB plaintext",
                expected: expected_len,
                actual: plaintext.len(),
            });
        }

        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for chunk in plaintext.chunks(block_size) {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using ECB mode
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if ciphertext.len() % block_size != 0 {
            let expected_len = ((ciphertext.len() / block_size) + 1) * block_size;
            return Err(Error::Length {
                context: "ECB ciphertext",
                expected: expected_len,
                actual: ciphertext.len(),
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(block_size) {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);

            self.cipher.decrypt_block(&mut block)?;

            plaintext.extend_from_slice(&block);
        }

        Ok(plaintext)
    }
}
