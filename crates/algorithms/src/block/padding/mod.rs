//! Block padding schemes
//!
//! Padding is applied exactly once, to the final partial (or empty) chunk of
//! a message, and removed exactly once, from the final decrypted block. PKCS7
//! validation runs in constant time over the whole block so that the padding
//! length never leaks through early exits.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

use crate::error::{Error, Result};

/// Block size all padding operations are defined over
const BLOCK_SIZE: usize = 16;

/// Padding scheme applied to the final block of a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// No padding; the message length must already be block-aligned
    None,
    /// PKCS#7: append N bytes each of value N, always adding 1..=16 bytes
    Pkcs7,
    /// Zero padding: fill to the block boundary with zero bytes
    Zeros,
}

/// Pads the trailing partial chunk of a message.
///
/// `tail` holds the bytes left over after all complete blocks have been
/// processed, so its length is always below the block size. Returns the
/// padded final block, or an empty vector when the scheme adds nothing.
pub fn pad_tail(tail: &[u8], padding: Padding) -> Result<Vec<u8>> {
    debug_assert!(tail.len() < BLOCK_SIZE);

    match padding {
        Padding::None => {
            if tail.is_empty() {
                Ok(Vec::new())
            } else {
                Err(Error::Length {
                    context: "unpadded plaintext",
                    expected: 0,
                    actual: tail.len(),
                })
            }
        }
        Padding::Pkcs7 => {
            // Always emits a block, even for an aligned message
            let pad_len = BLOCK_SIZE - tail.len();
            let mut block = Vec::with_capacity(BLOCK_SIZE);
            block.extend_from_slice(tail);
            block.resize(BLOCK_SIZE, pad_len as u8);
            Ok(block)
        }
        Padding::Zeros => {
            if tail.is_empty() {
                Ok(Vec::new())
            } else {
                let mut block = Vec::with_capacity(BLOCK_SIZE);
                block.extend_from_slice(tail);
                block.resize(BLOCK_SIZE, 0);
                Ok(block)
            }
        }
    }
}

/// Strips padding from the final decrypted block.
pub fn unpad_block(block: &[u8; 16], padding: Padding) -> Result<Vec<u8>> {
    match padding {
        Padding::None => Ok(block.to_vec()),
        Padding::Pkcs7 => unpad_pkcs7(block),
        Padding::Zeros => {
            let mut end = BLOCK_SIZE;
            while end > 0 && block[end - 1] == 0 {
                end -= 1;
            }
            Ok(block[..end].to_vec())
        }
    }
}

/// Constant-time PKCS7 validation and removal.
///
/// The whole block is inspected unconditionally; the valid/invalid decision
/// and the padding length are combined only after the scan completes.
fn unpad_pkcs7(block: &[u8; 16]) -> Result<Vec<u8>> {
    let pad_len = block[BLOCK_SIZE - 1];

    let in_range = pad_len.ct_gt(&0) & !pad_len.ct_gt(&(BLOCK_SIZE as u8));

    let mut all_match = Choice::from(1u8);
    for (i, byte) in block.iter().enumerate() {
        // 1-based distance from the end of the block
        let from_end = (BLOCK_SIZE - i) as u8;
        let is_pad_position = !from_end.ct_gt(&pad_len);
        all_match &= !is_pad_position | byte.ct_eq(&pad_len);
    }

    if bool::from(in_range & all_match) {
        Ok(block[..BLOCK_SIZE - pad_len as usize].to_vec())
    } else {
        Err(Error::Padding {
            context: "PKCS7",
            details: "padding bytes are inconsistent with the padding length",
        })
    }
}

#[cfg(test)]
mod tests;
