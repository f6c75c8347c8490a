//! Twofish key types and key derivation
//!
//! Twofish accepts three key sizes, so the key type carries its size as a
//! runtime tag instead of a const generic. Key material lives in a
//! [`SecretVec`] and is zeroized on drop.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::error::{validate_key_derivation, Error, Result};
use common::security::SecretVec;
use params::utils::symmetric::{
    TWOFISH128_KEY_SIZE, TWOFISH192_KEY_SIZE, TWOFISH256_KEY_SIZE,
};

/// The three key sizes Twofish is defined for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key
    Bits128,
    /// 192-bit key
    Bits192,
    /// 256-bit key
    Bits256,
}

impl KeySize {
    /// Key length in bytes
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Bits128 => TWOFISH128_KEY_SIZE,
            KeySize::Bits192 => TWOFISH192_KEY_SIZE,
            KeySize::Bits256 => TWOFISH256_KEY_SIZE,
        }
    }

    /// Classify a byte length, if it is a valid Twofish key length
    pub fn from_byte_len(len: usize) -> Option<Self> {
        match len {
            TWOFISH128_KEY_SIZE => Some(KeySize::Bits128),
            TWOFISH192_KEY_SIZE => Some(KeySize::Bits192),
            TWOFISH256_KEY_SIZE => Some(KeySize::Bits256),
            _ => None,
        }
    }
}

/// A Twofish key of any supported size
#[derive(Clone)]
pub struct TwofishKey {
    bytes: SecretVec,
    size: KeySize,
}

impl TwofishKey {
    /// Creates a key from raw bytes, rejecting unsupported lengths
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let size = match KeySize::from_byte_len(bytes.len()) {
            Some(size) => size,
            None => {
                return Err(Error::InvalidKey {
                    context: "Twofish key",
                    #[cfg(feature = "std")]
                    message: "key length must be 16, 24 or 32 bytes".to_string(),
                })
            }
        };

        Ok(Self {
            bytes: SecretVec::from_slice(bytes),
            size,
        })
    }

    /// Generates a random key of the requested size
    pub fn generate(size: KeySize) -> Self {
        let mut bytes = vec![0u8; size.byte_len()];
        OsRng.fill_bytes(&mut bytes);
        Self {
            bytes: SecretVec::new(bytes),
            size,
        }
    }

    /// The size of this key
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key material
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

/// Derives a Twofish key from a password using PBKDF2-HMAC-SHA256
pub fn derive_twofish_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    size: KeySize,
) -> Result<TwofishKey> {
    validate_key_derivation(!salt.is_empty(), "PBKDF2", "salt must not be empty")?;
    validate_key_derivation(iterations > 0, "PBKDF2", "iteration count must be positive")?;

    let mut bytes = vec![0u8; size.byte_len()];
    pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut bytes);

    Ok(TwofishKey {
        bytes: SecretVec::new(bytes),
        size,
    })
}

/// Generates a random salt of the given length for key derivation
pub fn generate_salt(length: usize) -> Vec<u8> {
    let mut salt = vec![0u8; length];
    OsRng.fill_bytes(&mut salt);
    salt
}
