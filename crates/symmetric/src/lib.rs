//! Symmetric encryption algorithms for the TFCRYPT library
//!
//! This crate provides high-level symmetric encryption built on top of the
//! Twofish primitives in tfcrypt-algorithms and uses the unified API error
//! system.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod cipher;
pub mod error;
#[cfg(feature = "std")]
pub mod streaming;
pub mod twofish;

// Re-export main types for convenience
pub use cipher::{Mode, SymmetricCipher};
pub use twofish::keys::{derive_twofish_key, generate_salt, KeySize, TwofishKey};
pub use twofish::{
    generate_iv, make_decryptor, make_encryptor, TwofishCipher, TwofishDecryptor,
    TwofishEncryptor, TwofishIv,
};

// Re-export the padding selector so callers configure everything from one place
pub use algorithms::block::padding::Padding;

// Re-export the API error system instead of custom error types
pub use api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use api::error::{validate, ResultExt, SecureErrorHandling, ERROR_REGISTRY};
