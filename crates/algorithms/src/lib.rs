//! Cryptographic primitives library with constant-time implementation
//!
//! This crate provides the Twofish block cipher together with its modes of
//! operation and padding schemes, with a focus on constant-time operations
//! and resistance to side-channel attacks. The library is designed to be
//! usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! This library implements comprehensive security patterns to protect sensitive
//! cryptographic material, including:
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison operations
//! - Branchless GF(2^8) arithmetic in the key schedule

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt, SecureErrorHandling};

// Block cipher implementations
pub mod block;
pub use block::{
    padding::Padding, BlockCipher, Cbc, CipherAlgorithm, Ecb, Twofish128, Twofish192, Twofish256,
};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, FixedSize, Nonce, RandomGeneration, SecretBytes};

// Re-export security types from tfcrypt-common
pub use common::security::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};
