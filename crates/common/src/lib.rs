//! Common implementations and shared functionality for the TFCRYPT library
//!
//! This crate provides secure memory types used across multiple TFCRYPT
//! components.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(any(feature = "std", feature = "alloc"))]
pub use security::secret::SecretVec;
