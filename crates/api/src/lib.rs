//! Public API traits and types for the TFCRYPT library
//!
//! This crate provides the public API surface for the TFCRYPT ecosystem,
//! including the shared error taxonomy and the secret byte containers used
//! throughout the library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;
