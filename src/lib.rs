//! # tfcrypt
//!
//! A modular implementation of the Twofish block cipher with standard
//! chaining modes, padding schemes and streaming support.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tfcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`tfcrypt-algorithms`]: the Twofish block engine, ECB/CBC modes and
//!   padding schemes
//! - [`tfcrypt-symmetric`]: high-level encryption transforms, key derivation
//!   and streaming adapters

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use tfcrypt_api as api;
pub use tfcrypt_common as common;
pub use tfcrypt_internal as internal;
pub use tfcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use tfcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use tfcrypt_symmetric as symmetric;

// Supporting crates users commonly need alongside the API
pub use subtle;
pub use zeroize;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for tfcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::common::SecretVec;

    // Re-export the cipher surface
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        BlockCipher, Cbc, CipherAlgorithm, Ecb, Nonce, Padding, Twofish128, Twofish192,
        Twofish256,
    };

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        derive_twofish_key, generate_iv, make_decryptor, make_encryptor, KeySize, Mode,
        SymmetricCipher, TwofishCipher, TwofishIv, TwofishKey,
    };
}
