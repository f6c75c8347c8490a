//! Constants for symmetric encryption algorithms

/// Twofish-128 key size in bytes
pub const TWOFISH128_KEY_SIZE: usize = 16;

/// Twofish-192 key size in bytes
pub const TWOFISH192_KEY_SIZE: usize = 24;

/// Twofish-256 key size in bytes
pub const TWOFISH256_KEY_SIZE: usize = 32;

/// Twofish block size in bytes
pub const TWOFISH_BLOCK_SIZE: usize = 16;

/// Twofish IV size in bytes (CBC mode)
pub const TWOFISH_IV_SIZE: usize = 16;

/// Number of Feistel rounds in Twofish
pub const TWOFISH_ROUNDS: usize = 16;

/// Number of expanded subkey words (8 whitening + 32 round keys)
pub const TWOFISH_SUBKEY_COUNT: usize = 40;

/// Reduction polynomial for the MDS matrix, x^8 + x^6 + x^5 + x^3 + 1
pub const MDS_POLYNOMIAL: u16 = 0x169;

/// Reduction polynomial for the RS matrix, x^8 + x^6 + x^3 + x^2 + 1
pub const RS_POLYNOMIAL: u16 = 0x14D;
