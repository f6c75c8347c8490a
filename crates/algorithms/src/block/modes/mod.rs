//! Block cipher modes of operation
//!
//! This module implements the supported modes of operation, ECB and CBC.
//! Other chaining modes are intentionally not represented here.

pub mod cbc;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;
