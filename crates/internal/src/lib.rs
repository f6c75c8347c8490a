//! Internal utilities for the TFCRYPT library
//!
//! Endianness accessors and constant-time helpers shared by the higher
//! layers. Nothing in here is algorithm specific.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
