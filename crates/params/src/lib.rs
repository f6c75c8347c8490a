//! Algorithm parameters for the TFCRYPT library
//!
//! This crate holds fixed constants shared across the workspace. It carries
//! no code and is always no_std compatible.

#![no_std]
#![forbid(unsafe_code)]

pub mod utils;
