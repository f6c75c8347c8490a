//! Shared parameter modules

pub mod symmetric;
