//! Shared helpers for the TFCRYPT integration test suites

/// Decodes a hex string into a fixed-size array
///
/// Panics on malformed input; test vectors are compiled in and trusted.
pub fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s).expect("test vector hex must be valid");
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    out
}

/// Decodes a hex string into a byte vector
pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s).expect("test vector hex must be valid")
}
