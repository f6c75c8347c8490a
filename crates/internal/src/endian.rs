//! Endianness utility functions
//!
//! Explicit compose/decompose accessors for multi-byte words. Block and key
//! material is always addressed through these helpers rather than through
//! overlapping views of the same buffer.

/// Convert a u32 from little-endian byte order to native byte order
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u32 from native byte order to little-endian bytes
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Read a 16-byte block as four little-endian u32 words
pub fn block_to_le_words(block: &[u8]) -> [u32; 4] {
    [
        u32_from_le_bytes(&block[0..4]),
        u32_from_le_bytes(&block[4..8]),
        u32_from_le_bytes(&block[8..12]),
        u32_from_le_bytes(&block[12..16]),
    ]
}

/// Write four u32 words back into a 16-byte block in little-endian order
pub fn le_words_to_block(words: &[u32; 4], block: &mut [u8]) {
    for (i, word) in words.iter().enumerate() {
        block[i * 4..(i + 1) * 4].copy_from_slice(&u32_to_le_bytes(*word));
    }
}
