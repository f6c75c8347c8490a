//! GF(2^8) arithmetic and the fixed Twofish matrices
//!
//! Two different reduction polynomials are in play: the MDS matrix works
//! modulo x^8 + x^6 + x^5 + x^3 + 1 (0x169) and the RS code modulo
//! x^8 + x^6 + x^3 + x^2 + 1 (0x14D). Both matrices are bit-exact parts of
//! the algorithm definition.

use internal::endian::u32_from_le_bytes;
use params::utils::symmetric::{MDS_POLYNOMIAL, RS_POLYNOMIAL};

/// The 4x4 MDS matrix applied to the S-box outputs
pub(crate) const MDS_MATRIX: [[u8; 4]; 4] = [
    [0x01, 0xEF, 0x5B, 0x5B],
    [0x5B, 0xEF, 0xEF, 0x01],
    [0xEF, 0x5B, 0x01, 0xEF],
    [0xEF, 0x01, 0xEF, 0x5B],
];

/// The 4x8 Reed-Solomon matrix deriving S-box key words from key bytes
pub(crate) const RS_MATRIX: [[u8; 8]; 4] = [
    [0x01, 0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E],
    [0xA4, 0x56, 0x82, 0xF3, 0x1E, 0xC6, 0x68, 0xE5],
    [0x02, 0xA1, 0xFC, 0xC1, 0x47, 0xAE, 0x3D, 0x19],
    [0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E, 0x03],
];

/// Multiply two bytes in GF(2^8) under the given reduction polynomial
///
/// Branchless: selection masks are derived with wrapping negation so the
/// sequence of operations never depends on the data.
#[inline(always)]
pub(crate) fn gf_mul(a: u8, b: u8, poly: u16) -> u8 {
    let mut p = 0u16;
    let mut a = a as u16;
    let mut b = b as u16;
    for _ in 0..8 {
        // mask = 0xFFFF if b&1==1 else 0x0000
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        a <<= 1;
        // reduce when bit 8 was shifted in
        let hi = ((a >> 8) & 1).wrapping_neg();
        a ^= poly & hi;
        b >>= 1;
    }
    p as u8
}

/// Apply one MDS column to a single S-box output byte
///
/// Returns the 32-bit contribution of input lane `lane`; the full MDS
/// product is the XOR of the four lane contributions.
#[inline(always)]
pub(crate) fn mds_column(lane: usize, y: u8) -> u32 {
    let mut out = 0u32;
    for (row, coeffs) in MDS_MATRIX.iter().enumerate() {
        out |= (gf_mul(coeffs[lane], y, MDS_POLYNOMIAL) as u32) << (8 * row);
    }
    out
}

/// Encode 8 key bytes into one S-box key word via the RS matrix
#[inline(always)]
pub(crate) fn rs_encode(chunk: &[u8]) -> u32 {
    debug_assert_eq!(chunk.len(), 8);
    let mut out = [0u8; 4];
    for (row, coeffs) in RS_MATRIX.iter().enumerate() {
        let mut acc = 0u8;
        for (coeff, byte) in coeffs.iter().zip(chunk.iter()) {
            acc ^= gf_mul(*coeff, *byte, RS_POLYNOMIAL);
        }
        out[row] = acc;
    }
    u32_from_le_bytes(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf_mul_identity_and_zero() {
        for x in 0..=255u8 {
            assert_eq!(gf_mul(0x01, x, MDS_POLYNOMIAL), x);
            assert_eq!(gf_mul(x, 0x01, RS_POLYNOMIAL), x);
            assert_eq!(gf_mul(0x00, x, MDS_POLYNOMIAL), 0);
        }
    }

    #[test]
    fn test_gf_mul_commutative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(11) {
                assert_eq!(gf_mul(a, b, MDS_POLYNOMIAL), gf_mul(b, a, MDS_POLYNOMIAL));
                assert_eq!(gf_mul(a, b, RS_POLYNOMIAL), gf_mul(b, a, RS_POLYNOMIAL));
            }
        }
    }

    #[test]
    fn test_gf_mul_distributes_over_xor() {
        for a in (0..=255u8).step_by(13) {
            for b in (0..=255u8).step_by(17) {
                for c in (0..=255u8).step_by(29) {
                    assert_eq!(
                        gf_mul(a, b ^ c, MDS_POLYNOMIAL),
                        gf_mul(a, b, MDS_POLYNOMIAL) ^ gf_mul(a, c, MDS_POLYNOMIAL)
                    );
                }
            }
        }
    }

    #[test]
    fn test_mds_columns_match_row_computation() {
        let y = [0x12, 0x34, 0x56, 0x78];
        let by_columns = mds_column(0, y[0]) ^ mds_column(1, y[1]) ^ mds_column(2, y[2])
            ^ mds_column(3, y[3]);

        let mut by_rows = 0u32;
        for row in 0..4 {
            let mut acc = 0u8;
            for lane in 0..4 {
                acc ^= gf_mul(MDS_MATRIX[row][lane], y[lane], MDS_POLYNOMIAL);
            }
            by_rows |= (acc as u32) << (8 * row);
        }
        assert_eq!(by_columns, by_rows);
    }

    #[test]
    fn test_rs_encode_zero_block() {
        assert_eq!(rs_encode(&[0u8; 8]), 0);
    }
}
