//! The fixed q0/q1 permutations
//!
//! Each 8-bit permutation is assembled from four 4-bit permutations with the
//! standard two-stage nibble mixing network. The full 256-entry tables are
//! built once at compile time.

const Q0_T0: [u8; 16] = [
    0x8, 0x1, 0x7, 0xD, 0x6, 0xF, 0x3, 0x2, 0x0, 0xB, 0x5, 0x9, 0xE, 0xC, 0xA, 0x4,
];
const Q0_T1: [u8; 16] = [
    0xE, 0xC, 0xB, 0x8, 0x1, 0x2, 0x3, 0x5, 0xF, 0x4, 0xA, 0x6, 0x7, 0x0, 0x9, 0xD,
];
const Q0_T2: [u8; 16] = [
    0xB, 0xA, 0x5, 0xE, 0x6, 0xD, 0x9, 0x0, 0xC, 0x8, 0xF, 0x3, 0x2, 0x4, 0x7, 0x1,
];
const Q0_T3: [u8; 16] = [
    0xD, 0x7, 0xF, 0x4, 0x1, 0x2, 0x6, 0xE, 0x9, 0xB, 0x3, 0x0, 0x8, 0x5, 0xC, 0xA,
];

const Q1_T0: [u8; 16] = [
    0x2, 0x8, 0xB, 0xD, 0xF, 0x7, 0x6, 0xE, 0x3, 0x1, 0x9, 0x4, 0x0, 0xA, 0xC, 0x5,
];
const Q1_T1: [u8; 16] = [
    0x1, 0xE, 0x2, 0xB, 0x4, 0xC, 0x3, 0x7, 0x6, 0xD, 0xA, 0x5, 0xF, 0x9, 0x0, 0x8,
];
const Q1_T2: [u8; 16] = [
    0x4, 0xC, 0x7, 0x5, 0x1, 0x6, 0x9, 0xA, 0x0, 0xE, 0xD, 0x8, 0x2, 0xB, 0x3, 0xF,
];
const Q1_T3: [u8; 16] = [
    0xB, 0x9, 0x5, 0x1, 0xC, 0x3, 0xD, 0xE, 0x6, 0x4, 0x7, 0xF, 0x2, 0x0, 0x8, 0xA,
];

/// Rotate a nibble right by one bit
const fn ror4(x: u8) -> u8 {
    ((x >> 1) | (x << 3)) & 0x0F
}

const fn build_q(t0: [u8; 16], t1: [u8; 16], t2: [u8; 16], t3: [u8; 16]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        let a0 = (x as u8) >> 4;
        let b0 = (x as u8) & 0x0F;
        let a1 = a0 ^ b0;
        let b1 = a0 ^ ror4(b0) ^ ((a0 << 3) & 0x0F);
        let a2 = t0[a1 as usize];
        let b2 = t1[b1 as usize];
        let a3 = a2 ^ b2;
        let b3 = a2 ^ ror4(b2) ^ ((a2 << 3) & 0x0F);
        table[x] = (t3[b3 as usize] << 4) | t2[a3 as usize];
        x += 1;
    }
    table
}

/// The q0 permutation table
pub(crate) const Q0: [u8; 256] = build_q(Q0_T0, Q0_T1, Q0_T2, Q0_T3);

/// The q1 permutation table
pub(crate) const Q1: [u8; 256] = build_q(Q1_T0, Q1_T1, Q1_T2, Q1_T3);

/// Look up a permutation by selector (0 -> q0, 1 -> q1)
///
/// The selector is a fixed property of the byte lane, never key or data
/// dependent.
#[inline(always)]
pub(crate) fn q(selector: u8, x: u8) -> u8 {
    if selector == 0 {
        Q0[x as usize]
    } else {
        Q1[x as usize]
    }
}
