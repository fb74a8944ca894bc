//! Population count and parity without a POPCNT instruction.

use crate::constants::{
    LOW_CHUNK, MID_CHUNK, PARITY_BIT, PARITY_NIBBLES, POPCOUNT_MODULUS, POPCOUNT_SELECT,
    POPCOUNT_SPREAD,
};

/// Count set bits in a chunk of at most 12 bits.
#[inline]
fn chunk_bits_set(chunk: u64) -> u64 {
    ((chunk * POPCOUNT_SPREAD) & POPCOUNT_SELECT) % POPCOUNT_MODULUS
}

/// Count set bits in a 32-bit word.
///
/// Splits the word into 12, 12 and 8-bit chunks. Each chunk is spread into
/// five copies by a multiply, one bit per copy is selected, and the modulus
/// by 31 adds the selected bits together.
///
/// # Arguments
/// * `v` - 32-bit word
///
/// # Returns
/// Number of set bits (0-32), identical to `v.count_ones()`
///
/// # Performance
/// O(1) - three 64-bit multiplies and three modulus operations
#[inline]
pub fn n_bits_set(v: u32) -> u8 {
    let low = chunk_bits_set((v & LOW_CHUNK) as u64);
    let mid = chunk_bits_set(((v & MID_CHUNK) >> 12) as u64);
    let high = chunk_bits_set((v >> 24) as u64);
    (low + mid + high) as u8
}

/// Count set bits in a 64-bit word.
///
/// Parallel (SWAR) reduction: sum adjacent bits, then pairs, then nibbles,
/// and gather the eight byte counts into the top byte with one multiply.
///
/// # Returns
/// Number of set bits (0-64), identical to `v.count_ones()`
#[inline]
pub fn n_bits_set_64(v: u64) -> u8 {
    let v = v - ((v >> 1) & 0x5555_5555_5555_5555);
    let v = (v & 0x3333_3333_3333_3333) + ((v >> 2) & 0x3333_3333_3333_3333);
    let v = (v + (v >> 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    (v.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u8
}

/// Check if `v` has an odd number of set bits.
///
/// Two XOR folds leave each nibble's parity in its lowest bit; the multiply
/// by `0x1111_1111_1111_1111` sums those bits into bit 60.
///
/// # Performance
/// O(1) - two shifts, two XORs and one multiply
#[inline]
pub fn is_odd_parity(v: u64) -> bool {
    let mut v = v;
    v ^= v >> 1;
    v ^= v >> 2;
    v = (v & PARITY_NIBBLES).wrapping_mul(PARITY_NIBBLES);
    (v >> PARITY_BIT) & 1 != 0
}

/// Check if `v` has an even number of set bits.
#[inline]
pub fn is_even_parity(v: u64) -> bool {
    !is_odd_parity(v)
}
