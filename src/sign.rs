//! Branch-free sign tests, parity of the lowest bit, min/max and power-of-two test.
//!
//! `min` and `max` live here rather than at the crate root so they never
//! shadow `core::cmp::{min, max}` in a glob import.

/// Check if `x` is non-negative.
///
/// Shifts the sign bit down to bit 0 as an unsigned value and inverts it.
/// Zero counts as positive.
///
/// # Examples
/// ```
/// use bit_twiddling_hacks::sign::is_positive;
///
/// assert!(is_positive(0));
/// assert!(!is_positive(i32::MIN));
/// ```
#[inline]
pub fn is_positive(x: i32) -> bool {
    1 ^ ((x as u32) >> (i32::BITS - 1)) != 0
}

/// Check if bit 0 of `x` is set.
#[inline]
pub fn is_odd(x: i64) -> bool {
    x & 1 != 0
}

/// Check if bit 0 of `x` is clear.
#[inline]
pub fn is_even(x: i64) -> bool {
    !is_odd(x)
}

/// Check if `x` and `y` have different sign bits.
///
/// Zero has a clear sign bit, so `have_opposite_signs(0, y)` is `true` exactly
/// when `y` is negative.
#[inline]
pub fn have_opposite_signs(x: i32, y: i32) -> bool {
    (x ^ y) < 0
}

/// Minimum of two integers without branching.
///
/// `-(x < y)` is all ones when `x < y`, selecting `x`; otherwise it is zero
/// and the XOR cancels back to `y`.
#[inline]
pub fn min(x: i32, y: i32) -> i32 {
    y ^ ((x ^ y) & -((x < y) as i32))
}

/// Maximum of two integers without branching.
#[inline]
pub fn max(x: i32, y: i32) -> i32 {
    x ^ ((x ^ y) & -((x < y) as i32))
}

/// Check if `v` is a power of two.
///
/// A power of two has exactly one bit set, so clearing its lowest set bit
/// leaves zero. Zero itself is not a power of two.
///
/// # Performance
/// O(1) - one subtraction, one AND, two compares
#[inline]
pub fn is_power_of_2(v: u64) -> bool {
    v != 0 && v & v.wrapping_sub(1) == 0
}
