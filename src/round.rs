//! Rounding up to the next power of two.
//!
//! [`round_up_to_power_of_2`] is exact over the whole `u32` range and is the
//! one to use. [`round_up_to_power_of_2_float`] keeps the IEEE-754 exponent
//! trick for callers that need bit-for-bit parity with it.

use crate::constants::{F32_EXPONENT_BIAS, F32_MANTISSA_BITS};

/// Smallest power of two `>= v`, or `None` if it does not fit in a `u32`.
///
/// # Arguments
/// * `v` - Value to round up
///
/// # Returns
/// * `Some(1)` for 0 and 1
/// * `Some(v)` if `v` is already a power of two
/// * `None` for `v > 2^31`
///
/// # Performance
/// O(1) - single CPU instruction (LZCNT) plus a shift
#[inline]
pub fn checked_round_up_to_power_of_2(v: u32) -> Option<u32> {
    if v <= 1 {
        return Some(1);
    }
    1u32.checked_shl(u32::BITS - (v - 1).leading_zeros())
}

/// Smallest power of two `>= v`.
///
/// Returns 1 for 0 and 1, and 0 for `v > 2^31` where the answer does not
/// fit in a `u32`.
///
/// # Examples
/// ```
/// use bit_twiddling_hacks::round_up_to_power_of_2;
///
/// assert_eq!(round_up_to_power_of_2(200), 256);
/// assert_eq!(round_up_to_power_of_2(256), 256);
/// ```
#[inline]
pub fn round_up_to_power_of_2(v: u32) -> u32 {
    checked_round_up_to_power_of_2(v).unwrap_or(0)
}

/// Smallest power of two `>= v`, by casting to `f32`.
///
/// Converts `v` to a float, takes the unbiased exponent as the power of two
/// and doubles it once if the float rounded below `v`. Values above 2^24 are
/// not exact in an `f32`, but the rounding only ever lands on a neighbouring
/// power of two, which the final comparison corrects.
///
/// Same contract as [`round_up_to_power_of_2`], including 0 for `v > 2^31`.
#[inline]
pub fn round_up_to_power_of_2_float(v: u32) -> u32 {
    if v <= 1 {
        return 1;
    }

    let exponent = ((v as f32).to_bits() >> F32_MANTISSA_BITS) - F32_EXPONENT_BIAS;
    match 1u32.checked_shl(exponent) {
        Some(t) => t << ((t < v) as u32),
        // v rounded up to 2^32
        None => 0,
    }
}
