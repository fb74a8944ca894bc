//! Mask construction and bit reads.

use crate::bounds::{check_bit_index, in_range};
use crate::word::BitWord;

/// Create a mask with only bit `n` set.
///
/// # Arguments
/// * `n` - Bit index (0 to `T::BITS - 1`)
///
/// # Returns
/// Power of two `1 << n` in the word type `T`
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `n >= T::BITS`.
///
/// # Performance
/// O(1) - single shift
#[inline]
pub fn mask_for_bit<T: BitWord>(n: u32) -> T {
    check_bit_index!(n, T::BITS);
    T::ONE << n
}

/// Create a 32-bit mask with only bit `n` set (0-31).
#[inline]
pub fn mask32(n: u32) -> u32 {
    mask_for_bit(n)
}

/// Create a 64-bit mask with only bit `n` set (0-63).
#[inline]
pub fn mask64(n: u32) -> u64 {
    mask_for_bit(n)
}

/// Create a mask with only bit `n` set, or `None` if `n` does not fit in `T`.
///
/// # Examples
/// ```
/// use bit_twiddling_hacks::checked_mask_for_bit;
///
/// assert_eq!(checked_mask_for_bit::<u32>(31), Some(0x8000_0000));
/// assert_eq!(checked_mask_for_bit::<u32>(32), None);
/// ```
#[inline]
pub fn checked_mask_for_bit<T: BitWord>(n: u32) -> Option<T> {
    if in_range(n, T::BITS) {
        Some(T::ONE << n)
    } else {
        None
    }
}

/// Get the bits of `v` selected by `mask`.
///
/// The result keeps the selected bits in place, so getting mask `0b111`
/// from a word with all bits set returns 7.
///
/// # Arguments
/// * `v` - Word to read from
/// * `mask` - Bits to keep
///
/// # Returns
/// `v & mask`
#[inline]
pub fn get_masked<T: BitWord>(v: T, mask: T) -> T {
    v & mask
}

/// Check if bit `n` of `v` is set.
///
/// # Arguments
/// * `v` - Word to read from
/// * `n` - Bit index (0 to `T::BITS - 1`, 0 is the rightmost bit)
///
/// # Returns
/// `true` if the bit is set, `false` otherwise
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `n >= T::BITS`.
#[inline]
pub fn get_bit<T: BitWord>(v: T, n: u32) -> bool {
    check_bit_index!(n, T::BITS);
    get_masked(v >> n, T::ONE) != T::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask32() {
        for n in 0..32 {
            assert_eq!(mask32(n), 1u32 << n);
        }
        assert_eq!(mask32(0), 0x0000_0001);
        assert_eq!(mask32(31), 0x8000_0000);
    }

    #[test]
    fn test_mask32_does_not_reach_64_bit_positions() {
        // A 32-bit word has no representation for bits 32-63
        for n in 32..64 {
            let narrow = checked_mask_for_bit::<u32>(n).map(u64::from);
            assert_ne!(narrow, Some(mask64(n)));
        }
    }

    #[test]
    fn test_mask64() {
        for n in 0..64 {
            assert_eq!(mask64(n), 1u64 << n);
        }
        assert_eq!(mask64(63), 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_mask_for_bit_small_words() {
        assert_eq!(mask_for_bit::<u8>(7), 0x80u8);
        assert_eq!(mask_for_bit::<u16>(15), 0x8000u16);
        assert_eq!(mask_for_bit::<u16>(3), 0b1000u16);
    }

    #[test]
    fn test_checked_mask_for_bit() {
        assert_eq!(checked_mask_for_bit::<u8>(0), Some(1));
        assert_eq!(checked_mask_for_bit::<u8>(8), None);
        assert_eq!(checked_mask_for_bit::<u64>(63), Some(1u64 << 63));
        assert_eq!(checked_mask_for_bit::<u64>(64), None);
        assert_eq!(checked_mask_for_bit::<u64>(u32::MAX), None);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-bounds"))]
    #[should_panic(expected = "bit index out of range")]
    fn test_mask32_out_of_range() {
        mask32(32);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-bounds"))]
    #[should_panic(expected = "bit index out of range")]
    fn test_mask64_out_of_range() {
        mask64(64);
    }

    #[test]
    fn test_get_masked() {
        for n in 0..64 {
            assert_eq!(get_masked(u64::MAX, mask64(n)), mask64(n));
        }
        for m in 0..255u64 {
            assert_eq!(get_masked(u64::MAX, m), m);
        }
        assert_eq!(get_masked(0b1010_1010u8, 0b0000_1111), 0b0000_1010);
        assert_eq!(get_masked(0u32, u32::MAX), 0);
    }

    #[test]
    fn test_get_bit_all_set() {
        for n in 0..64 {
            assert!(get_bit(u64::MAX, n));
        }
        for n in 0..8 {
            assert!(get_bit(u8::MAX, n));
        }
    }

    #[test]
    fn test_get_bit_matches_shift() {
        let v: u64 = 0x8012_3ABC_0F00_1F00;
        for n in 0..64 {
            assert_eq!(get_bit(v, n), (v >> n) & 1 == 1);
        }

        assert!(!get_bit(0u32, 0));
        assert!(get_bit(0x8000_0000u32, 31));
        assert!(!get_bit(0x8000_0000u32, 30));
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-bounds"))]
    #[should_panic(expected = "bit index out of range")]
    fn test_get_bit_out_of_range() {
        get_bit(0xFFu8, 8);
    }
}
