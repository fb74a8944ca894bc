//! In-place set, clear, flip and shift operations.

use crate::bounds::check_bit_index;
use crate::mask::mask_for_bit;
use crate::word::BitWord;

/// Set every bit of `v` selected by `mask`.
#[inline]
pub fn set_masked<T: BitWord>(v: &mut T, mask: T) {
    *v |= mask;
}

/// Set bit `n` of `v` (0 is the rightmost bit).
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `n >= T::BITS`.
#[inline]
pub fn set_bit<T: BitWord>(v: &mut T, n: u32) {
    set_masked(v, mask_for_bit(n));
}

/// Clear every bit of `v` selected by `mask`.
#[inline]
pub fn clear_masked<T: BitWord>(v: &mut T, mask: T) {
    *v &= !mask;
}

/// Clear bit `n` of `v` (0 is the rightmost bit).
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `n >= T::BITS`.
#[inline]
pub fn clear_bit<T: BitWord>(v: &mut T, n: u32) {
    clear_masked(v, mask_for_bit(n));
}

/// Toggle every bit of `v` selected by `mask`.
#[inline]
pub fn flip_masked<T: BitWord>(v: &mut T, mask: T) {
    *v ^= mask;
}

/// Toggle bit `n` of `v` (0 is the rightmost bit).
///
/// Flipping the same bit twice restores the original value.
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `n >= T::BITS`.
#[inline]
pub fn flip_bit<T: BitWord>(v: &mut T, n: u32) {
    flip_masked(v, mask_for_bit(n));
}

/// Shift `v` left by `p` places, filling with zeros.
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `p >= T::BITS`.
#[inline]
pub fn shift_left<T: BitWord>(v: &mut T, p: u32) {
    check_bit_index!(p, T::BITS);
    *v <<= p;
}

/// Shift `v` right by `p` places, filling with zeros.
///
/// Words are unsigned, so the shift is logical and never sign-extends.
///
/// # Panics
/// In debug builds (or with `strict-bounds`) if `p >= T::BITS`.
#[inline]
pub fn shift_right<T: BitWord>(v: &mut T, p: u32) {
    check_bit_index!(p, T::BITS);
    *v >>= p;
}
