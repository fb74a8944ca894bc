//! Method-call form of the mask operations.
//!
//! Bring [`BitOps`] into scope to write `flags.set_bit(3)` instead of
//! `set_bit(&mut flags, 3)`. Every method forwards to the free function of the
//! same name in [`crate::mask`], so bounds checks behave identically.

use crate::mask;
use crate::word::BitWord;

/// Bit operations available on every [`BitWord`].
///
/// # Example
/// ```
/// use bit_twiddling_hacks::BitOps;
///
/// let mut flags = 0u16;
/// flags.set_bit(3);
/// flags.set_masked(0b0011);
/// assert_eq!(flags, 0b1011);
/// assert!(flags.get_bit(3));
///
/// flags.clear_bit(0);
/// flags.flip_masked(0b1100);
/// assert_eq!(flags, 0b0110);
/// ```
pub trait BitOps: BitWord {
    /// See [`mask::get_masked`].
    #[inline]
    fn get_masked(self, mask: Self) -> Self {
        mask::get_masked(self, mask)
    }

    /// See [`mask::get_bit`].
    #[inline]
    fn get_bit(self, n: u32) -> bool {
        mask::get_bit(self, n)
    }

    /// See [`mask::set_masked`].
    #[inline]
    fn set_masked(&mut self, mask: Self) {
        mask::set_masked(self, mask);
    }

    /// See [`mask::set_bit`].
    #[inline]
    fn set_bit(&mut self, n: u32) {
        mask::set_bit(self, n);
    }

    /// See [`mask::clear_masked`].
    #[inline]
    fn clear_masked(&mut self, mask: Self) {
        mask::clear_masked(self, mask);
    }

    /// See [`mask::clear_bit`].
    #[inline]
    fn clear_bit(&mut self, n: u32) {
        mask::clear_bit(self, n);
    }

    /// See [`mask::flip_masked`].
    #[inline]
    fn flip_masked(&mut self, mask: Self) {
        mask::flip_masked(self, mask);
    }

    /// See [`mask::flip_bit`].
    #[inline]
    fn flip_bit(&mut self, n: u32) {
        mask::flip_bit(self, n);
    }

    /// See [`mask::shift_left`].
    #[inline]
    fn shift_left(&mut self, p: u32) {
        mask::shift_left(self, p);
    }

    /// See [`mask::shift_right`].
    #[inline]
    fn shift_right(&mut self, p: u32) {
        mask::shift_right(self, p);
    }
}

impl<T: BitWord> BitOps for T {}
