//! Bit-index precondition shared by every mask- and shift-producing operation.
//!
//! An index or shift amount must be below the operand width. The check is a
//! `debug_assert!` by default: debug builds panic, release builds skip it and
//! Rust's shift masks the amount to the operand width. With the
//! `strict-bounds` feature the check is an `assert!` in every build.

macro_rules! check_bit_index {
    ($n:expr, $bits:expr) => {
        #[cfg(feature = "strict-bounds")]
        assert!($n < $bits, "bit index out of range");
        #[cfg(not(feature = "strict-bounds"))]
        debug_assert!($n < $bits, "bit index out of range");
    };
}

pub(crate) use check_bit_index;

/// Returns `true` if `n` is a valid bit index for a `bits`-wide word.
#[inline]
pub const fn in_range(n: u32, bits: u32) -> bool {
    n < bits
}
