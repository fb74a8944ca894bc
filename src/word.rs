//! Trait for the fixed-width words (u8/u16/u32/u64) the bit operations accept.

use core::fmt::Debug;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

/// Unsigned fixed-width integer usable as a bit word.
///
/// Supports u8, u16, u32 and u64 with zero-cost abstraction.
/// Shifts always take a `u32` amount, matching `u32::checked_shl` and friends.
/// Right shifts are logical: unsigned words never sign-extend.
pub trait BitWord:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + ShlAssign<u32>
    + Shr<u32, Output = Self>
    + ShrAssign<u32>
{
    /// Width of the word in bits.
    ///
    /// Valid bit indices and shift amounts are `0..BITS`.
    const BITS: u32;

    /// All bits clear.
    const ZERO: Self;

    /// Only bit 0 set.
    const ONE: Self;

    /// All bits set.
    const ALL: Self;
}

macro_rules! impl_bit_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BitWord for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_bit_word!(u8, u16, u32, u64);
