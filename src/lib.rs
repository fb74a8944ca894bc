//! # bit-twiddling-hacks
//!
//! Branch-free bit manipulation on fixed-width integers.
//! Every function is pure (or mutates only its `&mut` argument) and O(1).
//!
//! ## Features
//! - Masked and single-bit get/set/clear/flip/shift, generic over u8/u16/u32/u64
//! - Sign tests, branch-free min/max, power-of-two test
//! - Conditional set/clear and masked merge without branching
//! - Population count and parity by multiply
//! - Bit reversal of bytes and 32-bit words
//! - Power-of-two rounding (exact, and the legacy float-cast trick)
//! - no_std compatible, no allocation
//!
//! ## Bit indices
//! Indices and shift amounts must be below the operand width. Debug builds
//! panic with "bit index out of range"; release builds skip the check unless
//! the `strict-bounds` feature is enabled.

#![no_std]

mod bounds;
mod constants;
mod count;
pub mod mask;
mod ops;
mod reverse;
mod round;
pub mod sign;
mod word;

pub use count::{is_even_parity, is_odd_parity, n_bits_set, n_bits_set_64};
pub use mask::{
    checked_mask_for_bit, clear_bit, clear_masked, flip_bit, flip_masked, get_bit, get_masked,
    mask32, mask64, mask_for_bit, merge_bits, modify_bits, set_bit, set_masked, shift_left,
    shift_right,
};
pub use ops::BitOps;
pub use reverse::{reverse_bit_order, reverse_bit_order_byte, reversed_bit_order};
pub use round::{
    checked_round_up_to_power_of_2, round_up_to_power_of_2, round_up_to_power_of_2_float,
};
pub use sign::{have_opposite_signs, is_even, is_odd, is_positive, is_power_of_2};
pub use word::BitWord;
