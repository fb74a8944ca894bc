//! Mask construction and masked single-bit operations.
//!
//! Every operation is generic over [`BitWord`](crate::BitWord), so the same
//! function works on 8, 16, 32 and 64-bit words.

mod basic;
mod merge;
mod modify;

// Re-export all public functions
pub use basic::{checked_mask_for_bit, get_bit, get_masked, mask32, mask64, mask_for_bit};
pub use merge::{merge_bits, modify_bits};
pub use modify::{
    clear_bit, clear_masked, flip_bit, flip_masked, set_bit, set_masked, shift_left, shift_right,
};
