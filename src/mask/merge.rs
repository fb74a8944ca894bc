//! Branch-free conditional set/clear and masked merge of 32-bit words.

/// Conditionally set or clear the bits of `v` selected by `mask` without branching.
///
/// # Arguments
/// * `v` - Word to modify in place
/// * `mask` - Bits to modify; bits outside the mask are untouched
/// * `set` - `true` sets the masked bits, `false` clears them
///
/// # Performance
/// O(1) - `set` is widened to all-ones or all-zeros by negation, so the
/// result is one XOR, one AND and one XOR
#[inline]
pub fn modify_bits(v: &mut u32, mask: u32, set: bool) {
    *v ^= ((set as u32).wrapping_neg() ^ *v) & mask;
}

/// Merge two words according to a mask.
///
/// # Arguments
/// * `x` - Source of the bits where `mask` is 0
/// * `y` - Source of the bits where `mask` is 1
/// * `mask` - Selector
///
/// # Returns
/// `(x & !mask) | (y & mask)`, computed with one operation less
///
/// # Examples
/// ```
/// use bit_twiddling_hacks::merge_bits;
///
/// assert_eq!(merge_bits(0x5555_5555, 0xAAAA_AAAA, 0x3333_3333), 0x6666_6666);
/// ```
#[inline]
pub fn merge_bits(x: u32, y: u32, mask: u32) -> u32 {
    x ^ ((x ^ y) & mask)
}
