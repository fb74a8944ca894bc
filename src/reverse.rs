//! Bit order reversal of bytes and 32-bit words.

use crate::constants::{
    BYTE_REVERSE_MODULUS, BYTE_REVERSE_SELECT, BYTE_REVERSE_SPREAD, REVERSE_MASKS,
};

/// Reverse the bits of a byte with one multiply and one modulus.
///
/// The multiply makes five copies of the byte, the AND picks one bit out of
/// each copy at its mirrored position, and the modulus by 1023 folds the
/// picked bits back into the low byte.
///
/// # Arguments
/// * `b` - Byte to reverse
///
/// # Returns
/// `b` with bit 7 moved to bit 0, bit 6 to bit 1, and so on
#[inline]
pub fn reverse_bit_order_byte(b: u8) -> u8 {
    (((b as u64 * BYTE_REVERSE_SPREAD) & BYTE_REVERSE_SELECT) % BYTE_REVERSE_MODULUS) as u8
}

/// Reverse the bits of a 32-bit word in place.
///
/// Applying it twice restores the original value.
#[inline]
pub fn reverse_bit_order(v: &mut u32) {
    *v = reversed_bit_order(*v);
}

/// Reverse the bits of a 32-bit word in parallel in 5 * lg(32) operations.
///
/// # Performance
/// O(1) - five swap stages: odd/even bits, pairs, nibbles, bytes, half-words
#[inline]
pub fn reversed_bit_order(v: u32) -> u32 {
    let mut v = v;
    let mut width = 1u32;
    for mask in REVERSE_MASKS {
        v = ((v >> width) & mask) | ((v & mask) << width);
        width <<= 1;
    }
    (v >> 16) | (v << 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn naive_reverse_byte(b: u8) -> u8 {
        let mut out = 0u8;
        for n in 0..8 {
            if b & (1 << n) != 0 {
                out |= 0x80 >> n;
            }
        }
        out
    }

    #[test]
    fn test_reverse_bit_order_byte() {
        assert_eq!(reverse_bit_order_byte(0x00), 0x00);
        assert_eq!(reverse_bit_order_byte(0xFF), 0xFF);
        assert_eq!(reverse_bit_order_byte(0x01), 0x80);
        assert_eq!(reverse_bit_order_byte(0x80), 0x01);
        assert_eq!(reverse_bit_order_byte(0x0F), 0xF0);
        assert_eq!(reverse_bit_order_byte(0b1011_0010), 0b0100_1101);
    }

    #[test]
    fn test_reverse_bit_order_byte_all_values() {
        for b in 0..=u8::MAX {
            assert_eq!(reverse_bit_order_byte(b), naive_reverse_byte(b), "b = {:#04x}", b);
            assert_eq!(reverse_bit_order_byte(b), b.reverse_bits());
            assert_eq!(reverse_bit_order_byte(reverse_bit_order_byte(b)), b);
        }
    }

    #[test]
    fn test_reverse_bit_order() {
        let mut v = 0x0F0F_0F0Fu32;
        reverse_bit_order(&mut v);
        assert_eq!(v, 0xF0F0_F0F0);
        reverse_bit_order(&mut v);
        assert_eq!(v, 0x0F0F_0F0F);

        let mut v = 0x1234_5678u32;
        reverse_bit_order(&mut v);
        assert_eq!(v, 0x1E6A_2C48);

        let mut v = 1u32;
        reverse_bit_order(&mut v);
        assert_eq!(v, 0x8000_0000);
    }

    #[test]
    fn test_reverse_bit_order_edges() {
        assert_eq!(reversed_bit_order(0), 0);
        assert_eq!(reversed_bit_order(u32::MAX), u32::MAX);
        assert_eq!(reversed_bit_order(0x8000_0000), 1);
        assert_eq!(reversed_bit_order(0x0000_FFFF), 0xFFFF_0000);
        for n in 0..32 {
            assert_eq!(reversed_bit_order(1 << n), 1 << (31 - n));
        }
    }

    #[test]
    fn test_reverse_bit_order_is_self_inverse() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..10_000 {
            let original: u32 = rng.gen();
            let mut v = original;
            reverse_bit_order(&mut v);
            assert_eq!(v, original.reverse_bits());
            reverse_bit_order(&mut v);
            assert_eq!(v, original);
        }
    }
}
