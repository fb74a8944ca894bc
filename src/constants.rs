//! Magic constants for the multiply/modulus bit tricks.

/// Spreads a 12-bit chunk into five copies, 12 bits apart.
///
/// Used by the 32-bit population count: each copy lines one chunk bit
/// up with a distinct slot of [`POPCOUNT_SELECT`].
pub const POPCOUNT_SPREAD: u64 = 0x1_0010_0100_1001;

/// Selects every fifth bit of the spread chunk (one bit per original position).
pub const POPCOUNT_SELECT: u64 = 0x84_2108_4210_8421;

/// Modulus that sums the selected 5-bit groups (2^5 - 1).
pub const POPCOUNT_MODULUS: u64 = 0x1F;

/// Chunk mask for the low 12 bits of the 32-bit population count.
pub const LOW_CHUNK: u32 = 0x0000_0FFF;

/// Chunk mask for bits 12..24 of the 32-bit population count.
pub const MID_CHUNK: u32 = 0x00FF_F000;

/// Nibble-wise XOR fold mask and multiplier for the parity trick.
///
/// After folding, bit 0 of every nibble holds that nibble's parity.
/// Multiplying by this value accumulates all of them into bit 60.
pub const PARITY_NIBBLES: u64 = 0x1111_1111_1111_1111;

/// Bit position the parity multiply accumulates into.
pub const PARITY_BIT: u32 = 60;

/// Five copies of the byte, each one bit further left.
pub const BYTE_REVERSE_SPREAD: u64 = 0x02_0202_0202;

/// Picks the reversed bit positions out of the spread copies.
pub const BYTE_REVERSE_SELECT: u64 = 0x0108_8442_2010;

/// Modulus folding the selected bits into one byte (2^10 - 1).
pub const BYTE_REVERSE_MODULUS: u64 = 1023;

/// Swap masks for the five stages of the parallel 32-bit reversal.
///
/// Stage order: single bits, bit pairs, nibbles, bytes.
/// The final half-word swap needs no mask.
pub const REVERSE_MASKS: [u32; 4] = [0x5555_5555, 0x3333_3333, 0x0F0F_0F0F, 0x00FF_00FF];

/// Number of explicit mantissa bits in an IEEE-754 `f32`.
pub const F32_MANTISSA_BITS: u32 = 23;

/// Exponent bias of an IEEE-754 `f32`.
pub const F32_EXPONENT_BIAS: u32 = 0x7F;
