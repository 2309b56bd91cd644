//! Bit checks on 32-bit integers.

/// Whether the bit at `index` (0 = least significant) of `value` is set.
///
/// The shift amount is taken modulo 32, so `index = 32` reads bit 0.
#[inline]
pub fn has_bit_at(value: i32, index: u32) -> bool {
    (value.wrapping_shr(index) & 1) == 1
}
