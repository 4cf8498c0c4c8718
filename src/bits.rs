//! Mask tables for isolating a field's bits within a shared byte.
//!
//! Bits are addressed MSB-first: position 0 is the high bit of a byte.

/// Selects the single bit at position `i` (0 = MSB).
pub const BIT_SELECT: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// Keeps the low `8 - i` bits of a byte, clearing the `i` high bits
/// already claimed by preceding fields.
pub const KEEP_LOW: [u8; 8] = [0xff, 0x7f, 0x3f, 0x1f, 0x0f, 0x07, 0x03, 0x01];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_select_covers_byte() {
        assert_eq!(BIT_SELECT.iter().fold(0u8, |acc, m| acc | m), 0xff);
        for (i, m) in BIT_SELECT.iter().enumerate() {
            assert_eq!(*m, 0x80 >> i);
        }
    }

    #[test]
    fn test_keep_low_clears_high_bits() {
        for (i, m) in KEEP_LOW.iter().enumerate() {
            assert_eq!(*m, 0xffu8 >> i);
            assert_eq!(0xff & m, *m);
        }
    }
}
