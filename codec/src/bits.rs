//! Reading and writing 11-bit fields at arbitrary bit offsets.
//!
//! Bits are addressed MSB-first: offset 0 is the top bit of byte 0. A field
//! spans two or three bytes; callers guarantee `offset + 11 <= 8 * len`.

/// Bits per word index.
pub const BITS_PER_WORD: usize = 11;

const MASK_11: u32 = (1 << BITS_PER_WORD) - 1;

/// Read the 11-bit field starting at `bit_offset`.
///
/// The third byte is only touched when the field spills into it, so a field
/// ending exactly at the end of the buffer never reads past it.
pub fn read11(bytes: &[u8], bit_offset: usize) -> u16 {
    let skip = bit_offset / 8;
    let lower_bits_to_remove = (24 - BITS_PER_WORD) - (bit_offset % 8);
    let b1 = u32::from(bytes[skip]) << 16;
    let b2 = u32::from(bytes[skip + 1]) << 8;
    let b3 = if lower_bits_to_remove < 8 {
        u32::from(bytes[skip + 2])
    } else {
        0
    };
    (((b1 | b2 | b3) >> lower_bits_to_remove) & MASK_11) as u16
}

/// OR the low 11 bits of `value` into the field starting at `bit_offset`.
///
/// Bits outside the field are left untouched, so this is safe on buffers
/// that already hold data.
pub fn write11(bytes: &mut [u8], value: u16, bit_offset: usize) {
    let skip = bit_offset / 8;
    let shift = (24 - BITS_PER_WORD) - (bit_offset % 8);
    let window = (u32::from(value) & MASK_11) << shift;
    bytes[skip] |= (window >> 16) as u8;
    bytes[skip + 1] |= (window >> 8) as u8;
    if shift < 8 {
        bytes[skip + 2] |= window as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_at_zero() {
        // 1010_1010 111x_xxxx -> 10101010111
        assert_eq!(read11(&[0b1010_1010, 0b1110_0000], 0), 0b101_0101_0111);
    }

    #[test]
    fn read_spanning_three_bytes() {
        let bytes = [0b0000_0011, 0b1111_1111, 0b1100_0000];
        // offset 6: bits 6..17 = 11 1111_1111 1 -> all ones
        assert_eq!(read11(&bytes, 6), 0x7FF);
    }

    #[test]
    fn read_does_not_need_third_byte_when_field_fits() {
        // Offsets 0..=5 keep the field inside two bytes.
        let bytes = [0xFF, 0xFF];
        for offset in 0..=5 {
            assert_eq!(read11(&bytes, offset), 0x7FF);
        }
    }

    #[test]
    fn write_then_read_every_offset() {
        for offset in 0..16 {
            let mut bytes = [0u8; 4];
            write11(&mut bytes, 0b101_1001_0110, offset);
            assert_eq!(read11(&bytes, offset), 0b101_1001_0110, "offset {offset}");
        }
    }

    #[test]
    fn write_preserves_neighbouring_bits() {
        let mut bytes = [0b1000_0000, 0, 0b0000_0001];
        write11(&mut bytes, 0, 3);
        assert_eq!(bytes, [0b1000_0000, 0, 0b0000_0001]);

        write11(&mut bytes, 0x7FF, 3);
        // bits 3..14 set, bit 0 and bit 23 kept
        assert_eq!(bytes, [0b1001_1111, 0b1111_1100, 0b0000_0001]);
    }

    #[test]
    fn write_masks_oversized_values() {
        let mut bytes = [0u8; 3];
        write11(&mut bytes, 0xFFFF, 0);
        assert_eq!(bytes, [0xFF, 0b1110_0000, 0]);
    }

    #[test]
    fn consecutive_fields_pack_tightly() {
        let mut bytes = [0u8; 11]; // 8 fields * 11 bits = 88 bits
        let values = [0, 1, 2047, 1024, 3, 1500, 7, 42];
        for (i, v) in values.iter().enumerate() {
            write11(&mut bytes, *v, i * BITS_PER_WORD);
        }
        for (i, v) in values.iter().enumerate() {
            assert_eq!(read11(&bytes, i * BITS_PER_WORD), *v);
        }
    }
}
