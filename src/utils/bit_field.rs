// src/utils/bit_field.rs
use crate::error::{NdefError, Result};

fn check_index(index: u8) -> Result<u8> {
    if index > 7 {
        return Err(NdefError::InvalidArgument(format!(
            "bit index {} outside 0..=7",
            index
        )));
    }
    Ok(1 << index)
}

/// Returns true if the bit at `index` (LSB = 0) is set.
///
/// # Example
///
/// ```
/// use ndef_tlv::utils::get_bit;
///
/// assert!(get_bit(0b0001_0000, 4).unwrap());
/// assert!(!get_bit(0b0001_0000, 3).unwrap());
/// assert!(get_bit(0x01, 8).is_err());
/// ```
pub fn get_bit(byte: u8, index: u8) -> Result<bool> {
    let mask = check_index(index)?;
    Ok(byte & mask == mask)
}

/// Forces the bit at `index` to 1, leaving every other bit untouched.
pub fn set_bit(byte: u8, index: u8) -> Result<u8> {
    let mask = check_index(index)?;
    Ok(byte | mask)
}

pub fn low_nibble(byte: u8) -> u8 {
    byte & 0x0F
}

pub fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}

/// Bits 0-2, where the Type Name Format lives in a record header.
pub fn get_3bit_field(byte: u8) -> u8 {
    byte & 0x07
}

/// ORs bits 0-2 of `value` into `byte`.
///
/// Additive only: a bit already set in `byte` is never cleared, so callers
/// building a header start from zero.
pub fn set_3bit_field(byte: u8, value: u8) -> Result<u8> {
    if value > 7 {
        return Err(NdefError::InvalidArgument(format!(
            "3-bit field value {} outside 0..=7",
            value
        )));
    }
    Ok(byte | get_3bit_field(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit_every_position() {
        for index in 0..8u8 {
            let byte = 1u8 << index;
            assert!(get_bit(byte, index).unwrap());
            assert!(!get_bit(!byte, index).unwrap());
        }
    }

    #[test]
    fn test_bit_index_out_of_range() {
        assert!(matches!(get_bit(0xFF, 8), Err(NdefError::InvalidArgument(_))));
        assert!(matches!(set_bit(0x00, 200), Err(NdefError::InvalidArgument(_))));
    }

    #[test]
    fn test_set_bit_keeps_other_bits() {
        assert_eq!(set_bit(0b0000_0001, 7).unwrap(), 0b1000_0001);
        assert_eq!(set_bit(0b1000_0000, 7).unwrap(), 0b1000_0000);
    }

    #[test]
    fn test_nibbles() {
        assert_eq!(low_nibble(0xA7), 0x07);
        assert_eq!(high_nibble(0xA7), 0x0A);
        assert_eq!(high_nibble(0x0F), 0x00);
    }

    #[test]
    fn test_3bit_field() {
        assert_eq!(get_3bit_field(0xD1), 1);
        assert_eq!(get_3bit_field(0xFF), 7);
        assert_eq!(set_3bit_field(0xD0, 1).unwrap(), 0xD1);
        // OR-only: an existing 1 survives a write of 0
        assert_eq!(set_3bit_field(0x05, 0).unwrap(), 0x05);
        assert_eq!(set_3bit_field(0x04, 3).unwrap(), 0x07);
        assert!(set_3bit_field(0x00, 8).is_err());
    }
}
