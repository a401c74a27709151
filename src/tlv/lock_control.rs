// src/tlv/lock_control.rs
use crate::utils::{high_nibble, low_nibble};

/// Dynamic lock bit location carried in a Lock Control TLV
///
/// Three value bytes:
///
/// ```text
/// byte 0: page address (high nibble) | byte offset (low nibble)
/// byte 1: size in lock bits, 0 meaning 256
/// byte 2: bytes locked per lock bit (high nibble) | bytes per page (low nibble)
/// ```
///
/// The last two fields are base-2 exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockControl {
    pub page_address: u8,
    pub byte_offset: u8,
    pub size: u16,
    pub bytes_per_page: u8,
    pub bytes_locked_per_lock_bit: u8,
}

impl LockControl {
    /// Value length of a Lock Control TLV
    pub const LENGTH: u8 = 3;

    /// Descriptor written by the encoder, the common layout of NTAG21x tags
    pub const DEFAULT_DESCRIPTOR: [u8; 3] = [0xA0, 0xC0, 0x34];

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let size = match bytes[1] {
            0 => 256,
            bits => bits as u16,
        };

        LockControl {
            page_address: high_nibble(bytes[0]),
            byte_offset: low_nibble(bytes[0]),
            size,
            bytes_per_page: low_nibble(bytes[2]),
            bytes_locked_per_lock_bit: high_nibble(bytes[2]),
        }
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [
            (self.page_address << 4) | (self.byte_offset & 0x0F),
            (self.size & 0xFF) as u8,
            (self.bytes_locked_per_lock_bit << 4) | (self.bytes_per_page & 0x0F),
        ]
    }

    /// Absolute byte address of the first dynamic lock byte
    pub fn byte_address(&self) -> u32 {
        (self.page_address as u32) * (1u32 << self.bytes_per_page) + self.byte_offset as u32
    }

    /// Number of bytes holding the lock bits
    pub fn lock_bytes(&self) -> u16 {
        self.size.div_ceil(8)
    }
}

impl Default for LockControl {
    fn default() -> Self {
        LockControl::from_bytes(Self::DEFAULT_DESCRIPTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descriptor_fields() {
        let lock = LockControl::default();
        assert_eq!(lock.page_address, 0x0A);
        assert_eq!(lock.byte_offset, 0x00);
        assert_eq!(lock.size, 0xC0);
        assert_eq!(lock.bytes_per_page, 4);
        assert_eq!(lock.bytes_locked_per_lock_bit, 3);
        assert_eq!(lock.byte_address(), 160);
        assert_eq!(lock.lock_bytes(), 24);
        assert_eq!(lock.to_bytes(), LockControl::DEFAULT_DESCRIPTOR);
    }

    #[test]
    fn test_zero_size_means_256() {
        let lock = LockControl::from_bytes([0x48, 0x00, 0x32]);
        assert_eq!(lock.page_address, 4);
        assert_eq!(lock.byte_offset, 8);
        assert_eq!(lock.size, 256);
        assert_eq!(lock.byte_address(), 4 * 4 + 8);
        assert_eq!(lock.to_bytes(), [0x48, 0x00, 0x32]);
    }
}
