// src/types.rs
use crate::utils::{get_3bit_field, get_bit, set_3bit_field, set_bit};

/// NDEF record header flags packed into the first byte of a record
///
/// ```text
///  7    6    5    4    3    2..0
/// MB   ME   CF   SR   IL   TNF
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordHeader(u8);

impl RecordHeader {
    pub const MESSAGE_BEGIN_BIT: u8 = 7;
    pub const MESSAGE_END_BIT: u8 = 6;
    pub const CHUNK_FLAG_BIT: u8 = 5;
    pub const SHORT_RECORD_BIT: u8 = 4;
    pub const ID_LENGTH_BIT: u8 = 3;

    pub fn new(byte: u8) -> Self {
        RecordHeader(byte)
    }

    pub fn empty() -> Self {
        RecordHeader(0)
    }

    /// Header of a lone short well-known record: MB, ME and SR set, TNF 1.
    pub fn single_short_well_known() -> Self {
        let mut header = RecordHeader::empty();
        header.set_message_begin(true);
        header.set_message_end(true);
        header.set_short_record(true);
        header.set_type_name_format(TypeNameFormat::NfcForumWellKnownType);
        header
    }

    fn flag(&self, bit: u8) -> bool {
        // bit positions are the constants above, always in range
        get_bit(self.0, bit).unwrap_or(false)
    }

    fn set_flag(&mut self, bit: u8, value: bool) {
        if value {
            self.0 = set_bit(self.0, bit).unwrap_or(self.0);
        } else {
            self.0 &= !(1 << bit);
        }
    }

    pub fn message_begin(&self) -> bool {
        self.flag(Self::MESSAGE_BEGIN_BIT)
    }

    pub fn message_end(&self) -> bool {
        self.flag(Self::MESSAGE_END_BIT)
    }

    pub fn chunk_flag(&self) -> bool {
        self.flag(Self::CHUNK_FLAG_BIT)
    }

    pub fn short_record(&self) -> bool {
        self.flag(Self::SHORT_RECORD_BIT)
    }

    pub fn id_length_present(&self) -> bool {
        self.flag(Self::ID_LENGTH_BIT)
    }

    pub fn type_name_format(&self) -> TypeNameFormat {
        TypeNameFormat::from_bits(get_3bit_field(self.0))
    }

    pub fn set_message_begin(&mut self, value: bool) {
        self.set_flag(Self::MESSAGE_BEGIN_BIT, value);
    }

    pub fn set_message_end(&mut self, value: bool) {
        self.set_flag(Self::MESSAGE_END_BIT, value);
    }

    pub fn set_chunk_flag(&mut self, value: bool) {
        self.set_flag(Self::CHUNK_FLAG_BIT, value);
    }

    pub fn set_short_record(&mut self, value: bool) {
        self.set_flag(Self::SHORT_RECORD_BIT, value);
    }

    pub fn set_id_length_present(&mut self, value: bool) {
        self.set_flag(Self::ID_LENGTH_BIT, value);
    }

    /// ORs the format into bits 0-2. Bits already set stay set.
    pub fn set_type_name_format(&mut self, tnf: TypeNameFormat) {
        self.0 = set_3bit_field(self.0, tnf as u8).unwrap_or(self.0);
    }

    pub fn raw_value(&self) -> u8 {
        self.0
    }
}

/// Type Name Format, the 3-bit classification of a record's type field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeNameFormat {
    Empty = 0,
    NfcForumWellKnownType = 1,
    MediaType = 2,
    AbsoluteUri = 3,
    NfcForumExternalType = 4,
    Unknown = 5,
    Unchanged = 6,
    Reserved = 7,
}

impl TypeNameFormat {
    /// Total over the low three bits; higher bits are ignored.
    pub fn from_bits(value: u8) -> Self {
        match value & 0x07 {
            0 => TypeNameFormat::Empty,
            1 => TypeNameFormat::NfcForumWellKnownType,
            2 => TypeNameFormat::MediaType,
            3 => TypeNameFormat::AbsoluteUri,
            4 => TypeNameFormat::NfcForumExternalType,
            5 => TypeNameFormat::Unknown,
            6 => TypeNameFormat::Unchanged,
            _ => TypeNameFormat::Reserved,
        }
    }
}

/// Single-byte NFC Forum well-known record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WellKnownType {
    #[default]
    None = 0x00,
    Text = 0x54,
    Uri = 0x55,
    SmartPoster1 = 0x53,
    SmartPoster2 = 0x70,
}

impl WellKnownType {
    /// Unrecognized bytes map to `None` rather than failing.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x54 => WellKnownType::Text,
            0x55 => WellKnownType::Uri,
            0x53 => WellKnownType::SmartPoster1,
            0x70 => WellKnownType::SmartPoster2,
            _ => WellKnownType::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WellKnownType::None => "none",
            WellKnownType::Text => "text",
            WellKnownType::Uri => "uri",
            WellKnownType::SmartPoster1 | WellKnownType::SmartPoster2 => "smart-poster",
        }
    }
}

/// TLV block types defined for NFC Forum Type-2 tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TlvBlock {
    Null = 0x00,
    LockControl = 0x01,
    MemoryControl = 0x02,
    NdefMessage = 0x03,
    Proprietary = 0xFD,
    Terminator = 0xFE,
}

impl TlvBlock {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(TlvBlock::Null),
            0x01 => Some(TlvBlock::LockControl),
            0x02 => Some(TlvBlock::MemoryControl),
            0x03 => Some(TlvBlock::NdefMessage),
            0xFD => Some(TlvBlock::Proprietary),
            0xFE => Some(TlvBlock::Terminator),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_flags_from_byte() {
        let header = RecordHeader::new(0xD1);
        assert!(header.message_begin());
        assert!(header.message_end());
        assert!(!header.chunk_flag());
        assert!(header.short_record());
        assert!(!header.id_length_present());
        assert_eq!(header.type_name_format(), TypeNameFormat::NfcForumWellKnownType);
    }

    #[test]
    fn test_single_short_well_known_is_d1() {
        assert_eq!(RecordHeader::single_short_well_known().raw_value(), 0xD1);
    }

    #[test]
    fn test_header_set_and_clear() {
        let mut header = RecordHeader::empty();
        header.set_chunk_flag(true);
        header.set_id_length_present(true);
        assert_eq!(header.raw_value(), 0b0010_1000);

        header.set_chunk_flag(false);
        assert!(!header.chunk_flag());
        assert!(header.id_length_present());
    }

    #[test]
    fn test_type_name_format_is_additive() {
        let mut header = RecordHeader::empty();
        header.set_type_name_format(TypeNameFormat::MediaType);
        header.set_type_name_format(TypeNameFormat::NfcForumWellKnownType);
        assert_eq!(header.type_name_format(), TypeNameFormat::AbsoluteUri);
    }

    #[test]
    fn test_well_known_type_lookup() {
        assert_eq!(WellKnownType::from_u8(0x55), WellKnownType::Uri);
        assert_eq!(WellKnownType::from_u8(0x70), WellKnownType::SmartPoster2);
        assert_eq!(WellKnownType::from_u8(0x41), WellKnownType::None);
    }

    #[test]
    fn test_tlv_block_lookup() {
        assert_eq!(TlvBlock::from_u8(0x03), Some(TlvBlock::NdefMessage));
        assert_eq!(TlvBlock::from_u8(0xFE), Some(TlvBlock::Terminator));
        assert_eq!(TlvBlock::from_u8(0x04), None);
    }
}
