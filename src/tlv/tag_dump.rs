// src/tlv/tag_dump.rs
use super::reader::check_length_byte;
use super::TlvContainer;
use crate::error::{NdefError, Result};
use crate::types::TlvBlock;
use tracing::{debug, trace};

/// Options for locating the TLV area in a tag memory dump
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Bytes preceding the TLV area (UID, lock bytes, capability container)
    pub header_size: usize,
    /// Skip NULL TLVs in front of the first block
    pub skip_null_tlvs: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            header_size: TagDump::TYPE2_HEADER_SIZE,
            skip_null_tlvs: true,
        }
    }
}

impl DumpOptions {
    pub fn with_header_size(mut self, header_size: usize) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn with_skip_null_tlvs(mut self, skip: bool) -> Self {
        self.skip_null_tlvs = skip;
        self
    }
}

/// A full memory dump of a Type-2 tag
///
/// The first pages hold the UID, static lock bytes and the capability
/// container; the TLV area starts right after them.
#[derive(Debug, Clone, Copy)]
pub struct TagDump<'a> {
    header: &'a [u8],
    tlv_area: &'a [u8],
}

impl<'a> TagDump<'a> {
    /// Pages 0-3 of a Type-2 tag
    pub const TYPE2_HEADER_SIZE: usize = 16;

    pub fn new(dump: &'a [u8], options: &DumpOptions) -> Result<Self> {
        if dump.len() <= options.header_size {
            return Err(NdefError::Truncated {
                needed: options.header_size + 1,
                found: dump.len(),
            });
        }

        let (header, tlv_area) = dump.split_at(options.header_size);
        Ok(TagDump { header, tlv_area })
    }

    pub fn header(&self) -> &'a [u8] {
        self.header
    }

    pub fn tlv_area(&self) -> &'a [u8] {
        self.tlv_area
    }

    /// Returns the first TLV block through its terminator.
    ///
    /// The block's extent comes from its declared lengths and the Terminator
    /// TLV must sit right after it; a stray `FE` inside the payload is never
    /// taken for the end.
    pub fn tlv_stream(&self, options: &DumpOptions) -> Result<&'a [u8]> {
        let area = self.tlv_area;

        let start = if options.skip_null_tlvs {
            area.iter()
                .position(|&b| b != TlvBlock::Null as u8)
                .ok_or(NdefError::EmptyBuffer)?
        } else {
            0
        };
        trace!(start, "first tlv block");

        let first = area[start];
        let header_size = match TlvBlock::from_u8(first) {
            Some(TlvBlock::NdefMessage) => TlvContainer::NDEF_HEADER_SIZE,
            Some(TlvBlock::LockControl) => TlvContainer::LOCK_CONTROL_HEADER_SIZE,
            _ => return Err(NdefError::UnknownTlvBlock(first)),
        };

        let block = &area[start..];
        if block.len() < header_size {
            return Err(NdefError::Truncated {
                needed: header_size,
                found: block.len(),
            });
        }

        let message_size = check_length_byte(block, header_size - 1)?;
        let end = header_size + message_size;
        if end >= block.len() {
            return Err(NdefError::TlvOverrun {
                offset: start + header_size,
                declared: message_size,
                available: block.len() - header_size,
            });
        }

        let found = block[end];
        if found != TlvContainer::TERMINATOR {
            return Err(NdefError::MissingTerminator { found });
        }

        Ok(&block[..=end])
    }

    /// Locates and decodes the TLV stream of a tag memory dump.
    pub fn parse(dump: &[u8], options: &DumpOptions) -> Result<TlvContainer> {
        let stream = TagDump::new(dump, options)?.tlv_stream(options);
        match stream {
            Ok(stream) => TlvContainer::decode(stream),
            Err(err) => {
                debug!(len = dump.len(), error = %err, "no tlv stream in tag dump");
                Err(err)
            }
        }
    }
}

impl TlvContainer {
    /// Decodes the TLV stream of a Type-2 tag dump with default options.
    pub fn from_tag_dump(dump: &[u8]) -> Result<Self> {
        TagDump::parse(dump, &DumpOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::UriIdentifierCode;

    fn dump_with(tlv_area: &[u8]) -> Vec<u8> {
        let mut dump = vec![
            0x04, 0x5F, 0x2A, 0xF9, // UID
            0x12, 0x34, 0x56, 0x80, // UID / internal
            0xB6, 0x48, 0x00, 0x00, // static lock bytes
            0xE1, 0x10, 0x6D, 0x00, // capability container
        ];
        dump.extend_from_slice(tlv_area);
        dump.resize(dump.len() + 16, 0x00);
        dump
    }

    #[test]
    fn test_parse_ndef_message_dump() {
        let tlv = TlvContainer::encode("https://example.com", UriIdentifierCode::Https, TlvBlock::NdefMessage).unwrap();
        let dump = dump_with(tlv.raw_bytes());

        let parsed = TlvContainer::from_tag_dump(&dump).unwrap();
        assert_eq!(parsed.record().uri(), "https://example.com");
        assert_eq!(parsed.raw_bytes(), tlv.raw_bytes());
    }

    #[test]
    fn test_parse_lock_control_dump_with_null_padding() {
        let tlv = TlvContainer::encode("tel:+15551234", UriIdentifierCode::UnAbridged, TlvBlock::LockControl).unwrap();
        let mut area = vec![0x00, 0x00];
        area.extend_from_slice(tlv.raw_bytes());
        let dump = dump_with(&area);

        let parsed = TlvContainer::from_tag_dump(&dump).unwrap();
        assert_eq!(parsed.block(), TlvBlock::LockControl);
        assert_eq!(parsed.record().uri(), "tel:+15551234");

        let strict = DumpOptions::default().with_skip_null_tlvs(false);
        assert_eq!(
            TagDump::parse(&dump, &strict),
            Err(NdefError::UnknownTlvBlock(0x00))
        );
    }

    #[test]
    fn test_terminator_inside_payload_is_not_the_end() {
        // identifier 0xFE is RFU; the stray FE must not end the stream
        let record = [0xD1, 0x01, 0x02, 0x55, 0xFE, b'x'];
        let mut area = vec![0x03, record.len() as u8];
        area.extend_from_slice(&record);
        area.push(0xFE);

        let parsed = TlvContainer::from_tag_dump(&dump_with(&area)).unwrap();
        assert_eq!(parsed.record().uri(), "RFUx");
    }

    #[test]
    fn test_dump_errors() {
        assert_eq!(
            TlvContainer::from_tag_dump(&[0u8; 16]),
            Err(NdefError::Truncated { needed: 17, found: 16 })
        );
        assert_eq!(
            TlvContainer::from_tag_dump(&dump_with(&[])),
            Err(NdefError::EmptyBuffer)
        );
        assert_eq!(
            TlvContainer::from_tag_dump(&dump_with(&[0x03, 0x03, 0xD1, 0x01, 0x00, 0x55])),
            Err(NdefError::MissingTerminator { found: 0x55 })
        );
    }

    #[test]
    fn test_custom_header_size() {
        let tlv = TlvContainer::encode("http://a.b", UriIdentifierCode::Http, TlvBlock::NdefMessage).unwrap();
        let mut dump = vec![0xAA; 4];
        dump.extend_from_slice(tlv.raw_bytes());

        let options = DumpOptions::default().with_header_size(4);
        let view = TagDump::new(&dump, &options).unwrap();
        assert_eq!(view.header(), &[0xAA; 4]);
        assert_eq!(view.tlv_stream(&options).unwrap(), tlv.raw_bytes());
        assert_eq!(TagDump::parse(&dump, &options).unwrap().record().uri(), "http://a.b");
    }
}
