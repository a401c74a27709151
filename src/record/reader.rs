// src/record/reader.rs
use super::NdefRecord;
use crate::error::{NdefError, Result, UnsupportedRecord};
use crate::types::{RecordHeader, WellKnownType};
use crate::uri::{self, UriIdentifierCode};
use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use tracing::debug;

impl NdefRecord {
    /// Decodes one short URI record occupying the whole of `buffer`.
    ///
    /// Structural problems (too short, payload length not matching the bytes
    /// that follow the header) and records this codec does not decode (long,
    /// chunked, with ID, non-URI) come back as distinct errors; see
    /// [`NdefError::kind`].
    ///
    /// # Example
    ///
    /// ```
    /// use ndef_tlv::NdefRecord;
    ///
    /// let record = NdefRecord::decode(&[0xD1, 0x01, 0x05, 0x55, 0x04, b'e', b'x', b'a', b'm']).unwrap();
    /// assert_eq!(record.uri(), "https://exam");
    /// ```
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        let result = Self::decode_inner(buffer);
        if let Err(ref err) = result {
            debug!(len = buffer.len(), error = %err, "ndef record rejected");
        }
        result
    }

    fn decode_inner(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < Self::HEADER_SIZE {
            return Err(NdefError::Truncated {
                needed: Self::HEADER_SIZE,
                found: buffer.len(),
            });
        }

        let header = RecordHeader::new(buffer[0]);

        if !header.short_record() {
            // long records carry a 4 byte big-endian payload length
            let payload_length = buffer.get(2..6).map(BigEndian::read_u32);
            return Err(UnsupportedRecord::LongRecord { payload_length }.into());
        }
        if header.chunk_flag() {
            return Err(UnsupportedRecord::Chunked.into());
        }
        if header.id_length_present() {
            return Err(UnsupportedRecord::IdLengthPresent.into());
        }

        let type_length = buffer[1];
        if type_length != 1 {
            return Err(UnsupportedRecord::TypeLength(type_length).into());
        }

        let payload_length = buffer[2] as usize;
        let record_type = WellKnownType::from_u8(buffer[3]);

        let available = buffer.len() - Self::HEADER_SIZE;
        if payload_length != available {
            return Err(NdefError::LengthMismatch {
                declared: payload_length,
                available,
            });
        }

        let payload = Bytes::copy_from_slice(&buffer[Self::HEADER_SIZE..]);

        if record_type != WellKnownType::Uri {
            return Err(UnsupportedRecord::RecordType(buffer[3]).into());
        }

        let uri = uri::expand(&payload)?;
        let identifier = payload
            .first()
            .map_or(UriIdentifierCode::UnAbridged, |&code| UriIdentifierCode::from_u8(code));

        Ok(NdefRecord {
            header,
            type_length,
            record_type,
            identifier,
            payload,
            uri,
            raw: Bytes::copy_from_slice(buffer),
        })
    }
}

impl TryFrom<&[u8]> for NdefRecord {
    type Error = NdefError;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        NdefRecord::decode(buffer)
    }
}
