// src/record/writer.rs
use super::NdefRecord;
use crate::error::{NdefError, Result};
use crate::types::{RecordHeader, WellKnownType};
use crate::uri::{self, UriIdentifierCode};
use crate::utils::encode_uri_text;
use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

impl NdefRecord {
    /// Encodes `uri` as a lone short well-known record (MB, ME, SR, TNF 1).
    ///
    /// `hint` decides whether the URI is abbreviated: a protocol-bearing hint
    /// makes the encoder strip the longest matching scheme prefix and store its
    /// code, anything else stores the whole URI under code 0. `record_type`
    /// is written as the type byte.
    ///
    /// # Errors
    ///
    /// [`NdefError::PayloadTooLarge`] when the payload does not fit a one
    /// byte length.
    ///
    /// # Example
    ///
    /// ```
    /// use ndef_tlv::{NdefRecord, UriIdentifierCode, WellKnownType};
    ///
    /// let record = NdefRecord::encode("https://example.com", UriIdentifierCode::Https, WellKnownType::Uri).unwrap();
    /// assert_eq!(record.payload()[0], 0x04);
    /// assert_eq!(&record.payload()[1..], b"example.com");
    /// ```
    pub fn encode(
        uri: &str,
        hint: UriIdentifierCode,
        record_type: WellKnownType,
    ) -> Result<Self> {
        let (identifier, rest) = uri::abbreviate(uri, hint);
        let text = encode_uri_text(rest);

        let payload_length = text.len() + 1;
        if payload_length > Self::SHORT_PAYLOAD_MAX {
            debug!(payload_length, "uri payload does not fit a short record");
            return Err(NdefError::PayloadTooLarge(payload_length));
        }

        let mut payload = BytesMut::with_capacity(payload_length);
        payload.put_u8(identifier.as_u8());
        payload.put_slice(&text);
        let payload = payload.freeze();

        let header = RecordHeader::single_short_well_known();
        let type_length = 1u8;

        let mut raw = BytesMut::with_capacity(Self::HEADER_SIZE + payload_length);
        raw.put_u8(header.raw_value());
        raw.put_u8(type_length);
        raw.put_u8(payload_length as u8);
        raw.put_u8(record_type as u8);
        raw.put_slice(&payload);

        Ok(NdefRecord {
            header,
            type_length,
            record_type,
            identifier,
            payload,
            uri: uri.to_string(),
            raw: raw.freeze(),
        })
    }

    /// Encodes a URI record; shorthand for `encode(uri, hint, WellKnownType::Uri)`.
    pub fn uri_record(uri: &str, hint: UriIdentifierCode) -> Result<Self> {
        Self::encode(uri, hint, WellKnownType::Uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unabridged() {
        let record = NdefRecord::uri_record("https://example.com", UriIdentifierCode::UnAbridged).unwrap();

        let mut expected_payload = vec![0x00];
        expected_payload.extend_from_slice(b"https://example.com");
        assert_eq!(record.payload(), expected_payload.as_slice());
        assert_eq!(record.identifier(), UriIdentifierCode::UnAbridged);
        assert_eq!(record.raw_bytes()[..4], [0xD1, 0x01, 20, 0x55]);
    }

    #[test]
    fn test_encode_abbreviated() {
        let record = NdefRecord::uri_record("https://example.com", UriIdentifierCode::Https).unwrap();

        let mut expected_payload = vec![0x04];
        expected_payload.extend_from_slice(b"example.com");
        assert_eq!(record.payload(), expected_payload.as_slice());
        assert_eq!(record.payload_length(), 12);
        assert_eq!(record.raw_bytes().len(), 16);
        assert_eq!(record.raw_bytes()[2], 12);
        assert_eq!(record.uri(), "https://example.com");
    }

    #[test]
    fn test_encode_bare_hint_never_strips() {
        let record = NdefRecord::uri_record("tel:+15551234", UriIdentifierCode::Tel).unwrap();
        assert_eq!(record.identifier(), UriIdentifierCode::UnAbridged);
        assert_eq!(&record.payload()[1..], b"tel:+15551234");
    }

    #[test]
    fn test_encode_with_other_record_type() {
        let record = NdefRecord::encode("http://a.b", UriIdentifierCode::Http, WellKnownType::SmartPoster1).unwrap();
        assert_eq!(record.record_type(), WellKnownType::SmartPoster1);
        assert_eq!(record.raw_bytes()[3], 0x53);
    }

    #[test]
    fn test_encode_payload_boundary() {
        let fits = "a".repeat(254);
        let record = NdefRecord::uri_record(&fits, UriIdentifierCode::UnAbridged).unwrap();
        assert_eq!(record.raw_bytes()[2], 255);
        assert_eq!(record.raw_bytes().len(), 259);

        let too_long = "a".repeat(255);
        assert_eq!(
            NdefRecord::uri_record(&too_long, UriIdentifierCode::UnAbridged),
            Err(NdefError::PayloadTooLarge(256))
        );
    }

    #[test]
    fn test_encode_then_decode() {
        let uri = "urn:epc:id:sgtin:0614141.107346.2017";
        let encoded = NdefRecord::uri_record(uri, UriIdentifierCode::Urn).unwrap();
        assert_eq!(encoded.identifier(), UriIdentifierCode::UrnEpcId);

        let decoded = NdefRecord::decode(encoded.raw_bytes()).unwrap();
        assert_eq!(decoded.uri(), uri);
        assert_eq!(decoded, encoded);
    }
}
