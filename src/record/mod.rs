// src/record/mod.rs
//! Single short NDEF records
//!
//! A record is built either by decoding the bytes read from a tag
//! ([`NdefRecord::decode`]) or by encoding a URI for writing
//! ([`NdefRecord::encode`]). Both produce the same immutable value; the wire
//! layout is
//!
//! ```text
//! +--------+-------------+----------------+------+-----------------+
//! | header | type length | payload length | type | payload ...     |
//! +--------+-------------+----------------+------+-----------------+
//!     0          1               2            3     4 ..
//! ```

mod reader;
mod writer;

use crate::types::{RecordHeader, TypeNameFormat, WellKnownType};
use crate::uri::UriIdentifierCode;
use bytes::Bytes;

/// A decoded or freshly encoded short NDEF record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    header: RecordHeader,
    type_length: u8,
    record_type: WellKnownType,
    identifier: UriIdentifierCode,
    payload: Bytes,
    uri: String,
    raw: Bytes,
}

impl NdefRecord {
    /// Header, type length, payload length and one type byte
    pub const HEADER_SIZE: usize = 4;
    pub const PAYLOAD_LENGTH_MAX: usize = 256;
    /// Largest payload a one-byte length field can describe
    pub const SHORT_PAYLOAD_MAX: usize = 255;

    pub fn header(&self) -> RecordHeader {
        self.header
    }

    pub fn type_name_format(&self) -> TypeNameFormat {
        self.header.type_name_format()
    }

    pub fn type_length(&self) -> u8 {
        self.type_length
    }

    pub fn record_type(&self) -> WellKnownType {
        self.record_type
    }

    /// The URI identifier byte at the head of the payload
    pub fn identifier(&self) -> UriIdentifierCode {
        self.identifier
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn payload_length(&self) -> usize {
        self.payload.len()
    }

    /// The full URI, prefix expanded
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The record exactly as it appears on the wire
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_bytes(self) -> Bytes {
        self.raw
    }
}
