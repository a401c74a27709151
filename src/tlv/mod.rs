// src/tlv/mod.rs
//! TLV blocks wrapping an NDEF message in Type-2 tag memory
//!
//! Two layouts are read and written:
//!
//! ```text
//! NDEF Message TLV:  03 L <record ...> FE
//! Lock Control TLV:  01 03 D0 D1 D2 03 L <record ...> FE
//! ```
//!
//! # Examples
//!
//! ```
//! use ndef_tlv::{TlvBlock, TlvContainer, UriIdentifierCode};
//!
//! let tlv = TlvContainer::encode("https://example.com", UriIdentifierCode::Https, TlvBlock::NdefMessage).unwrap();
//! assert_eq!(tlv.raw_bytes()[0], 0x03);
//! assert_eq!(*tlv.raw_bytes().last().unwrap(), 0xFE);
//!
//! let decoded = TlvContainer::decode(tlv.raw_bytes()).unwrap();
//! assert_eq!(decoded.record().uri(), "https://example.com");
//! ```

mod lock_control;
mod reader;
mod tag_dump;
mod writer;

pub use lock_control::LockControl;
pub use tag_dump::{DumpOptions, TagDump};

use crate::record::NdefRecord;
use crate::types::TlvBlock;
use bytes::Bytes;

/// A Lock Control or NDEF Message TLV holding one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvContainer {
    block: TlvBlock,
    length: u8,
    message_size: u8,
    lock_control: Option<LockControl>,
    record: NdefRecord,
    raw: Bytes,
}

impl TlvContainer {
    pub const TERMINATOR: u8 = TlvBlock::Terminator as u8;

    /// Length byte value announcing the three byte length form
    pub const LONG_LENGTH_MARKER: u8 = 0xFF;

    /// Largest message a one byte TLV length can describe
    pub const MESSAGE_SIZE_MAX: usize = 0xFE;

    pub(crate) const NDEF_HEADER_SIZE: usize = 2;
    pub(crate) const LOCK_CONTROL_HEADER_SIZE: usize = 7;

    pub fn block(&self) -> TlvBlock {
        self.block
    }

    /// The block's own length byte. For a Lock Control TLV this is the
    /// descriptor length, not the message size.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Size of the wrapped NDEF message
    pub fn message_size(&self) -> u8 {
        self.message_size
    }

    pub fn lock_control(&self) -> Option<&LockControl> {
        self.lock_control.as_ref()
    }

    pub fn record(&self) -> &NdefRecord {
        &self.record
    }

    pub fn into_record(self) -> NdefRecord {
        self.record
    }

    /// The whole TLV stream, terminator included
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_bytes(self) -> Bytes {
        self.raw
    }
}
