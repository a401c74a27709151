// src/tlv/writer.rs
use super::{LockControl, TlvContainer};
use crate::error::{NdefError, Result};
use crate::record::NdefRecord;
use crate::types::TlvBlock;
use crate::uri::UriIdentifierCode;
use bytes::{BufMut, BytesMut};
use smallvec::SmallVec;
use tracing::debug;

impl TlvContainer {
    /// Encodes `uri` as a URI record and wraps it for writing to a tag.
    ///
    /// The result is `header + record + FE`, ready to be written verbatim.
    /// `block` selects the header: `NdefMessage` gives `03 L`, `LockControl`
    /// gives `01 03 A0 C0 34 03 L`.
    pub fn encode(uri: &str, hint: UriIdentifierCode, block: TlvBlock) -> Result<Self> {
        let record = NdefRecord::uri_record(uri, hint)?;
        Self::wrap(record, block)
    }

    /// Wraps an already encoded record.
    ///
    /// # Errors
    ///
    /// - [`NdefError::RecordTooLarge`] if the record needs the three byte length form
    /// - [`NdefError::InvalidArgument`] for blocks other than Lock Control and NDEF Message
    pub fn wrap(record: NdefRecord, block: TlvBlock) -> Result<Self> {
        let size = record.raw_bytes().len();
        if size == 0 {
            return Err(NdefError::InvalidArgument("empty record".to_string()));
        }
        if size > Self::MESSAGE_SIZE_MAX {
            debug!(size, "record does not fit a one byte tlv length");
            return Err(NdefError::RecordTooLarge(size));
        }
        let message_size = size as u8;

        let mut header: SmallVec<[u8; 7]> = SmallVec::new();
        let lock_control = match block {
            TlvBlock::NdefMessage => None,
            TlvBlock::LockControl => {
                let lock = LockControl::default();
                header.push(TlvBlock::LockControl as u8);
                header.push(LockControl::LENGTH);
                header.extend_from_slice(&lock.to_bytes());
                Some(lock)
            }
            other => {
                return Err(NdefError::InvalidArgument(format!(
                    "cannot wrap a record in a {:?} TLV",
                    other
                )))
            }
        };
        header.push(TlvBlock::NdefMessage as u8);
        header.push(message_size);

        let length = header[1];

        let mut raw = BytesMut::with_capacity(header.len() + size + 1);
        raw.put_slice(&header);
        raw.put_slice(record.raw_bytes());
        raw.put_u8(Self::TERMINATOR);

        Ok(TlvContainer {
            block,
            length,
            message_size,
            lock_control,
            record,
            raw: raw.freeze(),
        })
    }
}
