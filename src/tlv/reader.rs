// src/tlv/reader.rs
use super::{LockControl, TlvContainer};
use crate::error::{NdefError, Result};
use crate::record::NdefRecord;
use crate::types::TlvBlock;
use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use tracing::debug;

/// Rejects the three byte length form, reporting its length when readable.
pub(crate) fn check_length_byte(buffer: &[u8], offset: usize) -> Result<usize> {
    let length = buffer[offset];
    if length == TlvContainer::LONG_LENGTH_MARKER {
        let long = buffer
            .get(offset + 1..offset + 3)
            .map_or(0, BigEndian::read_u16);
        return Err(NdefError::UnsupportedTlvLength(long));
    }
    Ok(length as usize)
}

impl TlvContainer {
    /// Decodes a TLV stream that ends with the Terminator TLV.
    ///
    /// The first byte selects the layout (Lock Control or NDEF Message); the
    /// declared message is sliced out and decoded as an [`NdefRecord`]. A
    /// declared size running into the terminator is an error, never a
    /// truncated record.
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        let result = Self::decode_inner(buffer);
        if let Err(ref err) = result {
            debug!(len = buffer.len(), error = %err, "tlv stream rejected");
        }
        result
    }

    fn decode_inner(buffer: &[u8]) -> Result<Self> {
        let Some(&last) = buffer.last() else {
            return Err(NdefError::EmptyBuffer);
        };
        if last != Self::TERMINATOR {
            return Err(NdefError::MissingTerminator { found: last });
        }

        let first = buffer[0];
        let (block, header_size) = match TlvBlock::from_u8(first) {
            Some(TlvBlock::LockControl) => (TlvBlock::LockControl, Self::LOCK_CONTROL_HEADER_SIZE),
            Some(TlvBlock::NdefMessage) => (TlvBlock::NdefMessage, Self::NDEF_HEADER_SIZE),
            _ => return Err(NdefError::UnknownTlvBlock(first)),
        };

        // header plus terminator must be present before sizes can be read
        if buffer.len() < header_size + 1 {
            return Err(NdefError::Truncated {
                needed: header_size + 1,
                found: buffer.len(),
            });
        }

        let length = buffer[1];
        let lock_control = match block {
            TlvBlock::LockControl => {
                let descriptor = [buffer[2], buffer[3], buffer[4]];
                if buffer[5] != TlvBlock::NdefMessage as u8 {
                    debug!(marker = buffer[5], "unexpected ndef marker after lock control");
                }
                Some(LockControl::from_bytes(descriptor))
            }
            _ => None,
        };

        let message_size = check_length_byte(buffer, header_size - 1)?;

        let available = buffer.len() - 1 - header_size;
        if message_size > available {
            return Err(NdefError::TlvOverrun {
                offset: header_size,
                declared: message_size,
                available,
            });
        }

        let message = &buffer[header_size..header_size + message_size];
        let record = NdefRecord::decode(message)?;

        Ok(TlvContainer {
            block,
            length,
            message_size: message_size as u8,
            lock_control,
            record,
            raw: Bytes::copy_from_slice(buffer),
        })
    }
}

impl TryFrom<&[u8]> for TlvContainer {
    type Error = NdefError;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        TlvContainer::decode(buffer)
    }
}
