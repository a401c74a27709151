// src/error.rs
use thiserror::Error;

/// Why a record was rejected as not representable by this codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedRecord {
    /// SR flag clear; carries the 4-byte payload length when it was readable
    LongRecord { payload_length: Option<u32> },
    /// CF flag set
    Chunked,
    /// IL flag set
    IdLengthPresent,
    /// Well-known types are a single byte
    TypeLength(u8),
    /// Only URI records are decoded
    RecordType(u8),
}

impl std::fmt::Display for UnsupportedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedRecord::LongRecord { payload_length: Some(len) } => {
                write!(f, "long record with {} byte payload", len)
            }
            UnsupportedRecord::LongRecord { payload_length: None } => write!(f, "long record"),
            UnsupportedRecord::Chunked => write!(f, "chunked record"),
            UnsupportedRecord::IdLengthPresent => write!(f, "record with ID field"),
            UnsupportedRecord::TypeLength(len) => write!(f, "type length {}", len),
            UnsupportedRecord::RecordType(t) => write!(f, "record type 0x{:02X}", t),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NdefError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty buffer")]
    EmptyBuffer,

    #[error("Truncated buffer: need at least {needed} bytes, found {found}")]
    Truncated { needed: usize, found: usize },

    #[error("Payload length mismatch: header declares {declared} bytes, buffer holds {available}")]
    LengthMismatch { declared: usize, available: usize },

    #[error("Missing terminator TLV: last byte is 0x{found:02X}")]
    MissingTerminator { found: u8 },

    #[error("Unknown TLV block type: 0x{0:02X}")]
    UnknownTlvBlock(u8),

    #[error("TLV overrun: block declares {declared} bytes at offset {offset}, only {available} available")]
    TlvOverrun { offset: usize, declared: usize, available: usize },

    #[error("Unsupported TLV length form: 0xFF marker with {0} byte length")]
    UnsupportedTlvLength(u16),

    #[error("Unsupported record: {0}")]
    UnsupportedRecord(UnsupportedRecord),

    #[error("Invalid UTF-8 in URI field")]
    InvalidUtf8,

    #[error("Payload too large: {0} bytes exceeds the short record limit of 255")]
    PayloadTooLarge(usize),

    #[error("Record too large: {0} bytes does not fit a one byte TLV length")]
    RecordTooLarge(usize),
}

/// Coarse classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: bad lengths, missing terminator, unknown block
    Structural,
    /// Well-formed input this codec does not decode
    Unsupported,
    /// Text or size problems while building or decoding a field
    Encoding,
}

impl NdefError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NdefError::UnsupportedRecord(_) | NdefError::UnsupportedTlvLength(_) => {
                ErrorKind::Unsupported
            }
            NdefError::InvalidUtf8
            | NdefError::PayloadTooLarge(_)
            | NdefError::RecordTooLarge(_) => ErrorKind::Encoding,
            NdefError::InvalidArgument(_)
            | NdefError::EmptyBuffer
            | NdefError::Truncated { .. }
            | NdefError::LengthMismatch { .. }
            | NdefError::MissingTerminator { .. }
            | NdefError::UnknownTlvBlock(_)
            | NdefError::TlvOverrun { .. } => ErrorKind::Structural,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }
}

impl From<UnsupportedRecord> for NdefError {
    fn from(reason: UnsupportedRecord) -> Self {
        NdefError::UnsupportedRecord(reason)
    }
}

pub type Result<T> = std::result::Result<T, NdefError>;
