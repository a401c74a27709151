// src/lib.rs
//! # ndef-tlv
//!
//! A codec for NFC Forum NDEF URI records and the Type-2 tag TLV blocks that
//! wrap them. It turns the bytes read from a tag into a URI, and a URI into
//! the bytes to write back. Talking to the reader is left to the caller.
//!
//! ## Features
//!
//! - **Bit-exact headers**: record flags and Type Name Format through one shared layout
//! - **URI abbreviation**: longest-prefix match against the NFC Forum URI identifier table
//! - **TLV framing**: NDEF Message and Lock Control TLVs with terminator checks
//! - **Tag dumps**: locate and decode the NDEF message in a raw Type-2 memory dump
//! - **Typed failures**: structural, unsupported and encoding errors are told apart
//!
//! ## Quick Start
//!
//! ### Writing a URI
//!
//! ```rust
//! use ndef_tlv::*;
//!
//! fn main() -> Result<()> {
//!     let tlv = TlvContainer::encode(
//!         "https://example.com",
//!         UriIdentifierCode::Https,
//!         TlvBlock::NdefMessage,
//!     )?;
//!
//!     // hand these to the transport
//!     let bytes = tlv.raw_bytes();
//!     assert_eq!(bytes[0], 0x03);
//!     assert_eq!(bytes[bytes.len() - 1], 0xFE);
//!     Ok(())
//! }
//! ```
//!
//! ### Reading a URI
//!
//! ```rust
//! use ndef_tlv::*;
//!
//! fn main() -> Result<()> {
//!     let bytes = [0x03, 0x09, 0xD1, 0x01, 0x05, 0x55, 0x04, b'e', b'x', b'a', b'm', 0xFE];
//!     let tlv = TlvContainer::decode(&bytes)?;
//!     assert_eq!(tlv.record().uri(), "https://exam");
//!     Ok(())
//! }
//! ```
//!
//! ### Handling failures
//!
//! ```rust
//! use ndef_tlv::*;
//!
//! // a Text record: well formed, but not decoded by this crate
//! let bytes = [0x03, 0x07, 0xD1, 0x01, 0x03, 0x54, 0x02, b'e', b'n', 0xFE];
//! match decode_uri(&bytes) {
//!     Ok(uri) => println!("{}", uri),
//!     Err(err) if err.kind() == ErrorKind::Unsupported => println!("skipping: {}", err),
//!     Err(err) => println!("bad tag data: {}", err),
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod utils;
pub mod uri;
pub mod record;
pub mod tlv;

// Re-export commonly used types at the crate root for convenience
pub use error::{ErrorKind, NdefError, Result, UnsupportedRecord};

pub use types::{
    RecordHeader,
    TlvBlock,
    TypeNameFormat,
    WellKnownType,
};

pub use uri::UriIdentifierCode;

pub use record::NdefRecord;

pub use tlv::{
    DumpOptions,
    LockControl,
    TagDump,
    TlvContainer,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use ndef_tlv::prelude::*;
    //! ```

    pub use crate::error::{ErrorKind, NdefError, Result};
    pub use crate::record::NdefRecord;
    pub use crate::tlv::TlvContainer;
    pub use crate::types::{TlvBlock, WellKnownType};
    pub use crate::uri::UriIdentifierCode;
}

/// Size of the capability-container header in front of the TLV area of a Type-2 tag
pub const TYPE2_HEADER_SIZE: usize = TagDump::TYPE2_HEADER_SIZE;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decodes a TLV stream and returns the URI of the record inside.
pub fn decode_uri(tlv_bytes: &[u8]) -> Result<String> {
    TlvContainer::decode(tlv_bytes).map(|tlv| tlv.into_record().uri().to_string())
}

/// Encodes `uri` into an NDEF Message TLV ready to write.
pub fn encode_uri(uri: &str, hint: UriIdentifierCode) -> Result<Vec<u8>> {
    TlvContainer::encode(uri, hint, TlvBlock::NdefMessage).map(|tlv| tlv.into_bytes().to_vec())
}
