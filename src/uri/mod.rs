// src/uri/mod.rs
//! URI record payloads
//!
//! A URI payload is one identifier byte followed by the UTF-8 remainder of
//! the URI. The identifier byte stands in for a well-known scheme prefix:
//!
//! ```
//! use ndef_tlv::uri::{abbreviate, expand, UriIdentifierCode};
//!
//! let (code, rest) = abbreviate("https://example.com", UriIdentifierCode::Https);
//! assert_eq!(code, UriIdentifierCode::Https);
//! assert_eq!(rest, "example.com");
//!
//! let payload = [&[0x04][..], b"example.com"].concat();
//! assert_eq!(expand(&payload).unwrap(), "https://example.com");
//! ```

mod identifier;

pub use identifier::UriIdentifierCode;

use crate::error::Result;
use crate::utils::decode_uri_text;
use tracing::trace;

/// Decodes a URI record payload into the full URI.
///
/// An empty payload yields an empty string. Malformed UTF-8 is an error.
pub fn expand(payload: &[u8]) -> Result<String> {
    let Some((&code, text)) = payload.split_first() else {
        return Ok(String::new());
    };

    let code = UriIdentifierCode::from_u8(code);
    let text = decode_uri_text(text)?;

    let mut uri = String::with_capacity(code.prefix().len() + text.len());
    uri.push_str(code.prefix());
    uri.push_str(&text);
    Ok(uri)
}

/// Picks the identifier code for `uri` and returns it with the remainder
/// left to encode.
///
/// Abbreviation only happens when `hint` is protocol-bearing. In that case the
/// code actually used is the longest matching prefix of `uri`, which may differ
/// from the hint; if nothing matches the URI is kept whole.
pub fn abbreviate(uri: &str, hint: UriIdentifierCode) -> (UriIdentifierCode, &str) {
    if !hint.is_protocol_bearing() {
        return (UriIdentifierCode::UnAbridged, uri);
    }

    let code = UriIdentifierCode::longest_match(uri);
    trace!(%hint, %code, "abbreviating uri");

    // the prefix matched byte-for-byte, so its length is a char boundary
    let rest = uri.get(code.prefix().len()..).unwrap_or(uri);
    (code, rest)
}
