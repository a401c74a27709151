// src/utils/string_encoding.rs
use crate::error::{NdefError, Result};

/// UTF-8 helpers for the text part of a URI field. Decoding is strict.
pub fn encode_uri_text(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

pub fn decode_uri_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| NdefError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_malformed_utf8() {
        assert_eq!(decode_uri_text(&[0x66, 0xFF, 0x6F]), Err(NdefError::InvalidUtf8));
        assert_eq!(decode_uri_text("ä.example".as_bytes()).unwrap(), "ä.example");
        assert_eq!(encode_uri_text("ab"), vec![b'a', b'b']);
    }
}
