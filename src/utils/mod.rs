// src/utils/mod.rs
//! Byte-level helpers shared by the record and TLV codecs.

mod bit_field;
mod prefix_match;
mod string_encoding;

pub use bit_field::*;
pub use prefix_match::*;
pub(crate) use string_encoding::*;
