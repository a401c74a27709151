// demos/read_tag_dump.rs
//! Decodes the URI stored in a Type-2 tag memory dump.

use ndef_tlv::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ndef_tlv=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // pages 0-3, then a factory Lock Control TLV wrapping a URI record
    let mut dump = vec![
        0x04, 0xA2, 0x3C, 0x12, 0x6A, 0x41, 0x5C, 0x81,
        0xF6, 0x48, 0x00, 0x00, 0xE1, 0x10, 0x12, 0x00,
        0x01, 0x03, 0xA0, 0xC0, 0x34, 0x03, 0x10,
        0xD1, 0x01, 0x0C, 0x55, 0x04,
    ];
    dump.extend_from_slice(b"example.com");
    dump.push(0xFE);
    dump.resize(160, 0x00);

    match TlvContainer::from_tag_dump(&dump) {
        Ok(tlv) => {
            println!("block: {:?}", tlv.block());
            if let Some(lock) = tlv.lock_control() {
                println!("dynamic lock bytes at 0x{:04X}", lock.byte_address());
            }
            println!("uri: {}", tlv.record().uri());
        }
        Err(err) if err.is_unsupported() => println!("unsupported content: {}", err),
        Err(err) => println!("unreadable tag: {}", err),
    }
}
