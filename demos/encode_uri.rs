// demos/encode_uri.rs
//! Prints the bytes to write to a tag for a URI.
//!
//! cargo run --example encode_uri -- https://example.com

use ndef_tlv::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ndef_tlv=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let uri = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    for block in [TlvBlock::NdefMessage, TlvBlock::LockControl] {
        let tlv = TlvContainer::encode(&uri, UriIdentifierCode::Https, block)?;
        let hex: Vec<String> = tlv.raw_bytes().iter().map(|b| format!("{:02X}", b)).collect();
        println!("{:?} ({}): {}", block, tlv.record().identifier(), hex.join(" "));
    }

    Ok(())
}
