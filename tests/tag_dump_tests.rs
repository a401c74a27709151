// tests/tag_dump_tests.rs
use ndef_tlv::*;

/// NTAG213-sized dump: 16 header bytes then 144 bytes of user memory
fn ntag213_dump(tlv_area: &[u8]) -> Vec<u8> {
    let mut dump = vec![
        0x04, 0xA2, 0x3C, 0x12,
        0x6A, 0x41, 0x5C, 0x81,
        0xF6, 0x48, 0x00, 0x00,
        0xE1, 0x10, 0x12, 0x00,
    ];
    dump.extend_from_slice(tlv_area);
    dump.resize(16 + 144, 0x00);
    dump
}

#[test]
fn test_read_written_tag() {
    let payload = TlvContainer::encode("https://example.com/a", UriIdentifierCode::Https, TlvBlock::NdefMessage).unwrap();
    let dump = ntag213_dump(payload.raw_bytes());

    let tlv = TlvContainer::from_tag_dump(&dump).unwrap();
    assert_eq!(tlv.record().uri(), "https://example.com/a");
}

#[test]
fn test_read_factory_lock_control_layout() {
    let payload = TlvContainer::encode("urn:nfc:sn:1234", UriIdentifierCode::Urn, TlvBlock::LockControl).unwrap();
    let dump = ntag213_dump(payload.raw_bytes());

    let tlv = TlvContainer::from_tag_dump(&dump).unwrap();
    assert_eq!(tlv.block(), TlvBlock::LockControl);
    assert_eq!(tlv.record().identifier(), UriIdentifierCode::UrnNfc);
    assert_eq!(tlv.record().uri(), "urn:nfc:sn:1234");
}

#[test]
fn test_blank_tag() {
    let err = TlvContainer::from_tag_dump(&ntag213_dump(&[0x03, 0x00, 0xFE])).unwrap_err();
    assert_eq!(err, NdefError::Truncated { needed: 4, found: 0 });

    let err = TlvContainer::from_tag_dump(&ntag213_dump(&[])).unwrap_err();
    assert_eq!(err, NdefError::EmptyBuffer);
}

#[test]
fn test_dump_view_accessors() {
    let payload = encode_uri("http://a.b", UriIdentifierCode::Http).unwrap();
    let dump = ntag213_dump(&payload);
    let options = DumpOptions::default();

    let view = TagDump::new(&dump, &options).unwrap();
    assert_eq!(view.header().len(), TYPE2_HEADER_SIZE);
    assert_eq!(view.header()[12], 0xE1);
    assert_eq!(view.tlv_area().len(), 144);
    assert_eq!(view.tlv_stream(&options).unwrap(), payload.as_slice());
}

#[test]
fn test_message_running_past_memory() {
    let mut area = vec![0x03, 0xF0, 0xD1, 0x01];
    area.resize(144, 0x00);
    let err = TlvContainer::from_tag_dump(&ntag213_dump(&area)).unwrap_err();
    assert!(matches!(err, NdefError::TlvOverrun { declared: 0xF0, .. }));
}
