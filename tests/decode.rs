//! Document structure: headers, CRCs, segment chaining, and error paths.

mod common;

use std::io::Cursor;

use common::FileBuilder;
use pignon::{DecodeOptions, Decoder, Error, Value};

#[test]
fn empty_document() {
    let data = FileBuilder::new().build();
    let mut decoder = Decoder::new(Cursor::new(data)).unwrap();
    assert_eq!(decoder.protocol_version(), 0x10);
    assert_eq!(decoder.profile_version(), 0x086B);
    assert!(decoder.next_message().unwrap().is_none());
    // Terminal state is sticky.
    assert!(decoder.next_message().unwrap().is_none());
}

#[test]
fn twelve_byte_header() {
    let data = FileBuilder::new()
        .short_header()
        .definition(0, 20, &[(3, 1, 0x02)])
        .data(0, &[150])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "record");
}

#[test]
fn zero_header_crc_is_accepted() {
    let data = FileBuilder::new().zero_header_crc().build();
    assert!(pignon::decode_slice(&data).unwrap().is_empty());
}

#[test]
fn bad_signature() {
    let mut data = FileBuilder::new().build();
    data[8] = b'X';
    assert!(matches!(pignon::decode_slice(&data), Err(Error::BadSignature)));
}

#[test]
fn bad_header_size() {
    let mut data = FileBuilder::new().build();
    data[0] = 13;
    assert!(matches!(
        pignon::decode_slice(&data),
        Err(Error::BadHeaderSize(13))
    ));
}

#[test]
fn header_crc_mismatch() {
    let mut data = FileBuilder::new().build();
    data[12] ^= 0xFF;
    assert!(matches!(
        pignon::decode_slice(&data),
        Err(Error::CrcMismatch { .. })
    ));
}

fn record_file() -> Vec<u8> {
    FileBuilder::new()
        .definition(0, 20, &[(253, 4, 0x86), (3, 1, 0x02)])
        .data(0, &[0xE8, 0x03, 0x00, 0x00, 150])
        .build()
}

#[test]
fn trailer_crc_corruption() {
    let good = record_file();
    assert_eq!(pignon::decode_slice(&good).unwrap().len(), 1);

    let mut bad = good.clone();
    let index = bad.len() - 3; // Last payload byte of the data region.
    bad[index] ^= 0x01;
    assert!(matches!(
        pignon::decode_slice(&bad),
        Err(Error::CrcMismatch { .. })
    ));

    // The same corruption decodes when verification is off.
    let options = DecodeOptions::default().verify_crc(false);
    let mut decoder = Decoder::with_options(Cursor::new(bad), options).unwrap();
    assert_eq!(decoder.read_all().unwrap().len(), 1);
}

#[test]
fn unknown_local_tag() {
    let data = FileBuilder::new().data(3, &[]).build();
    assert!(matches!(
        pignon::decode_slice(&data),
        Err(Error::UnknownLocalTag(3))
    ));
}

#[test]
fn truncated_input() {
    let data = record_file();
    let result = pignon::decode_slice(&data[..data.len() - 4]);
    assert!(matches!(result, Err(Error::TruncatedInput)));
}

#[test]
fn record_overrunning_data_region() {
    let mut data = record_file();
    let records_len = u32::from_le_bytes(data[4..8].try_into().unwrap());
    data[4..8].copy_from_slice(&(records_len - 1).to_le_bytes());
    let options = DecodeOptions::default().verify_crc(false);
    let mut decoder = Decoder::with_options(Cursor::new(data), options).unwrap();
    assert!(matches!(decoder.read_all(), Err(Error::TruncatedInput)));
}

#[test]
fn zero_sized_field_is_invalid() {
    let data = FileBuilder::new()
        .definition(0, 20, &[(3, 0, 0x02)])
        .build();
    assert!(matches!(
        pignon::decode_slice(&data),
        Err(Error::InvalidDefinition {
            global: 20,
            field: 3,
            size: 0
        })
    ));
}

#[test]
fn unknown_message_number() {
    let data = FileBuilder::new()
        .definition(0, 0xFFFE, &[(0, 2, 0x84), (1, 1, 0x02)])
        .data(0, &[0x34, 0x12, 7])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(messages.len(), 1);
    let message = &messages[0];
    assert_eq!(message.name, "unknown_65534");
    assert_eq!(message.num, 0xFFFE);
    assert_eq!(message.value("unknown_0"), Some(&Value::UInt16(0x1234)));
    assert_eq!(message.value("unknown_1"), Some(&Value::UInt8(7)));
}

#[test]
fn definitions_do_not_emit() {
    let data = FileBuilder::new()
        .definition(0, 20, &[(3, 1, 0x02)])
        .definition(1, 0, &[(1, 2, 0x84)])
        .build();
    assert!(pignon::decode_slice(&data).unwrap().is_empty());
}

#[test]
fn local_definition_overwrite() {
    let data = FileBuilder::new()
        .definition(0, 20, &[(3, 1, 0x02)])
        .data(0, &[150])
        .definition(0, 0, &[(1, 2, 0x84)])
        .data(0, &[1, 0])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].name, "record");
    assert_eq!(messages[1].name, "file_id");
    assert_eq!(messages[1].value("manufacturer"), Some(&Value::Name("garmin")));
}

#[test]
fn chained_segments() {
    let first = FileBuilder::new()
        .definition(0, 20, &[(3, 1, 0x02)])
        .data(0, &[150])
        .build();
    let second = FileBuilder::new()
        .definition(0, 0, &[(1, 2, 0x84)])
        .data(0, &[1, 0])
        .build();
    let data = [first, second].concat();

    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].name, "record");
    assert_eq!(messages[1].name, "file_id");
}

#[test]
fn chained_segment_crc_is_independent() {
    let first = FileBuilder::new()
        .definition(0, 20, &[(3, 1, 0x02)])
        .data(0, &[150])
        .build();
    let second = FileBuilder::new()
        .definition(0, 0, &[(1, 2, 0x84)])
        .data(0, &[1, 0])
        .build();
    let mut data = [first.clone(), second].concat();

    // Corrupt the second segment's data region. Messages still decode up
    // to that segment's trailer, where verification fails.
    let index = data.len() - 3;
    data[index] ^= 0x01;
    let mut decoder = Decoder::new(Cursor::new(data)).unwrap();
    assert!(decoder.next_message().unwrap().is_some());
    assert!(decoder.next_message().unwrap().is_some());
    assert!(matches!(
        decoder.next_message(),
        Err(Error::CrcMismatch { .. })
    ));
    assert!(decoder.next_message().unwrap().is_none());
}

#[test]
fn reader_and_slice_agree() {
    let data = record_file();
    let from_slice = pignon::decode_slice(&data).unwrap();
    let from_reader = pignon::decode_reader(Cursor::new(&data)).unwrap();
    assert_eq!(from_slice.len(), from_reader.len());
    assert_eq!(from_slice[0].name, from_reader[0].name);
}
