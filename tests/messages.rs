//! Profile resolution: names, units, scaling, subfields, timestamps, and
//! developer fields.

mod common;

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use common::FileBuilder;
use pignon::{DecodeOptions, Decoder, HookProcessor, Value};

fn record_file() -> Vec<u8> {
    FileBuilder::new()
        .definition(0, 20, &[(253, 4, 0x86), (3, 1, 0x02)])
        .data(0, &[0xE8, 0x03, 0x00, 0x00, 150])
        .build()
}

#[test]
fn record_message() {
    let messages = pignon::decode_slice(&record_file()).unwrap();
    assert_eq!(messages.len(), 1);

    let message = &messages[0];
    assert_eq!(message.name, "record");
    assert_eq!(message.num, 20);

    let timestamp = message.field("timestamp").unwrap();
    assert_eq!(timestamp.number, 253);
    assert_eq!(
        timestamp.value,
        Some(Value::Timestamp(
            Utc.with_ymd_and_hms(1989, 12, 31, 0, 16, 40).unwrap()
        ))
    );
    assert_eq!(timestamp.units, None);
    assert_eq!(timestamp.raw, Some(Value::UInt32(1000)));

    let heart_rate = message.field("heart_rate").unwrap();
    assert_eq!(heart_rate.value, Some(Value::UInt8(150)));
    assert_eq!(heart_rate.units.as_deref(), Some("bpm"));
}

#[test]
fn field_count_matches_definition() {
    let messages = pignon::decode_slice(&record_file()).unwrap();
    assert_eq!(messages[0].fields.len(), 2);
}

#[test]
fn invalid_field_is_none() {
    let data = FileBuilder::new()
        .definition(0, 20, &[(253, 4, 0x86), (3, 1, 0x02)])
        .data(0, &[0xE8, 0x03, 0x00, 0x00, 0xFF])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let heart_rate = messages[0].field("heart_rate").unwrap();
    assert_eq!(heart_rate.value, None);
    assert_eq!(heart_rate.raw, None);
}

#[test]
fn compressed_timestamp_chain() {
    let data = FileBuilder::new()
        .definition(0, 20, &[(253, 4, 0x86), (3, 1, 0x02)])
        .data(0, &[0xE8, 0x03, 0x00, 0x00, 150])
        .compressed(0, 13, &[0xE8, 0x03, 0x00, 0x00, 151])
        .compressed(0, 18, &[0xE8, 0x03, 0x00, 0x00, 152])
        .compressed(0, 28, &[0xE8, 0x03, 0x00, 0x00, 153])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(messages.len(), 4);
    // Explicit timestamps win over the header offset.
    for message in &messages[1..] {
        assert_eq!(message.fields.len(), 2);
    }
}

#[test]
fn compressed_timestamp_reconstruction() {
    // Offsets 13, 18, 28 extend reference 1000 to 1005, 1010, 1020; the
    // final offset 4 reads below the window and wraps to 1028.
    let data = FileBuilder::new()
        .definition(0, 20, &[(253, 4, 0x86), (3, 1, 0x02)])
        .data(0, &[0xE8, 0x03, 0x00, 0x00, 150])
        .definition(0, 20, &[(3, 1, 0x02)])
        .compressed(0, 13, &[151])
        .compressed(0, 18, &[152])
        .compressed(0, 28, &[153])
        .compressed(0, 4, &[154])
        .build();
    let options = DecodeOptions::default().processor(Box::new(HookProcessor::empty()));
    let mut decoder = Decoder::with_options(Cursor::new(data), options).unwrap();
    let messages = decoder.read_all().unwrap();

    let stamps: Vec<&Value> = messages
        .iter()
        .map(|m| m.value("timestamp").unwrap())
        .collect();
    assert_eq!(
        stamps,
        [
            &Value::UInt32(1000),
            &Value::UInt32(1005),
            &Value::UInt32(1010),
            &Value::UInt32(1020),
            &Value::UInt32(1028),
        ]
    );
    // The reconstructed field is typed like a profile timestamp.
    let synthetic = messages[1].field("timestamp").unwrap();
    assert_eq!(synthetic.number, 253);
    assert_eq!(synthetic.type_name, "date_time");
}

#[test]
fn subfield_garmin_product() {
    let data = FileBuilder::new()
        .definition(0, 0, &[(0, 1, 0x00), (1, 2, 0x84), (2, 2, 0x84)])
        .data(0, &[4, 1, 0, 0x13, 0x08])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let message = &messages[0];
    assert_eq!(message.name, "file_id");
    assert_eq!(message.value("type"), Some(&Value::Name("activity")));
    assert_eq!(message.value("manufacturer"), Some(&Value::Name("garmin")));

    // Field 2 resolves through its subfield: 0x0813 is the edge520.
    let product = message.field("garmin_product").unwrap();
    assert_eq!(product.number, 2);
    assert_eq!(product.value, Some(Value::Name("edge520")));
    assert!(message.field("product").is_none());
}

#[test]
fn subfield_unmatched_keeps_field() {
    let data = FileBuilder::new()
        .definition(0, 0, &[(0, 1, 0x00), (1, 2, 0x84), (2, 2, 0x84)])
        .data(0, &[4, 0x59, 0x00, 0x13, 0x08])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let message = &messages[0];
    assert_eq!(message.value("manufacturer"), Some(&Value::Name("tacx")));
    let product = message.field("product").unwrap();
    assert_eq!(product.value, Some(Value::UInt16(0x0813)));
}

#[test]
fn subfield_battery_level() {
    let data = FileBuilder::new()
        .definition(0, 21, &[(0, 1, 0x00), (1, 1, 0x00), (3, 4, 0x86)])
        .data(0, &[11, 4, 0x0A, 0x0F, 0x00, 0x00])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let message = &messages[0];
    assert_eq!(message.name, "event");
    assert_eq!(message.value("event"), Some(&Value::Name("battery")));
    assert_eq!(message.value("event_type"), Some(&Value::Name("stop_all")));

    let level = message.field("battery_level").unwrap();
    assert_eq!(level.value, Some(Value::Float64(3.85)));
    assert_eq!(level.units.as_deref(), Some("V"));
}

#[test]
fn string_field() {
    let mut payload = Vec::from([4u8, 1, 0]);
    payload.extend_from_slice(b"Edge 520\0\0\0\0\0\0\0\0");
    let data = FileBuilder::new()
        .definition(0, 0, &[(0, 1, 0x00), (1, 2, 0x84), (8, 16, 0x07)])
        .data(0, &payload)
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(
        messages[0].value("product_name"),
        Some(&Value::String("Edge 520".into()))
    );
}

#[test]
fn empty_string_field_is_none() {
    let data = FileBuilder::new()
        .definition(0, 0, &[(8, 4, 0x07)])
        .data(0, &[0, 0, 0, 0])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let name = messages[0].field("product_name").unwrap();
    assert_eq!(name.value, None);
}

#[test]
fn array_field_keeps_positions() {
    let data = FileBuilder::new()
        .definition(0, 0xFFFE, &[(0, 6, 0x84)])
        .data(0, &[1, 0, 0xFF, 0xFF, 3, 0])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(
        messages[0].value("unknown_0"),
        Some(&Value::Array(vec![
            Value::UInt16(1),
            Value::UInt16(0xFFFF),
            Value::UInt16(3),
        ]))
    );
}

#[test]
fn big_endian_definition() {
    let data = FileBuilder::new()
        .definition_be(0, 20, &[(253, 4, 0x86), (7, 2, 0x84)])
        .data(0, &[0x00, 0x00, 0x03, 0xE8, 0x01, 0x2C])
        .build();
    let options = DecodeOptions::default().processor(Box::new(HookProcessor::empty()));
    let mut decoder = Decoder::with_options(Cursor::new(data), options).unwrap();
    let messages = decoder.read_all().unwrap();
    let message = &messages[0];
    assert_eq!(message.value("timestamp"), Some(&Value::UInt32(1000)));
    assert_eq!(message.value("power"), Some(&Value::UInt16(300)));
}

#[test]
fn developer_fields() {
    let mut description = Vec::from([0u8, 0, 132]);
    description.extend_from_slice(b"doughnuts_earned\0");
    description.extend_from_slice(b"doughnuts\0");
    let data = FileBuilder::new()
        .definition(
            0,
            206,
            &[(0, 1, 0x02), (1, 1, 0x02), (2, 1, 0x02), (3, 17, 0x07), (8, 10, 0x07)],
        )
        .data(0, &description)
        .definition_with_dev(1, 20, &[(3, 1, 0x02)], &[(0, 2, 0)])
        .data(1, &[150, 0x2A, 0x00])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    assert_eq!(messages.len(), 2);

    let record = &messages[1];
    assert_eq!(record.name, "record");
    assert_eq!(record.value("heart_rate"), Some(&Value::UInt8(150)));

    let doughnuts = record.field("doughnuts_earned").unwrap();
    assert_eq!(doughnuts.value, Some(Value::UInt16(42)));
    assert_eq!(doughnuts.units.as_deref(), Some("doughnuts"));
    assert_eq!(doughnuts.type_name, "uint16");
    // Developer fields come after native ones.
    assert_eq!(record.fields.last().unwrap().name, "doughnuts_earned");
}

#[test]
fn developer_field_without_descriptor() {
    let data = FileBuilder::new()
        .definition_with_dev(0, 20, &[(3, 1, 0x02)], &[(5, 2, 0)])
        .data(0, &[150, 0xAB, 0xCD])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let placeholder = messages[0].field("unknown_dev_0_5").unwrap();
    assert_eq!(placeholder.value, Some(Value::Byte(vec![0xAB, 0xCD])));
    assert_eq!(placeholder.type_name, "byte");
}

#[test]
fn developer_field_scale_from_descriptor() {
    let mut description = Vec::from([0u8, 3, 132, 10]);
    description.extend_from_slice(b"hydration\0");
    let data = FileBuilder::new()
        .definition(
            0,
            206,
            &[(0, 1, 0x02), (1, 1, 0x02), (2, 1, 0x02), (6, 1, 0x02), (3, 10, 0x07)],
        )
        .data(0, &description)
        .definition_with_dev(1, 20, &[(3, 1, 0x02)], &[(3, 2, 0)])
        .data(1, &[150, 0xF4, 0x01])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let hydration = messages[1].field("hydration").unwrap();
    assert_eq!(hydration.value, Some(Value::Float64(50.0)));
    assert_eq!(hydration.raw, Some(Value::UInt16(500)));
}

#[test]
fn messages_named_filters() {
    let data = FileBuilder::new()
        .definition(0, 20, &[(3, 1, 0x02)])
        .definition(1, 0, &[(1, 2, 0x84)])
        .data(0, &[150])
        .data(1, &[1, 0])
        .data(0, &[151])
        .build();

    let mut decoder = Decoder::new(Cursor::new(data.clone())).unwrap();
    let records: Vec<_> = decoder
        .messages_named("record")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(records.len(), 2);

    let mut decoder = Decoder::new(Cursor::new(data)).unwrap();
    let file_ids: Vec<_> = decoder
        .messages_named(0u16)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(file_ids.len(), 1);
    assert_eq!(file_ids[0].name, "file_id");
}

#[test]
fn local_date_time_is_naive() {
    let data = FileBuilder::new()
        .definition(0, 34, &[(5, 4, 0x86)])
        .data(0, &[0xE8, 0x03, 0x00, 0x00])
        .build();
    let messages = pignon::decode_slice(&data).unwrap();
    let local = messages[0].field("local_timestamp").unwrap();
    assert_eq!(
        local.value,
        Some(Value::LocalTimestamp(
            Utc.with_ymd_and_hms(1989, 12, 31, 0, 16, 40)
                .unwrap()
                .naive_utc()
        ))
    );
}
