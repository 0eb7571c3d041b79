//! Raw field parsing for data records.

use tracing::warn;

use super::base_type::BaseType;
use crate::message::Value;

/// Parse one field's byte slice into its raw value.
///
/// Returns `None` when the field holds only its invalid marker: a scalar
/// equal to the sentinel, an array whose every element is the sentinel, an
/// empty string, or an all-`0xFF` byte blob. Arrays with a mix of valid and
/// sentinel elements keep every element's decoded value so positions stay
/// meaningful.
pub fn parse_field(bytes: &[u8], base: BaseType, big_endian: bool) -> Option<Value> {
    match base {
        BaseType::String => parse_string(bytes),
        BaseType::Byte => parse_bytes(bytes),
        _ => {
            let size = base.size();
            if bytes.len() % size != 0 {
                return undivided(bytes, base);
            }
            if bytes.len() == size {
                let (value, valid) = base.parse_scalar(bytes, big_endian);
                return valid.then_some(value);
            }

            let mut values = Vec::with_capacity(bytes.len() / size);
            let mut any_valid = false;
            for chunk in bytes.chunks_exact(size) {
                let (value, valid) = base.parse_scalar(chunk, big_endian);
                any_valid |= valid;
                values.push(value);
            }
            any_valid.then_some(Value::Array(values))
        }
    }
}

/// Fallback for fields whose declared size does not divide into whole
/// elements: carry the payload through as an uninterpreted blob.
fn undivided(bytes: &[u8], base: BaseType) -> Option<Value> {
    warn!(
        base = base.name(),
        len = bytes.len(),
        "field size is not a multiple of its base type size"
    );
    parse_bytes(bytes)
}

fn parse_string(bytes: &[u8]) -> Option<Value> {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    if end == 0 {
        return None;
    }
    Some(Value::String(
        String::from_utf8_lossy(&bytes[..end]).into_owned(),
    ))
}

fn parse_bytes(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(|b| *b == 0xFF) {
        return None;
    }
    Some(Value::Byte(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::parse_field;
    use crate::message::Value;
    use crate::wire::base_type::BaseType;

    #[test]
    fn scalar() {
        let value = parse_field(&[0xE8, 0x03, 0, 0], BaseType::UInt32, false);
        assert_eq!(value, Some(Value::UInt32(1000)));
    }

    #[test]
    fn sentinel_scalar_is_none() {
        assert_eq!(parse_field(&[0xFF; 4], BaseType::UInt32, false), None);
    }

    #[test]
    fn array_keeps_sentinel_elements() {
        let value = parse_field(&[1, 0, 0xFF, 0xFF, 3, 0], BaseType::UInt16, false);
        assert_eq!(
            value,
            Some(Value::Array(vec![
                Value::UInt16(1),
                Value::UInt16(0xFFFF),
                Value::UInt16(3),
            ]))
        );
    }

    #[test]
    fn all_sentinel_array_is_none() {
        assert_eq!(parse_field(&[0xFF; 6], BaseType::UInt16, false), None);
    }

    #[test]
    fn string_stops_at_nul() {
        let value = parse_field(b"Edge 520\0\0\0", BaseType::String, false);
        assert_eq!(value, Some(Value::String("Edge 520".into())));
    }

    #[test]
    fn empty_string_is_none() {
        assert_eq!(parse_field(&[0, 0, 0], BaseType::String, false), None);
    }

    #[test]
    fn undivided_size_falls_back_to_bytes() {
        let value = parse_field(&[1, 2, 3], BaseType::UInt16, false);
        assert_eq!(value, Some(Value::Byte(vec![1, 2, 3])));
    }
}
