//! The decoded data model: values, resolved fields, and data messages.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Uninterpreted bytes (`byte` fields, unknown base types, and fields
    /// whose declared size does not divide into whole elements).
    Byte(Vec<u8>),
    SInt8(i8),
    UInt8(u8),
    SInt16(i16),
    UInt16(u16),
    SInt32(i32),
    UInt32(u32),
    SInt64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    /// A resolved enum variant name.
    Name(&'static str),
    Bool(bool),
    /// An absolute `date_time`.
    Timestamp(DateTime<Utc>),
    /// A `local_date_time`, naive in the device's local zone.
    LocalTimestamp(NaiveDateTime),
    Array(Vec<Value>),
}

impl Value {
    /// The value as an unsigned integer, if it is integral and in range.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt8(v) => Some(u64::from(*v)),
            Self::UInt16(v) => Some(u64::from(*v)),
            Self::UInt32(v) => Some(u64::from(*v)),
            Self::UInt64(v) => Some(*v),
            Self::SInt8(v) => u64::try_from(*v).ok(),
            Self::SInt16(v) => u64::try_from(*v).ok(),
            Self::SInt32(v) => u64::try_from(*v).ok(),
            Self::SInt64(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The value as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::SInt8(v) => Some(f64::from(*v)),
            Self::UInt8(v) => Some(f64::from(*v)),
            Self::SInt16(v) => Some(f64::from(*v)),
            Self::UInt16(v) => Some(f64::from(*v)),
            Self::SInt32(v) => Some(f64::from(*v)),
            Self::UInt32(v) => Some(f64::from(*v)),
            Self::SInt64(v) => Some(*v as f64),
            Self::UInt64(v) => Some(*v as f64),
            Self::Float32(v) => Some(f64::from(*v)),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(bytes) => {
                write!(f, "0x")?;
                for b in bytes {
                    write!(f, "{b:02X}")?;
                }
                Ok(())
            }
            Self::SInt8(v) => write!(f, "{v}"),
            Self::UInt8(v) => write!(f, "{v}"),
            Self::SInt16(v) => write!(f, "{v}"),
            Self::UInt16(v) => write!(f, "{v}"),
            Self::SInt32(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::SInt64(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Name(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S UTC")),
            Self::LocalTimestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// One resolved field of a data message.
#[derive(Debug, Clone)]
pub struct FieldValue {
    /// Field definition number (253 for a message's timestamp).
    pub number: u8,
    /// Profile or developer-supplied field name, or `unknown_<number>`.
    pub name: Cow<'static, str>,
    /// Profile type name, or the base type name where no profile type
    /// applies.
    pub type_name: &'static str,
    /// Resolved value; `None` when the field held its invalid marker.
    pub value: Option<Value>,
    /// Value before enum naming, scaling, and processing.
    pub raw: Option<Value>,
    /// Units, from the profile or a developer field description.
    pub units: Option<Cow<'static, str>>,
}

/// One decoded data message.
#[derive(Debug, Clone)]
pub struct DataMessage {
    /// Global message number.
    pub num: u16,
    /// Profile message name, or `unknown_<num>`.
    pub name: Cow<'static, str>,
    /// Resolved fields: native fields in declaration order (expanded
    /// components directly before their source), then the reconstructed
    /// timestamp for compressed headers, then developer fields.
    pub fields: Vec<FieldValue>,
}

impl DataMessage {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field's resolved value by name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.field(name).and_then(|f| f.value.as_ref())
    }

    /// Look up a field's units by name.
    pub fn units(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.units.as_deref())
    }
}
