//! Profile tables mapping global message numbers to schemas.
//!
//! The tables themselves live in [`generated`], exported offline from the
//! FIT SDK Profile spreadsheet. They are process-wide, immutable, and shared
//! by every decoder. Lookups that miss never fail: the decoder synthesizes
//! `unknown_<n>` names so unrecognized messages and fields degrade to raw
//! values instead of aborting the decode.

pub mod generated;

use crate::wire::base_type::BaseType;

/// A message schema.
#[derive(Debug)]
pub struct MessageInfo {
    pub num: u16,
    pub name: &'static str,
    pub fields: &'static [FieldInfo],
}

impl MessageInfo {
    /// Look up a field schema by definition number.
    pub fn field(&self, number: u8) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|f| f.num == number)
    }
}

/// A field schema within a message.
#[derive(Debug)]
pub struct FieldInfo {
    pub num: u8,
    pub name: &'static str,
    pub kind: Kind,
    /// Divisor applied after decoding; `1.0` leaves the value untouched.
    pub scale: f64,
    /// Subtrahend applied after scaling; `0.0` leaves the value untouched.
    pub offset: f64,
    pub units: Option<&'static str>,
    pub components: &'static [Component],
    pub subfields: &'static [Subfield],
}

/// The value space of a field: a bare base type or a named profile type.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Base(BaseType),
    Type(&'static TypeInfo),
}

impl Kind {
    /// The profile name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Base(base) => base.name(),
            Kind::Type(info) => info.name,
        }
    }
}

/// A named profile type overlaying a base type.
#[derive(Debug)]
pub struct TypeInfo {
    pub name: &'static str,
    pub base: BaseType,
    /// Enum value table, sorted by value.
    pub values: &'static [(u32, &'static str)],
}

impl TypeInfo {
    /// Canonical name for an enum value, if the table has one.
    pub fn value_name(&self, value: u64) -> Option<&'static str> {
        let value = u32::try_from(value).ok()?;
        self.values
            .binary_search_by_key(&value, |(v, _)| *v)
            .ok()
            .map(|i| self.values[i].1)
    }
}

/// An alternative interpretation of a field, selected by a sibling field's
/// value in the same message.
#[derive(Debug)]
pub struct Subfield {
    pub name: &'static str,
    pub kind: Kind,
    pub scale: f64,
    pub offset: f64,
    pub units: Option<&'static str>,
    pub components: &'static [Component],
    /// The subfield applies when any referenced sibling holds its value.
    pub refs: &'static [SubfieldRef],
}

/// One reference predicate of a [`Subfield`].
#[derive(Debug)]
pub struct SubfieldRef {
    pub field: u8,
    pub value: u32,
}

/// A bit-packed sub-value projected onto another field of the same message.
#[derive(Debug)]
pub struct Component {
    /// Target field definition number.
    pub field: u8,
    /// Bit width consumed from the source value's little-endian bit stream.
    pub bits: u8,
    pub scale: f64,
    pub offset: f64,
    pub units: Option<&'static str>,
    /// Extend readings across records with a rolling high-bit register.
    pub accumulate: bool,
}

/// Look up a message schema by global message number.
pub fn message(num: u16) -> Option<&'static MessageInfo> {
    generated::MESSAGES
        .binary_search_by_key(&num, |m| m.num)
        .ok()
        .map(|i| &generated::MESSAGES[i])
}

/// Look up a type descriptor by profile name.
pub fn type_info(name: &str) -> Option<&'static TypeInfo> {
    generated::TYPES.iter().copied().find(|t| t.name == name)
}

/// Field definition number carrying a message's timestamp.
pub const TIMESTAMP_FIELD: u8 = 253;

/// Global message number of `field_description`.
pub const FIELD_DESCRIPTION: u16 = 206;

/// Global message number of `developer_data_id`.
pub const DEVELOPER_DATA_ID: u16 = 207;
