//! Definition records and the local definition they produce.

use zerocopy::FromBytes;

use super::base_type::BaseType;

/// Fixed leading part of a definition record, after the record header.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionHeader {
    pub big_endian: bool,
    pub global: u16,
    pub field_count: u8,
}

impl DefinitionHeader {
    /// Decode the five fixed bytes of a definition record.
    pub fn decode(r: [u8; 5]) -> Self {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Wire {
            _reserved: u8,
            architecture: u8,
            global_message: [u8; 2],
            field_count: u8,
        }

        let Wire {
            architecture,
            global_message,
            field_count,
            ..
        } = zerocopy::transmute!(r);

        let big_endian = architecture != 0;
        let global = if big_endian {
            u16::from_be_bytes(global_message)
        } else {
            u16::from_le_bytes(global_message)
        };

        Self {
            big_endian,
            global,
            field_count,
        }
    }
}

/// One declared field of a definition record.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub number: u8,
    /// Declared byte length of the field in each data record.
    pub size: u8,
    pub base_type: BaseType,
}

impl FieldDef {
    /// Decode a three-byte field descriptor.
    pub fn decode(r: [u8; 3]) -> Self {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Wire {
            field: u8,
            size: u8,
            base_type: u8,
        }

        let Wire {
            field,
            size,
            base_type,
        } = zerocopy::transmute!(r);

        Self {
            number: field,
            size,
            base_type: BaseType::from_code(base_type),
        }
    }
}

/// One declared developer field of a definition record.
///
/// The base type is not on the wire here; it comes from the
/// `field_description` message the descriptor refers to.
#[derive(Debug, Clone, Copy)]
pub struct DevFieldDef {
    pub number: u8,
    pub size: u8,
    pub developer_index: u8,
}

impl DevFieldDef {
    /// Decode a three-byte developer field descriptor.
    pub fn decode(r: [u8; 3]) -> Self {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Wire {
            field: u8,
            size: u8,
            developer_index: u8,
        }

        let Wire {
            field,
            size,
            developer_index,
        } = zerocopy::transmute!(r);

        Self {
            number: field,
            size,
            developer_index,
        }
    }
}

/// A definition record bound to a local message number.
#[derive(Debug, Clone)]
pub struct LocalDefinition {
    pub global: u16,
    pub big_endian: bool,
    pub fields: Vec<FieldDef>,
    pub dev_fields: Vec<DevFieldDef>,
}

impl LocalDefinition {
    /// Total payload length of a data record using this definition.
    pub fn data_len(&self) -> usize {
        self.fields.iter().map(|f| f.size as usize).sum::<usize>()
            + self.dev_fields.iter().map(|f| f.size as usize).sum::<usize>()
    }
}
