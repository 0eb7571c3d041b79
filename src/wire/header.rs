//! Document and record headers.

use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::error::Error;

/// Leading fields of a document header.
#[derive(Debug, Clone, Copy)]
pub struct FileHeader {
    /// Declared header length, 12 or 14.
    pub header_size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Length of the data region, excluding header and trailing CRC.
    pub data_size: u32,
}

impl FileHeader {
    /// Decode the first twelve bytes of a document header.
    pub fn decode(r: [u8; 12]) -> Result<Self, Error> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Wire {
            header_size: u8,
            protocol_version: u8,
            profile_version: [u8; 2],
            data_size: [u8; 4],
            data_type: [u8; 4],
        }

        let Wire {
            header_size,
            protocol_version,
            profile_version,
            data_size,
            data_type,
        } = zerocopy::transmute!(r);

        if &data_type != b".FIT" {
            Err(Error::BadSignature)?;
        }
        if header_size != 12 && header_size != 14 {
            Err(Error::BadHeaderSize(header_size))?;
        }

        Ok(Self {
            header_size,
            protocol_version,
            profile_version: u16::from_le_bytes(profile_version),
            data_size: u32::from_le_bytes(data_size),
        })
    }

    /// Whether a two-byte header CRC follows the first twelve bytes.
    pub fn has_crc(&self) -> bool {
        self.header_size == 14
    }
}

/// A classified record header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordHeader {
    /// Normal header introducing a definition record.
    Definition {
        local: u8,
        /// Developer field descriptors follow the native ones.
        developer: bool,
    },
    /// Normal header introducing a data record.
    Data { local: u8 },
    /// Compressed-timestamp header introducing a data record.
    CompressedData { local: u8, time_offset: u8 },
}

impl RecordHeader {
    /// Classify a record header byte.
    pub fn decode(r: u8) -> Self {
        bitfield! {
            struct Header(u8) {
                [7] is_compressed,
            }
        }

        if Header(r).is_compressed() {
            bitfield! {
                struct CompressedHeader(u8) {
                    [0..5] time_offset: u8,
                    [5..7] local_message: u8,
                }
            }

            let header = CompressedHeader(r);

            Self::CompressedData {
                local: header.local_message(),
                time_offset: header.time_offset(),
            }
        } else {
            bitfield! {
                struct NormalHeader(u8) {
                    [0..4] local_message: u8,
                    [5] is_developer,
                    [6] is_definition,
                }
            }

            let header = NormalHeader(r);

            if header.is_definition() {
                Self::Definition {
                    local: header.local_message(),
                    developer: header.is_developer(),
                }
            } else {
                Self::Data {
                    local: header.local_message(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FileHeader, RecordHeader};
    use crate::error::Error;

    #[test]
    fn file_header() {
        let header =
            FileHeader::decode([14, 0x10, 0x6B, 0x08, 0x20, 0x01, 0, 0, b'.', b'F', b'I', b'T'])
                .unwrap();
        assert_eq!(header.header_size, 14);
        assert_eq!(header.protocol_version, 0x10);
        assert_eq!(header.profile_version, 0x086B);
        assert_eq!(header.data_size, 0x120);
    }

    #[test]
    fn bad_signature() {
        let result =
            FileHeader::decode([14, 0x10, 0, 0, 0, 0, 0, 0, b'.', b'F', b'I', b'X']);
        assert!(matches!(result, Err(Error::BadSignature)));
    }

    #[test]
    fn bad_header_size() {
        let result =
            FileHeader::decode([13, 0x10, 0, 0, 0, 0, 0, 0, b'.', b'F', b'I', b'T']);
        assert!(matches!(result, Err(Error::BadHeaderSize(13))));
    }

    #[test]
    fn record_headers() {
        assert_eq!(
            RecordHeader::decode(0x40),
            RecordHeader::Definition {
                local: 0,
                developer: false
            }
        );
        assert_eq!(
            RecordHeader::decode(0x6A),
            RecordHeader::Definition {
                local: 10,
                developer: true
            }
        );
        assert_eq!(RecordHeader::decode(0x0F), RecordHeader::Data { local: 15 });
        assert_eq!(
            RecordHeader::decode(0xAD),
            RecordHeader::CompressedData {
                local: 1,
                time_offset: 13
            }
        );
    }
}
