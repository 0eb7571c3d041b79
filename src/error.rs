//! Errors surfaced while decoding.

use thiserror::Error;

use crate::processor::ProcessorError;

/// An error decoding a FIT document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Fewer bytes were available than a record or segment demands.
    #[error("Unexpectedly reached the end of the input.")]
    TruncatedInput,
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(std::io::Error),
    /// Incorrect file type marker.
    #[error("Incorrect file type marker.")]
    BadSignature,
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    BadHeaderSize(u8),
    /// Calculated and found CRC values do not match.
    #[error("Calculated ({calculated:#06X}) and found ({found:#06X}) CRC values do not match.")]
    CrcMismatch { found: u16, calculated: u16 },
    /// A data record referenced a local message with no prior definition.
    #[error("Data record references local message {0} before any definition.")]
    UnknownLocalTag(u8),
    /// A definition declared a field layout that cannot be decoded.
    #[error("Definition for global message {global} declares field {field} with invalid size {size}.")]
    InvalidDefinition { global: u16, field: u8, size: u8 },
    /// A processor hook failed.
    #[error("Processor hook failed: {0}")]
    Processor(#[from] ProcessorError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::TruncatedInput
        } else {
            Self::Io(err)
        }
    }
}
