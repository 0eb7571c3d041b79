//! A profile-aware decoder for Garmin's Flexible and Interoperable Data
//! Transfer (FIT) protocol.
//!
//! FIT documents are self-describing: definition records declare the wire
//! layout of the data records that follow them, while an embedded profile
//! table supplies names, units, scaling, enum values, subfields, and
//! component layouts. Decoding yields a stream of [`DataMessage`]s whose
//! [`FieldValue`]s carry resolved names, values, and units.
//!
//! Most users should begin with [`open`], [`decode_slice`], or
//! [`decode_reader`]. The [`Decoder`] type exposes the lazy, pull-based
//! surface along with per-decode options (CRC verification, a custom
//! [`Processor`]).
//!
//! ```no_run
//! let mut decoder = pignon::open("afternoon-ride.fit")?;
//! for message in decoder.messages_named("record") {
//!     let message = message?;
//!     if let Some(rate) = message.value("heart_rate") {
//!         println!("{rate} bpm");
//!     }
//! }
//! # Ok::<(), pignon::Error>(())
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `cli`: build the `fitdump` dump tool (default).

pub mod decode;
pub mod error;
pub mod message;
pub mod processor;
pub mod profile;
pub mod wire;

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

pub use decode::{DecodeOptions, Decoder, MessageKey, Messages};
pub use error::Error;
pub use message::{DataMessage, FieldValue, Value};
pub use processor::{HookProcessor, Processor, ProcessorError};

/// Open the FIT file at `path` for lazy decoding with default options.
pub fn open(path: impl AsRef<Path>) -> Result<Decoder<BufReader<File>>, Error> {
    Decoder::new(BufReader::new(File::open(path)?))
}

/// Decode every data message of an in-memory document.
pub fn decode_slice(data: &[u8]) -> Result<Vec<DataMessage>, Error> {
    Decoder::new(Cursor::new(data))?.read_all()
}

/// Decode every data message from a reader of a document.
pub fn decode_reader(reader: impl Read) -> Result<Vec<DataMessage>, Error> {
    Decoder::new(reader)?.read_all()
}
