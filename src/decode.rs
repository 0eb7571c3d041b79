//! The stateful document decoder.
//!
//! A [`Decoder`] owns its byte source and every piece of per-file state:
//! the sixteen local definition slots, the component accumulators, the
//! compressed timestamp reference, and the developer field index. Messages
//! are produced on demand; pulling the next message advances the source.

pub(crate) mod expand;
mod source;

use std::io::Read;

use tracing::{debug, trace, warn};

use crate::error::Error;
use crate::message::DataMessage;
use crate::processor::{HookProcessor, Processor};
use crate::wire::data::parse_field;
use crate::wire::definition::{DefinitionHeader, DevFieldDef, FieldDef, LocalDefinition};
use crate::wire::header::{FileHeader, RecordHeader};

use expand::{ExpandState, RawField};
use source::Source;

/// Options controlling a decode.
pub struct DecodeOptions {
    /// Verify the header and trailer CRCs (on by default).
    pub verify_crc: bool,
    /// Processor applied to every resolved field and message.
    pub processor: Box<dyn Processor>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            verify_crc: true,
            processor: Box::new(HookProcessor::default()),
        }
    }
}

impl DecodeOptions {
    /// Toggle CRC verification.
    pub fn verify_crc(mut self, verify: bool) -> Self {
        self.verify_crc = verify;
        self
    }

    /// Replace the processor.
    pub fn processor(mut self, processor: Box<dyn Processor>) -> Self {
        self.processor = processor;
        self
    }
}

/// Selects messages by profile name or global message number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKey {
    Name(String),
    Number(u16),
}

impl MessageKey {
    fn matches(&self, message: &DataMessage) -> bool {
        match self {
            Self::Name(name) => message.name == name.as_str(),
            Self::Number(num) => message.num == *num,
        }
    }
}

impl From<&str> for MessageKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for MessageKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u16> for MessageKey {
    fn from(num: u16) -> Self {
        Self::Number(num)
    }
}

/// A lazy FIT document decoder.
pub struct Decoder<R> {
    source: Source<R>,
    verify_crc: bool,
    processor: Box<dyn Processor>,
    protocol_version: u8,
    profile_version: u16,
    definitions: [Option<LocalDefinition>; 16],
    state: ExpandState,
    /// Absolute offset one past the current segment's data region.
    segment_end: u64,
    done: bool,
}

impl<R: Read> Decoder<R> {
    /// Begin decoding with default options.
    pub fn new(reader: R) -> Result<Self, Error> {
        Self::with_options(reader, DecodeOptions::default())
    }

    /// Begin decoding. The first file header is read and validated here, so
    /// the protocol and profile versions are available immediately.
    pub fn with_options(reader: R, options: DecodeOptions) -> Result<Self, Error> {
        let mut decoder = Self {
            source: Source::new(reader),
            verify_crc: options.verify_crc,
            processor: options.processor,
            protocol_version: 0,
            profile_version: 0,
            definitions: Default::default(),
            state: ExpandState::default(),
            segment_end: 0,
            done: false,
        };
        decoder.begin_segment()?;
        Ok(decoder)
    }

    /// Protocol version declared by the file header.
    pub fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// Profile version declared by the file header.
    pub fn profile_version(&self) -> u16 {
        self.profile_version
    }

    /// Decode until the next data message, or `None` at clean end of input.
    ///
    /// After an error the decoder is terminal; further calls return
    /// `Ok(None)`.
    pub fn next_message(&mut self) -> Result<Option<DataMessage>, Error> {
        match self.advance() {
            Ok(message) => Ok(message),
            Err(err) => {
                self.done = true;
                Err(err)
            }
        }
    }

    /// Lazily iterate over the remaining data messages.
    pub fn messages(&mut self) -> Messages<'_, R> {
        Messages {
            decoder: self,
            filter: None,
        }
    }

    /// Lazily iterate over the remaining data messages matching a profile
    /// name or global message number.
    pub fn messages_named(&mut self, key: impl Into<MessageKey>) -> Messages<'_, R> {
        Messages {
            decoder: self,
            filter: Some(key.into()),
        }
    }

    /// Decode everything that remains and collect it.
    pub fn read_all(&mut self) -> Result<Vec<DataMessage>, Error> {
        let mut messages = Vec::new();
        while let Some(message) = self.next_message()? {
            messages.push(message);
        }
        Ok(messages)
    }

    fn advance(&mut self) -> Result<Option<DataMessage>, Error> {
        loop {
            if self.done {
                return Ok(None);
            }

            if self.source.position() >= self.segment_end {
                self.finish_segment()?;
                continue;
            }

            let message = match RecordHeader::decode(self.source.take::<1>()?[0]) {
                RecordHeader::Definition { local, developer } => {
                    self.read_definition(local, developer)?;
                    None
                }
                RecordHeader::Data { local } => Some(self.read_data(local, None)?),
                RecordHeader::CompressedData { local, time_offset } => {
                    Some(self.read_data(local, Some(time_offset))?)
                }
            };

            if self.source.position() > self.segment_end {
                return Err(Error::TruncatedInput);
            }
            if let Some(message) = message {
                return Ok(Some(message));
            }
        }
    }

    /// Read one file header and reset per-segment CRC state.
    fn begin_segment(&mut self) -> Result<(), Error> {
        self.source.reset_crc();
        let header = FileHeader::decode(self.source.take()?)?;
        if header.has_crc() {
            let calculated = self.source.crc();
            let found = u16::from_le_bytes(self.source.take()?);
            if found != 0 && found != calculated && self.verify_crc {
                return Err(Error::CrcMismatch { found, calculated });
            }
        }
        self.protocol_version = header.protocol_version;
        self.profile_version = header.profile_version;
        self.segment_end = self.source.position() + u64::from(header.data_size);
        debug!(
            protocol = header.protocol_version,
            profile = header.profile_version,
            data_size = header.data_size,
            "segment header"
        );
        Ok(())
    }

    /// Verify the trailer CRC, then either chain into the next segment or
    /// finish the decode.
    fn finish_segment(&mut self) -> Result<(), Error> {
        let calculated = self.source.crc();
        let found = u16::from_le_bytes(self.source.take()?);
        if found != calculated {
            if self.verify_crc {
                return Err(Error::CrcMismatch { found, calculated });
            }
            warn!(found, calculated, "ignoring CRC mismatch");
        }
        if self.source.peek()?.is_none() {
            debug!("end of input");
            self.done = true;
        } else {
            self.begin_segment()?;
        }
        Ok(())
    }

    fn read_definition(&mut self, local: u8, developer: bool) -> Result<(), Error> {
        let header = DefinitionHeader::decode(self.source.take()?);

        let mut fields = Vec::with_capacity(usize::from(header.field_count));
        for _ in 0..header.field_count {
            let field = FieldDef::decode(self.source.take()?);
            if field.size == 0 {
                return Err(Error::InvalidDefinition {
                    global: header.global,
                    field: field.number,
                    size: 0,
                });
            }
            fields.push(field);
        }

        let mut dev_fields = Vec::new();
        if developer {
            let count = self.source.take::<1>()?[0];
            dev_fields.reserve(usize::from(count));
            for _ in 0..count {
                let field = DevFieldDef::decode(self.source.take()?);
                if field.size == 0 {
                    return Err(Error::InvalidDefinition {
                        global: header.global,
                        field: field.number,
                        size: 0,
                    });
                }
                dev_fields.push(field);
            }
        }

        let definition = LocalDefinition {
            global: header.global,
            big_endian: header.big_endian,
            fields,
            dev_fields,
        };
        trace!(
            local,
            global = definition.global,
            fields = definition.fields.len(),
            dev_fields = definition.dev_fields.len(),
            "definition record"
        );
        self.state.register_definition(&definition);
        self.definitions[usize::from(local)] = Some(definition);
        Ok(())
    }

    fn read_data(&mut self, local: u8, time_offset: Option<u8>) -> Result<DataMessage, Error> {
        let definition = self.definitions[usize::from(local)]
            .as_ref()
            .ok_or(Error::UnknownLocalTag(local))?;

        let mut raw = Vec::with_capacity(definition.fields.len());
        for field in &definition.fields {
            let bytes = self.source.take_vec(usize::from(field.size))?;
            raw.push(RawField {
                def: *field,
                value: parse_field(&bytes, field.base_type, definition.big_endian),
            });
        }

        let mut dev_raw = Vec::with_capacity(definition.dev_fields.len());
        for field in &definition.dev_fields {
            dev_raw.push((*field, self.source.take_vec(usize::from(field.size))?));
        }

        let mut message =
            expand::resolve_message(definition, raw, dev_raw, time_offset, &mut self.state);
        self.state.register_dev_metadata(&message);

        let name = message.name.clone();
        for field in &mut message.fields {
            self.processor.process_field(&name, field)?;
        }
        self.processor.process_message(&mut message)?;

        trace!(global = message.num, name = %message.name, "data message");
        Ok(message)
    }
}

/// Pull-based iterator over decoded data messages.
///
/// Yields `Err` at most once; the underlying decoder is terminal
/// afterwards.
pub struct Messages<'a, R> {
    decoder: &'a mut Decoder<R>,
    filter: Option<MessageKey>,
}

impl<R: Read> Iterator for Messages<'_, R> {
    type Item = Result<DataMessage, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.decoder.next_message() {
                Ok(Some(message)) => {
                    if self.filter.as_ref().map_or(true, |k| k.matches(&message)) {
                        return Some(Ok(message));
                    }
                }
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
