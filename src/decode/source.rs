//! Position-tracked byte source feeding the CRC engine.

use std::io::Read;

use crate::error::Error;
use crate::wire::crc::accumulate;

/// A forward-only reader over the document bytes.
///
/// Every byte actually consumed advances the position and the running CRC.
/// A single byte may be peeked without consuming it, which is how chained
/// segments are detected after a trailer.
pub(crate) struct Source<R> {
    inner: R,
    position: u64,
    crc: u16,
    peeked: Option<u8>,
}

impl<R: Read> Source<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            crc: 0,
            peeked: None,
        }
    }

    /// Absolute offset of the next byte to be consumed.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Running CRC over the bytes consumed since the last reset.
    pub fn crc(&self) -> u16 {
        self.crc
    }

    /// Reset the running CRC at a segment boundary.
    pub fn reset_crc(&mut self) {
        self.crc = 0;
    }

    /// Take exactly `N` bytes.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Take exactly `len` bytes into a fresh buffer.
    pub fn take_vec(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Look at the next byte without consuming it. `None` at end of input.
    pub fn peek(&mut self) -> Result<Option<u8>, Error> {
        if self.peeked.is_none() {
            let mut buf = [0; 1];
            loop {
                match self.inner.read(&mut buf) {
                    Ok(0) => return Ok(None),
                    Ok(_) => break,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            self.peeked = Some(buf[0]);
        }
        Ok(self.peeked)
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.is_empty() {
            return Ok(());
        }
        let mut start = 0;
        if let Some(b) = self.peeked.take() {
            buf[0] = b;
            start = 1;
        }
        self.inner.read_exact(&mut buf[start..])?;
        self.position += buf.len() as u64;
        self.crc = accumulate(self.crc, buf);
        Ok(())
    }
}
