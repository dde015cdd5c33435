//! Byte source over a native random-access stream.

use std::io::{self, Read, Seek, SeekFrom};

use tracing::debug;

use super::ByteSource;

/// A [`ByteSource`] wrapping an exclusively owned `Read + Seek` stream.
///
/// The stream length is measured once at construction, so [`size`] is O(1)
/// and never moves the stream. The cursor reported by [`tell`] is the
/// position the stream itself returned from its last seek, advanced by the
/// bytes read since.
///
/// [`size`]: ByteSource::size
/// [`tell`]: ByteSource::tell
#[derive(Debug)]
pub struct StreamSource<S> {
    stream: S,
    size: u64,
    position: u64,
}

impl<S: Read + Seek> StreamSource<S> {
    /// Wrap a stream, measuring its length.
    ///
    /// The stream is left at the offset it had on entry.
    pub fn new(mut stream: S) -> io::Result<Self> {
        let start = stream.stream_position()?;
        let size = stream.seek(SeekFrom::End(0))?;
        let position = stream.seek(SeekFrom::Start(start))?;
        Ok(Self {
            stream,
            size,
            position,
        })
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Seek + Send> ByteSource for StreamSource<S> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    debug!(error = %e, filled, "stream read stopped early");
                    break;
                }
            }
        }
        self.position += filled as u64;
        filled
    }

    fn seek(&mut self, pos: SeekFrom) {
        match self.stream.seek(pos) {
            Ok(position) => self.position = position,
            Err(e) => debug!(error = %e, ?pos, "stream seek rejected"),
        }
    }

    fn tell(&self) -> u64 {
        self.position
    }

    fn size(&self) -> u64 {
        self.size
    }
}
