//! User-facing file handle.
//!
//! A [`FileHandle`] owns exactly one [`ByteSource`] and adds convenience
//! reads on top of the raw read/seek contract: whole-file reads, line reads,
//! single-byte `get`/`peek` and an exact end-of-file test.
//!
//! # Line reading
//!
//! [`FileHandle::read_line`] fills a caller buffer with at most `len - 1`
//! bytes and always writes a NUL terminator right after the last byte
//! written. `\r` and `\n` are consumed but never stored, so `\n` and `\r\n`
//! endings read the same.
//!
//! When the buffer fills, a line ending that follows immediately (`\n`,
//! `\r\n` or a lone `\r`) is consumed as well, so a line that exactly fits
//! does not produce an extra empty line on the next call. Any other byte
//! stays unread and starts the next call.

use std::fmt;
use std::io::{self, SeekFrom};

use crate::config;
use crate::error::{Result, VfsError};
use crate::source::ByteSource;

/// An open file, exclusively owning its byte source.
///
/// Handles are move-only: there is no way for two handles to share one
/// cursor. Open the same path twice for independent cursors.
pub struct FileHandle<'a> {
    path: String,
    source: Box<dyn ByteSource + 'a>,
}

impl<'a> FileHandle<'a> {
    /// Wrap a source opened for the logical path `path`.
    pub fn new(path: impl Into<String>, source: impl ByteSource + 'a) -> Self {
        Self {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a source that has no logical path.
    pub fn from_source(source: impl ByteSource + 'a) -> Self {
        Self::new(String::new(), source)
    }

    pub(crate) fn from_boxed(path: &str, source: Box<dyn ByteSource + 'a>) -> Self {
        Self {
            path: path.to_string(),
            source,
        }
    }

    /// The logical path this handle was opened under.
    pub fn path(&self) -> &str {
        &self.path
    }

    // =========================================================================
    // Raw Access
    // =========================================================================

    /// Read up to `buf.len()` bytes. A short count means end of data.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        self.source.read(buf)
    }

    /// Reposition the cursor.
    pub fn seek(&mut self, pos: SeekFrom) {
        self.source.seek(pos);
    }

    /// Current cursor position.
    pub fn tell(&self) -> u64 {
        self.source.tell()
    }

    /// Total size of the file.
    pub fn size(&self) -> u64 {
        self.source.size()
    }

    /// True iff the cursor sits exactly at the end.
    ///
    /// A cursor moved *past* the end reports `false`; compare
    /// [`tell`](Self::tell) and [`size`](Self::size) to detect that.
    pub fn eof(&self) -> bool {
        self.tell() == self.size()
    }

    // =========================================================================
    // Convenience Reads
    // =========================================================================

    /// Read `size()` bytes from the current position in one call.
    ///
    /// Intended for a freshly opened handle. If the cursor has moved, fewer
    /// bytes may remain; the result is truncated to what was read.
    pub fn read_all(&mut self) -> Vec<u8> {
        let mut buf = vec![0u8; self.size() as usize];
        let n = self.read(&mut buf);
        buf.truncate(n);
        buf
    }

    /// Read the whole file as UTF-8 text, stripping a BOM if present.
    pub fn read_to_string(&mut self) -> Result<String> {
        let mut data = self.read_all();
        if data.starts_with(b"\xef\xbb\xbf") {
            data.drain(..3);
        }
        String::from_utf8(data).map_err(|_| VfsError::InvalidUtf8 {
            path: self.path.clone(),
        })
    }

    /// Read one line into `buf`, returning the number of bytes stored.
    ///
    /// Stops after consuming `\n`, at end of data, or once `buf.len() - 1`
    /// bytes are stored; in the last case an immediately following line
    /// ending is consumed too. A NUL byte is written at `buf[returned]`. An
    /// empty buffer reads nothing.
    pub fn read_line(&mut self, buf: &mut [u8]) -> usize {
        let Some(max) = buf.len().checked_sub(1) else {
            return 0;
        };

        let mut written = 0;
        while written < max {
            match self.get() {
                None | Some(b'\n') => break,
                Some(b'\r') => {}
                Some(byte) => {
                    buf[written] = byte;
                    written += 1;
                }
            }
        }
        if written == max {
            self.skip_line_ending();
        }
        buf[written] = 0;
        written
    }

    /// Consume a `\r`, `\n` or `\r\n` at the cursor, if present.
    fn skip_line_ending(&mut self) {
        if self.peek() == Some(b'\r') {
            self.get();
        }
        if self.peek() == Some(b'\n') {
            self.get();
        }
    }

    /// Read one line of any length, without its `\r`/`\n` bytes.
    ///
    /// Returns `None` at end of data when nothing was read. Invalid UTF-8 is
    /// replaced lossily.
    pub fn read_line_string(&mut self) -> Option<String> {
        let mut line = Vec::with_capacity(config::get().line_capacity);
        let mut consumed = false;
        while let Some(byte) = self.get() {
            consumed = true;
            match byte {
                b'\n' => break,
                b'\r' => {}
                _ => line.push(byte),
            }
        }
        consumed.then(|| String::from_utf8_lossy(&line).into_owned())
    }

    /// Iterate over the remaining lines.
    pub fn lines(&mut self) -> Lines<'_, 'a> {
        Lines { handle: self }
    }

    /// Read one byte, or `None` at end of data.
    pub fn get(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        (self.read(&mut byte) == 1).then_some(byte[0])
    }

    /// Return the next byte without consuming it.
    pub fn peek(&mut self) -> Option<u8> {
        let byte = self.get()?;
        self.seek(SeekFrom::Current(-1));
        Some(byte)
    }
}

impl fmt::Debug for FileHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("path", &self.path)
            .field("position", &self.tell())
            .field("size", &self.size())
            .finish()
    }
}

impl io::Read for FileHandle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(FileHandle::read(self, buf))
    }
}

impl io::Seek for FileHandle<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        FileHandle::seek(self, pos);
        Ok(self.tell())
    }
}

// =============================================================================
// Lines Iterator
// =============================================================================

/// Iterator over the lines of a [`FileHandle`], see [`FileHandle::lines`].
pub struct Lines<'h, 'a> {
    handle: &'h mut FileHandle<'a>,
}

impl Iterator for Lines<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.handle.read_line_string()
    }
}
