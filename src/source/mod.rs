//! Byte sources: readable, seekable, sized streams.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ByteSource                   │
//! │   read(buf) -> n   seek(pos)   tell   size   │
//! ├──────────────────────┬───────────────────────┤
//! │    MemorySource      │     StreamSource      │
//! │  Owned / Shared /    │  any Read + Seek      │
//! │  Borrowed buffer     │  (std::fs::File)      │
//! └──────────────────────┴───────────────────────┘
//! ```
//!
//! # Short reads
//!
//! `read` returns the number of bytes actually copied. A count smaller than
//! the buffer means the end of data was reached; it is not an error and
//! callers must check the count.
//!
//! # Seeking
//!
//! Seeks never fail from the caller's point of view. A cursor may be moved
//! past the end of the data; subsequent reads then return 0.

mod memory;
mod stream;

pub use memory::{Buffer, MemorySource};
pub use stream::StreamSource;

use std::io::SeekFrom;

/// A readable, seekable byte stream of fixed size.
///
/// Implemented by [`MemorySource`] and [`StreamSource`]; resolvers hand
/// these out as `Box<dyn ByteSource>`.
pub trait ByteSource: Send {
    /// Copy up to `buf.len()` bytes from the cursor into `buf`.
    ///
    /// Advances the cursor by the returned count. Returns 0 for an empty
    /// buffer or when the cursor is at or past the end.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Reposition the cursor relative to start, current position or end.
    fn seek(&mut self, pos: SeekFrom);

    /// Current cursor position in bytes from the start.
    fn tell(&self) -> u64;

    /// Total length of the underlying data.
    fn size(&self) -> u64;
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }

    fn seek(&mut self, pos: SeekFrom) {
        (**self).seek(pos)
    }

    fn tell(&self) -> u64 {
        (**self).tell()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}
