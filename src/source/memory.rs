//! In-memory byte source.

use std::io::SeekFrom;
use std::sync::Arc;

use super::ByteSource;

// =============================================================================
// Buffer - Ownership of the backing bytes
// =============================================================================

/// Backing storage of a [`MemorySource`].
#[derive(Debug, Clone)]
pub enum Buffer<'a> {
    /// The source owns its bytes and frees them on drop.
    Owned(Vec<u8>),
    /// Immutable bytes shared with other sources (e.g. a `MapResolver`).
    Shared(Arc<[u8]>),
    /// Caller-owned bytes; the borrow keeps them alive.
    Borrowed(&'a [u8]),
}

impl Buffer<'_> {
    /// View the backing bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(data) => data,
            Self::Shared(data) => data,
            Self::Borrowed(data) => data,
        }
    }
}

// =============================================================================
// MemorySource
// =============================================================================

/// A [`ByteSource`] over a contiguous buffer known in full up front.
///
/// # Example
///
/// ```
/// use layered_vfs::source::{ByteSource, MemorySource};
///
/// let data = b"hello world";
/// let mut src = MemorySource::borrowed(data);
/// let mut buf = [0u8; 5];
/// assert_eq!(src.read(&mut buf), 5);
/// assert_eq!(&buf, b"hello");
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource<'a> {
    data: Buffer<'a>,
    position: u64,
}

impl<'a> MemorySource<'a> {
    /// Create a source over the given buffer, positioned at the start.
    pub fn new(data: Buffer<'a>) -> Self {
        Self { data, position: 0 }
    }

    /// Create a source that borrows caller memory.
    pub fn borrowed(data: &'a [u8]) -> Self {
        Self::new(Buffer::Borrowed(data))
    }

    /// Whether this source owns its buffer exclusively.
    pub fn is_owned(&self) -> bool {
        matches!(self.data, Buffer::Owned(_))
    }

    /// The whole backing buffer, independent of the cursor.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_slice()
    }

    #[inline]
    fn len(&self) -> u64 {
        self.data.as_slice().len() as u64
    }
}

impl MemorySource<'static> {
    /// Create a source that owns its buffer.
    pub fn owned(data: Vec<u8>) -> Self {
        Self::new(Buffer::Owned(data))
    }

    /// Create a source over shared immutable bytes.
    pub fn shared(data: Arc<[u8]>) -> Self {
        Self::new(Buffer::Shared(data))
    }
}

impl From<Vec<u8>> for MemorySource<'static> {
    fn from(data: Vec<u8>) -> Self {
        Self::owned(data)
    }
}

impl<'a> From<&'a [u8]> for MemorySource<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::borrowed(data)
    }
}

impl ByteSource for MemorySource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let len = self.len();
        let remaining = len.saturating_sub(self.position);
        let count = remaining.min(buf.len() as u64) as usize;
        if count == 0 {
            return 0;
        }

        // count > 0 implies position < len, so the cast cannot truncate
        let start = self.position as usize;
        buf[..count].copy_from_slice(&self.data.as_slice()[start..start + count]);
        self.position += count as u64;
        count
    }

    fn seek(&mut self, pos: SeekFrom) {
        let len = self.len();
        self.position = match pos {
            SeekFrom::Start(offset) => offset,
            SeekFrom::Current(delta) => self.position.saturating_add_signed(delta),
            // End-relative seeks never land past the end
            SeekFrom::End(delta) => len.saturating_add_signed(delta).min(len),
        };
    }

    fn tell(&self) -> u64 {
        self.position
    }

    fn size(&self) -> u64 {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_reports_byte_count() {
        let mut src = MemorySource::owned(b"0123456789".to_vec());
        let mut buf = [0u8; 4];
        assert_eq!(src.read(&mut buf), 4);
        assert_eq!(&buf, b"0123");
        assert_eq!(src.tell(), 4);
    }

    #[test]
    fn test_short_read_at_end() {
        let mut src = MemorySource::borrowed(b"abc");
        let mut buf = [0u8; 8];
        assert_eq!(src.read(&mut buf), 3);
        assert_eq!(&buf[..3], b"abc");
        assert_eq!(src.read(&mut buf), 0);
        assert_eq!(src.tell(), 3);
    }

    #[test]
    fn test_zero_length_read() {
        let mut src = MemorySource::borrowed(b"abc");
        src.seek(SeekFrom::Start(1));
        assert_eq!(src.read(&mut []), 0);
        assert_eq!(src.tell(), 1);
    }

    #[test]
    fn test_seek_end_and_start() {
        let mut src = MemorySource::borrowed(b"abcdef");
        src.seek(SeekFrom::End(0));
        assert_eq!(src.tell(), src.size());
        src.seek(SeekFrom::Start(0));
        assert_eq!(src.tell(), 0);
    }

    #[test]
    fn test_seek_end_clamps_to_zero() {
        let data = b"abcdef";
        let mut src = MemorySource::borrowed(data);
        src.seek(SeekFrom::End(-(data.len() as i64 + 10)));
        assert_eq!(src.tell(), 0);
    }

    #[test]
    fn test_seek_end_clamps_overshoot() {
        let mut src = MemorySource::borrowed(b"abcdef");
        src.seek(SeekFrom::End(5));
        assert_eq!(src.tell(), 6);
    }

    #[test]
    fn test_seek_start_past_end_is_lenient() {
        let mut src = MemorySource::borrowed(b"abc");
        src.seek(SeekFrom::Start(10));
        assert_eq!(src.tell(), 10);

        let mut buf = [0u8; 2];
        assert_eq!(src.read(&mut buf), 0);
        assert_eq!(src.tell(), 10);
    }

    #[test]
    fn test_seek_current() {
        let mut src = MemorySource::borrowed(b"abcdef");
        src.seek(SeekFrom::Current(4));
        src.seek(SeekFrom::Current(-1));
        assert_eq!(src.tell(), 3);

        src.seek(SeekFrom::Current(-10));
        assert_eq!(src.tell(), 0);
    }

    #[test]
    fn test_ownership() {
        assert!(MemorySource::owned(vec![1, 2, 3]).is_owned());
        assert!(!MemorySource::borrowed(&[1, 2, 3]).is_owned());

        let shared: Arc<[u8]> = Arc::from(&b"xyz"[..]);
        let a = MemorySource::shared(shared.clone());
        let mut b = MemorySource::shared(shared);
        assert!(!a.is_owned());

        // Independent cursors over the same bytes
        let mut buf = [0u8; 2];
        b.read(&mut buf);
        assert_eq!(a.tell(), 0);
        assert_eq!(b.tell(), 2);
        assert_eq!(a.as_bytes(), b"xyz");
    }
}
