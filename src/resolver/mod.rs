//! Store resolvers: map a logical path to a byte source, or report absence.
//!
//! A resolver returning `None` is the normal "not here" outcome. The
//! [`VirtualFileSystem`](crate::VirtualFileSystem) then tries the next
//! resolver; only when every resolver misses does `open` fail.
//!
//! Backend failures (permission denied, corrupt archive, I/O errors) are
//! reported as absence too, and logged at `debug` level.

#[cfg(feature = "archive")]
mod archive;
mod directory;
mod map;

#[cfg(feature = "archive")]
pub use archive::ArchiveResolver;
pub use directory::DirectoryResolver;
pub use map::MapResolver;

use crate::source::ByteSource;

/// A backing store that can produce byte sources for logical paths.
///
/// # Example
///
/// ```
/// use layered_vfs::resolver::StoreResolver;
/// use layered_vfs::source::{ByteSource, MemorySource};
///
/// struct Greeting;
///
/// impl StoreResolver for Greeting {
///     fn open(&self, path: &str) -> Option<Box<dyn ByteSource>> {
///         (path == "hello.txt")
///             .then(|| Box::new(MemorySource::owned(b"hi".to_vec())) as Box<dyn ByteSource>)
///     }
/// }
/// ```
pub trait StoreResolver: Send + Sync {
    /// Try to produce a byte source for `path`.
    ///
    /// Returns `None` when this store cannot satisfy the path.
    fn open(&self, path: &str) -> Option<Box<dyn ByteSource>>;

    /// Check whether this store can satisfy `path`.
    ///
    /// The default opens the path and drops the result; backends where
    /// opening is expensive should override it.
    fn contains(&self, path: &str) -> bool {
        self.open(path).is_some()
    }
}

impl<R: StoreResolver + ?Sized> StoreResolver for Box<R> {
    fn open(&self, path: &str) -> Option<Box<dyn ByteSource>> {
        (**self).open(path)
    }

    fn contains(&self, path: &str) -> bool {
        (**self).contains(path)
    }
}
