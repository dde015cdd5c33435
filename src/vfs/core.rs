//! `VirtualFileSystem` - ordered resolution over registered stores.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, trace};

use super::builder::VfsBuilder;
use crate::error::{Result, VfsError};
use crate::handle::FileHandle;
use crate::resolver::{DirectoryResolver, StoreResolver};
use crate::source::ByteSource;

/// A file system made of resolvers tried in registration order.
///
/// The first resolver that produces a source wins; later resolvers are not
/// consulted. Register overrides (e.g. a loose-file directory) before the
/// stores they should shadow (e.g. a bundled archive).
///
/// # Example
///
/// ```no_run
/// use layered_vfs::VirtualFileSystem;
///
/// let vfs = VirtualFileSystem::with_roots(["mods", "assets"]);
/// let mut file = vfs.open("textures/grass.png")?;
/// let bytes = file.read_all();
/// # Ok::<(), layered_vfs::VfsError>(())
/// ```
#[derive(Default)]
pub struct VirtualFileSystem {
    resolvers: Vec<Box<dyn StoreResolver>>,
}

impl VirtualFileSystem {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system serving files from one directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let mut vfs = Self::new();
        vfs.add_resolver(DirectoryResolver::new(root));
        vfs
    }

    /// Create a file system serving files from several directories.
    ///
    /// Earlier roots take precedence over later ones.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut vfs = Self::new();
        for root in roots {
            vfs.add_resolver(DirectoryResolver::new(root));
        }
        vfs
    }

    /// Start building a file system.
    pub fn builder() -> VfsBuilder {
        VfsBuilder::new()
    }

    /// Append a resolver with the lowest precedence so far.
    pub fn add_resolver(&mut self, resolver: impl StoreResolver + 'static) {
        self.add_boxed(Box::new(resolver));
    }

    /// Append an already boxed resolver.
    pub fn add_boxed(&mut self, resolver: Box<dyn StoreResolver>) {
        self.resolvers.push(resolver);
    }

    /// Number of registered resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Check if no resolver is registered.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Open a logical path.
    ///
    /// Returns [`VfsError::NotFound`] only after every resolver has reported
    /// absence.
    pub fn open(&self, path: &str) -> Result<FileHandle<'static>> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            if let Some(source) = resolver.open(path) {
                trace!(path, resolver = index, size = source.size(), "resolved");
                return Ok(FileHandle::from_boxed(path, source));
            }
        }

        debug!(path, resolvers = self.resolvers.len(), "no resolver matched");
        Err(VfsError::not_found(path))
    }

    /// Check whether any resolver can satisfy `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.resolvers.iter().any(|resolver| resolver.contains(path))
    }
}

impl fmt::Debug for VirtualFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualFileSystem")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}
