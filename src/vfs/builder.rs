//! Builder pattern for `VirtualFileSystem`.

use std::path::PathBuf;

use super::core::VirtualFileSystem;
#[cfg(feature = "archive")]
use crate::resolver::ArchiveResolver;
use crate::resolver::{DirectoryResolver, MapResolver, StoreResolver};

/// Builder for configuring a [`VirtualFileSystem`].
///
/// Stores are registered in call order, which is also their precedence.
///
/// # Example
///
/// ```ignore
/// let vfs = VirtualFileSystem::builder()
///     .root("mods")
///     .archive("assets.zip")
///     .build();
/// ```
#[derive(Default)]
pub struct VfsBuilder {
    resolvers: Vec<Box<dyn StoreResolver>>,
}

impl VfsBuilder {
    /// Create a new builder with no stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve files from a directory.
    pub fn root(self, root: impl Into<PathBuf>) -> Self {
        self.resolver(DirectoryResolver::new(root))
    }

    /// Serve files from several directories, earlier ones first.
    pub fn roots<I, P>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        roots.into_iter().fold(self, |builder, root| builder.root(root))
    }

    /// Serve entries of a zip, tar or tar.gz archive.
    #[cfg(feature = "archive")]
    pub fn archive(self, archive: impl Into<PathBuf>) -> Self {
        self.resolver(ArchiveResolver::new(archive))
    }

    /// Serve in-memory files.
    pub fn memory(self, files: MapResolver) -> Self {
        self.resolver(files)
    }

    /// Register any resolver.
    pub fn resolver(mut self, resolver: impl StoreResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Build the file system.
    pub fn build(self) -> VirtualFileSystem {
        let mut vfs = VirtualFileSystem::new();
        for resolver in self.resolvers {
            vfs.add_boxed(resolver);
        }
        vfs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_preserves_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "disk").unwrap();

        let mut files = MapResolver::new();
        files.insert("a.txt", "memory");
        files.insert("b.txt", "memory only");

        let vfs = VfsBuilder::new().root(dir.path()).memory(files).build();
        assert_eq!(vfs.len(), 2);
        assert_eq!(vfs.open("a.txt").unwrap().read_all(), b"disk");
        assert_eq!(vfs.open("b.txt").unwrap().read_all(), b"memory only");
    }

    #[test]
    fn test_roots() {
        let vfs = VirtualFileSystem::builder().roots(["a", "b", "c"]).build();
        assert_eq!(vfs.len(), 3);
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_archive() {
        use crate::test_support::write_tar_gz;

        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("bundle.tar.gz");
        write_tar_gz(&archive, &[("x.txt", &b"packed"[..])]);

        let vfs = VirtualFileSystem::builder().archive(&archive).build();
        assert_eq!(vfs.open("x.txt").unwrap().read_all(), b"packed");
    }
}
