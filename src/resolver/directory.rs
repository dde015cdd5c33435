//! Resolver over a directory on disk.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::StoreResolver;
use crate::source::{ByteSource, StreamSource};

/// Serves files from a root directory.
///
/// A logical path is appended to the root with a `/` separator, verbatim:
/// no normalisation is applied and no traversal rules are enforced.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    /// Create a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join root and logical path as `root/path`.
    fn full_path(&self, path: &str) -> PathBuf {
        let mut full = OsString::from(self.root.as_os_str());
        full.push("/");
        full.push(path);
        PathBuf::from(full)
    }
}

impl StoreResolver for DirectoryResolver {
    fn open(&self, path: &str) -> Option<Box<dyn ByteSource>> {
        let full = self.full_path(path);

        // Directories open fine on some platforms but are never files
        match fs::metadata(&full) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                trace!(path = %full.display(), "not a regular file");
                return None;
            }
            Err(e) => {
                trace!(path = %full.display(), error = %e, "not in directory");
                return None;
            }
        }

        let source = File::open(&full).and_then(StreamSource::new);
        match source {
            Ok(source) => Some(Box::new(source)),
            Err(e) => {
                debug!(path = %full.display(), error = %e, "failed to open file");
                None
            }
        }
    }

    fn contains(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_existing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/a.txt"), "content").unwrap();

        let resolver = DirectoryResolver::new(dir.path());
        let mut source = resolver.open("sub/a.txt").unwrap();
        assert_eq!(source.size(), 7);

        let mut buf = [0u8; 7];
        assert_eq!(source.read(&mut buf), 7);
        assert_eq!(&buf, b"content");
    }

    #[test]
    fn test_missing_is_absent() {
        let dir = TempDir::new().unwrap();
        let resolver = DirectoryResolver::new(dir.path());
        assert!(resolver.open("nope.txt").is_none());
        assert!(!resolver.contains("nope.txt"));
    }

    #[test]
    fn test_directory_is_absent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let resolver = DirectoryResolver::new(dir.path());
        assert!(resolver.open("sub").is_none());
        assert!(!resolver.contains("sub"));
    }

    #[test]
    fn test_full_path_concatenates() {
        let resolver = DirectoryResolver::new("/assets");
        assert_eq!(resolver.full_path("a/b.txt"), PathBuf::from("/assets/a/b.txt"));
        assert_eq!(resolver.root(), Path::new("/assets"));
    }
}
