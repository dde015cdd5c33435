//! In-memory resolver backed by a path map.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::StoreResolver;
use crate::source::{ByteSource, MemorySource};

/// Serves files held in memory, keyed by logical path.
///
/// Suited to generated content and test fixtures. Contents are stored once
/// as `Arc<[u8]>`; every `open` returns a fresh [`MemorySource`] cursor over
/// those bytes without copying them, so handles never see each other's
/// position.
///
/// # Example
///
/// ```
/// use layered_vfs::resolver::MapResolver;
///
/// let mut files = MapResolver::new();
/// files.insert("config/site.json", r#"{"title":"My Game"}"#);
/// assert!(files.contains_path("config/site.json"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapResolver {
    files: FxHashMap<String, Arc<[u8]>>,
}

impl MapResolver {
    /// Create a new empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store UTF-8 text under `path`, replacing any previous content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl AsRef<str>) {
        self.insert_bytes(path, content.as_ref().as_bytes());
    }

    /// Store raw bytes under `path`.
    pub fn insert_bytes(&mut self, path: impl Into<String>, content: impl Into<Arc<[u8]>>) {
        self.files.insert(path.into(), content.into());
    }

    /// Whether `path` is stored here.
    pub fn contains_path(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Remove a file, returning its content.
    pub fn remove(&mut self, path: &str) -> Option<Arc<[u8]>> {
        self.files.remove(path)
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Stored paths, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl StoreResolver for MapResolver {
    fn open(&self, path: &str) -> Option<Box<dyn ByteSource>> {
        let data = self.files.get(path)?;
        Some(Box::new(MemorySource::shared(Arc::clone(data))))
    }

    fn contains(&self, path: &str) -> bool {
        self.contains_path(path)
    }
}
