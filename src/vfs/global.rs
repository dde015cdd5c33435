//! Process-wide file system instance.
//!
//! Lets an application configure its stores once at startup and open files
//! from anywhere without threading a `VirtualFileSystem` through every call.

use std::sync::LazyLock;

use parking_lot::RwLock;

use super::core::VirtualFileSystem;
use crate::error::Result;
use crate::handle::FileHandle;

/// Global file system instance, empty until [`set_global_fs`] is called.
static GLOBAL_FS: LazyLock<RwLock<VirtualFileSystem>> =
    LazyLock::new(|| RwLock::new(VirtualFileSystem::new()));

/// Replace the global file system.
pub fn set_global_fs(fs: VirtualFileSystem) {
    *GLOBAL_FS.write() = fs;
}

/// Open a logical path through the global file system.
pub fn open_global(path: &str) -> Result<FileHandle<'static>> {
    GLOBAL_FS.read().open(path)
}

/// Run `f` with shared access to the global file system.
///
/// The read lock is held for as long as `f` runs. Calling
/// [`set_global_fs`] from inside `f` deadlocks; `open_global` is fine since
/// read locks are shared.
pub fn with_global_fs<T>(f: impl FnOnce(&VirtualFileSystem) -> T) -> T {
    f(&GLOBAL_FS.read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MapResolver;

    // Single test: the global is shared by every test in the binary.
    #[test]
    fn test_global_fs() {
        let mut files = MapResolver::new();
        files.insert("global.txt", "shared");

        let mut vfs = VirtualFileSystem::new();
        vfs.add_resolver(files);
        set_global_fs(vfs);

        assert_eq!(open_global("global.txt").unwrap().read_all(), b"shared");
        assert!(open_global("missing.txt").unwrap_err().is_not_found());
        assert_eq!(with_global_fs(|fs| fs.len()), 1);
    }
}
