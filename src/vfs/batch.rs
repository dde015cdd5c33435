//! Parallel opening of many paths.
//!
//! Resolvers are immutable and `Sync`, so independent `open` calls can run
//! on rayon's pool. Each path still resolves on its own: nothing is shared
//! or cached between them.

use rayon::prelude::*;

use super::core::VirtualFileSystem;
use crate::error::Result;
use crate::handle::FileHandle;

impl VirtualFileSystem {
    /// Open every path in parallel. Results keep the input order.
    pub fn open_many(&self, paths: &[&str]) -> Vec<Result<FileHandle<'static>>> {
        paths.par_iter().map(|path| self.open(path)).collect()
    }

    /// Open and fully read every path in parallel. Results keep the input order.
    pub fn read_many(&self, paths: &[&str]) -> Vec<Result<Vec<u8>>> {
        paths
            .par_iter()
            .map(|path| self.open(path).map(|mut file| file.read_all()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MapResolver;

    #[test]
    fn test_read_many_keeps_order() {
        let mut files = MapResolver::new();
        for i in 0..32 {
            files.insert(format!("{i}.txt"), i.to_string());
        }
        let vfs = VirtualFileSystem::builder().memory(files).build();

        let names: Vec<String> = (0..32).map(|i| format!("{i}.txt")).collect();
        let paths: Vec<&str> = names.iter().map(String::as_str).collect();
        let results = vfs.read_many(&paths);

        for (i, result) in results.into_iter().enumerate() {
            assert_eq!(result.unwrap(), i.to_string().into_bytes());
        }
    }

    #[test]
    fn test_open_many_reports_missing() {
        let mut files = MapResolver::new();
        files.insert("a.txt", "a");
        let vfs = VirtualFileSystem::builder().memory(files).build();

        let results = vfs.open_many(&["a.txt", "b.txt"]);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_not_found());
    }
}
