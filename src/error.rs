//! Error type for file system operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VfsError>;

/// Error type for virtual file system failures.
///
/// A single resolver failing to produce a file is *not* an error: resolvers
/// report absence with `None` and the file system moves on to the next one.
/// Only when every resolver has missed does [`VfsError::NotFound`] surface.
///
/// # Example
///
/// ```ignore
/// match vfs.open("textures/grass.png") {
///     Ok(file) => { /* use file */ }
///     Err(VfsError::NotFound { path }) => eprintln!("missing asset: {path}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum VfsError {
    /// No registered resolver could produce the requested path.
    #[error("failed opening file {path}")]
    NotFound {
        /// The logical path that was requested.
        path: String,
    },

    /// File content is not valid UTF-8.
    #[error("file {path} is not valid UTF-8")]
    InvalidUtf8 {
        /// The logical path of the offending file.
        path: String,
    },
}

impl VfsError {
    /// Create a not-found error for a logical path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// The logical path this error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::InvalidUtf8 { path } => path,
        }
    }

    /// Check if this error means the file does not exist in any store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = VfsError::not_found("data/levels.bin");
        assert_eq!(err.to_string(), "failed opening file data/levels.bin");
        assert_eq!(err.path(), "data/levels.bin");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_utf8_is_not_not_found() {
        let err = VfsError::InvalidUtf8 {
            path: "a.txt".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.path(), "a.txt");
    }
}
