//! # layered-vfs
//!
//! A layered virtual file system: open files by logical path without caring
//! whether they live in a directory on disk, inside a zip or tar archive, or in
//! memory.
//!
//! A [`VirtualFileSystem`] holds an ordered list of resolvers. Opening a path
//! asks each resolver in registration order; the first one that has the file
//! wins. This makes overrides trivial: register a loose-file directory before
//! the bundled archive it should shadow.
//!
//! ## Quick Start
//!
//! ```ignore
//! use layered_vfs::VirtualFileSystem;
//!
//! let vfs = VirtualFileSystem::builder()
//!     .root("mods")                 // checked first
//!     .archive("assets.tar.gz")     // fallback
//!     .build();
//!
//! let mut file = vfs.open("config/settings.ini")?;
//! for line in file.lines() {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Building Blocks
//!
//! - [`source`]: byte sources ([`MemorySource`], [`StreamSource`])
//! - [`resolver`]: stores ([`DirectoryResolver`], [`ArchiveResolver`], [`MapResolver`])
//! - [`vfs`]: ordered resolution, builder, global instance
//! - [`handle`]: [`FileHandle`] with line reads, `get`/`peek`, `eof`
//! - [`config`]: runtime limits
//!
//! ## Errors
//!
//! A resolver that cannot serve a path reports absence, not an error. Only
//! when every resolver misses does [`VirtualFileSystem::open`] return
//! [`VfsError::NotFound`]. Short reads are plain byte counts.
//!
//! ## Features
//!
//! - `archive` (default): [`ArchiveResolver`] for `.zip`, `.tar` and `.tar.gz`
//! - `batch` (default): parallel [`VirtualFileSystem::open_many`] via rayon

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handle;
pub mod resolver;
pub mod source;
pub mod vfs;

#[cfg(test)]
mod test_support;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use layered_vfs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ByteSource, DirectoryResolver, FileHandle, MapResolver, MemorySource, StoreResolver,
        VfsError, VirtualFileSystem,
    };

    #[cfg(feature = "archive")]
    pub use crate::ArchiveResolver;
}

// =============================================================================
// File System
// =============================================================================

pub use handle::{FileHandle, Lines};
pub use vfs::{open_global, set_global_fs, with_global_fs, VfsBuilder, VirtualFileSystem};

// =============================================================================
// Stores and Sources
// =============================================================================

#[cfg(feature = "archive")]
pub use resolver::ArchiveResolver;
pub use resolver::{DirectoryResolver, MapResolver, StoreResolver};
pub use source::{Buffer, ByteSource, MemorySource, StreamSource};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Config, ConfigBuilder};
pub use error::{Result, VfsError};
