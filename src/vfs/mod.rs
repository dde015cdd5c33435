//! Virtual file system: ordered resolution over backing stores.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Resolution Flow                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  open("textures/grass.png")                                 │
//! │        │                                                    │
//! │        ├─► resolver 0 (DirectoryResolver "mods")  ── miss   │
//! │        │                                                    │
//! │        ├─► resolver 1 (ArchiveResolver "assets.tar") ─ hit  │
//! │        │       └─► FileHandle(MemorySource)                 │
//! │        │                                                    │
//! │        └─► resolver 2 ... never consulted                   │
//! │                                                             │
//! │  all miss ──► VfsError::NotFound                            │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "batch")]
mod batch;
mod builder;
mod core;
mod global;

pub use builder::VfsBuilder;
pub use self::core::VirtualFileSystem;
pub use global::{open_global, set_global_fs, with_global_fs};
