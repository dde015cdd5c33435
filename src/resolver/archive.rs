//! Resolver over a zip or tar archive.
//!
//! The format is chosen from the archive's leading bytes: zip (`PK\x03\x04`
//! or an empty archive's `PK\x05\x06`), gzip-compressed tar (`1f 8b`), and
//! plain tar otherwise.
//!
//! Entries are decoded completely into memory on open. This keeps the
//! resulting source seekable, but means very large entries cost their full
//! size in RAM; [`Config::max_entry_size`](crate::config::Config) bounds it.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::{debug, trace};
use zip::ZipArchive;
use zip::result::ZipError;

use super::StoreResolver;
use crate::config;
use crate::source::{ByteSource, MemorySource};

/// Leading bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Leading bytes of a zip local file header.
const ZIP_MAGIC: [u8; 4] = *b"PK\x03\x04";

/// Leading bytes of a zip with no entries (end of central directory only).
const ZIP_EMPTY_MAGIC: [u8; 4] = *b"PK\x05\x06";

/// Container format detected from the archive's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Zip,
    TarGz,
    Tar,
}

impl Format {
    fn detect(magic: &[u8]) -> Self {
        if magic.starts_with(&ZIP_MAGIC) || magic.starts_with(&ZIP_EMPTY_MAGIC) {
            Self::Zip
        } else if magic.starts_with(&GZIP_MAGIC) {
            Self::TarGz
        } else {
            Self::Tar
        }
    }
}

/// Serves entries of a `.zip`, `.tar` or `.tar.gz` archive.
///
/// The archive is opened afresh on every call; nothing is indexed or kept
/// open between calls.
#[derive(Debug, Clone)]
pub struct ArchiveResolver {
    archive: PathBuf,
    max_entry_size: Option<u64>,
}

impl ArchiveResolver {
    /// Create a resolver for the archive at `archive`.
    pub fn new(archive: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
            max_entry_size: None,
        }
    }

    /// Override the global entry size limit for this resolver.
    pub fn with_max_entry_size(mut self, bytes: u64) -> Self {
        self.max_entry_size = Some(bytes);
        self
    }

    /// Path of the archive file.
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    fn max_entry_size(&self) -> u64 {
        self.max_entry_size
            .unwrap_or_else(|| config::get().max_entry_size)
    }

    /// Scan the archive for `name`, optionally reading its data.
    ///
    /// Returns `Ok(None)` when the entry is missing or too large.
    fn find_entry(&self, name: &str, read_data: bool) -> io::Result<Option<Vec<u8>>> {
        let mut file = File::open(&self.archive)?;

        let mut magic = [0u8; 4];
        let mut len = 0;
        while len < magic.len() {
            match file.read(&mut magic[len..]) {
                Ok(0) => break,
                Ok(n) => len += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        file.seek(SeekFrom::Start(0))?;

        match Format::detect(&magic[..len]) {
            Format::Zip => self.find_zip_entry(file, name, read_data),
            Format::TarGz => {
                let reader = GzDecoder::new(BufReader::new(file));
                self.find_tar_entry(reader, name, read_data)
            }
            Format::Tar => self.find_tar_entry(BufReader::new(file), name, read_data),
        }
    }

    fn find_zip_entry(
        &self,
        file: File,
        name: &str,
        read_data: bool,
    ) -> io::Result<Option<Vec<u8>>> {
        let mut archive = ZipArchive::new(BufReader::new(file)).map_err(zip_error)?;
        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(zip_error(e)),
        };
        if entry.is_dir() {
            return Ok(None);
        }

        let size = entry.size();
        if !self.within_limit(name, size) {
            return Ok(None);
        }
        if !read_data {
            return Ok(Some(Vec::new()));
        }

        let mut data = Vec::with_capacity(size as usize);
        entry.read_to_end(&mut data)?;
        Ok(Some(data))
    }

    fn find_tar_entry<R: Read>(
        &self,
        reader: R,
        name: &str,
        read_data: bool,
    ) -> io::Result<Option<Vec<u8>>> {
        let mut archive = Archive::new(reader);

        for entry in archive.entries()? {
            let mut entry = entry?;
            if !entry.header().entry_type().is_file() || !entry_matches(&entry.path_bytes(), name)
            {
                continue;
            }

            let size = entry.size();
            if !self.within_limit(name, size) {
                return Ok(None);
            }
            if !read_data {
                return Ok(Some(Vec::new()));
            }

            let mut data = Vec::with_capacity(size as usize);
            entry.read_to_end(&mut data)?;
            return Ok(Some(data));
        }
        Ok(None)
    }

    fn within_limit(&self, name: &str, size: u64) -> bool {
        let limit = self.max_entry_size();
        if size > limit {
            debug!(
                archive = %self.archive.display(),
                entry = name,
                size,
                limit,
                "archive entry exceeds size limit"
            );
            return false;
        }
        true
    }
}

/// Compare a raw tar path against a logical path, ignoring a leading `./`.
fn entry_matches(raw: &[u8], name: &str) -> bool {
    raw.strip_prefix(b"./").unwrap_or(raw) == name.as_bytes()
}

fn zip_error(e: ZipError) -> io::Error {
    match e {
        ZipError::Io(e) => e,
        e => io::Error::new(io::ErrorKind::InvalidData, e),
    }
}

impl StoreResolver for ArchiveResolver {
    fn open(&self, path: &str) -> Option<Box<dyn ByteSource>> {
        match self.find_entry(path, true) {
            Ok(Some(data)) => {
                trace!(
                    archive = %self.archive.display(),
                    entry = path,
                    size = data.len(),
                    "decoded archive entry"
                );
                Some(Box::new(MemorySource::owned(data)))
            }
            Ok(None) => None,
            Err(e) => {
                debug!(
                    archive = %self.archive.display(),
                    entry = path,
                    error = %e,
                    "failed to read archive"
                );
                None
            }
        }
    }

    fn contains(&self, path: &str) -> bool {
        matches!(self.find_entry(path, false), Ok(Some(_)))
    }
}
