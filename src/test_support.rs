//! Fixtures shared by unit tests.

#[cfg(feature = "archive")]
use std::fs::File;
#[cfg(feature = "archive")]
use std::path::Path;

/// Write a plain tar archive containing `entries`.
#[cfg(feature = "archive")]
pub(crate) fn write_tar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let builder = build_tar(file, entries);
    builder.into_inner().unwrap();
}

/// Write a gzip-compressed tar archive containing `entries`.
#[cfg(feature = "archive")]
pub(crate) fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let file = File::create(path).unwrap();
    let builder = build_tar(GzEncoder::new(file, Compression::default()), entries);
    builder.into_inner().unwrap().finish().unwrap();
}

#[cfg(feature = "archive")]
fn build_tar<W: std::io::Write>(writer: W, entries: &[(&str, &[u8])]) -> tar::Builder<W> {
    let mut builder = tar::Builder::new(writer);
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.finish().unwrap();
    builder
}

/// Write a zip archive containing `entries`.
#[cfg(feature = "archive")]
pub(crate) fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, data) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}
