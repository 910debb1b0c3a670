//! gzip tar writer
//!
//! The archive is assembled in a temporary file next to its destination and
//! only then persisted under the final name, without clobbering.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io;
use std::path::Path;

/// What ended up in a written archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Entries in the tar stream, including the wrapper directory itself
    pub entries: usize,
    /// Size of the compressed archive on disk
    pub bytes: u64,
}

/// Write `content_dir` to `dest` as a gzip tar whose only top-level entry is
/// `wrapper`.
///
/// Fails with `ErrorKind::AlreadyExists` if `dest` exists by the time the
/// archive is ready.
pub fn write_tar_gz(content_dir: &Path, wrapper: &str, dest: &Path) -> io::Result<ArchiveSummary> {
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let staging = tempfile::Builder::new()
        .prefix(".webship-")
        .suffix(".part")
        .tempfile_in(parent)?;

    let encoder = GzEncoder::new(staging.as_file(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.follow_symlinks(false);
    builder.append_dir_all(wrapper, content_dir)?;
    let encoder = builder.into_inner()?;
    encoder.finish()?.sync_all()?;

    let file = staging.persist_noclobber(dest).map_err(|e| e.error)?;
    let bytes = file.metadata()?.len();

    Ok(ArchiveSummary {
        entries: 1 + count_entries(content_dir)?,
        bytes,
    })
}

fn count_entries(dir: &Path) -> io::Result<usize> {
    let mut total = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        total += 1;
        if entry.file_type()?.is_dir() {
            total += count_entries(&entry.path())?;
        }
    }
    Ok(total)
}
