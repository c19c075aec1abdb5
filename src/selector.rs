//! Pick the dirty files out of the source directory.
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::operations::{EntryKind, FileSystemOps};

/// Token whose presence (any case) marks a file name as dirty.
pub const DIRTY_MARKER: &str = "z-lib";

/// A regular file in the source directory that needs cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyFile {
    /// Absolute path of the file, used for every filesystem call.
    pub path: PathBuf,
    /// File name decoded as UTF-8 (lossily if needed), used for naming.
    pub name: String,
}

/// Returns `true` if `name` carries the dirty marker, ignoring case.
#[must_use]
pub fn is_dirty_name(name: &str) -> bool {
    name.to_lowercase().contains(DIRTY_MARKER)
}

/// List the dirty regular files directly inside `source_dir`, sorted by name.
///
/// Directories, symlinks and special files are skipped, and nothing below
/// the first level is visited.
///
/// # Errors
///
/// Returns [`ScanError::DirectoryUnreadable`] if `source_dir` cannot be
/// listed; the whole run must stop.
pub fn select(fs: &dyn FileSystemOps, source_dir: &Path) -> Result<Vec<DirtyFile>, ScanError> {
    let entries = fs
        .read_dir(source_dir)
        .map_err(|source| ScanError::DirectoryUnreadable {
            path: source_dir.to_path_buf(),
            source,
        })?;

    let mut dirty: Vec<DirtyFile> = entries
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::File)
        .filter_map(|entry| {
            let name = entry.path.file_name()?.to_string_lossy().into_owned();
            is_dirty_name(&name).then_some(DirtyFile {
                path: entry.path,
                name,
            })
        })
        .collect();
    dirty.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirty)
}
