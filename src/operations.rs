//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the selector and the link
//! executor can be unit-tested without touching the real filesystem.
//! Production code uses [`SystemFileSystemOps`]; tests use `MockFileSystemOps`,
//! which can also inject failures for individual targets.

use std::io;
use std::path::{Path, PathBuf};

/// Kind of a directory entry, as reported without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// A symbolic link (never followed).
    Symlink,
    /// Sockets, FIFOs, devices and anything else.
    Other,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Abstraction over the filesystem calls made by a cleanup run.
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Returns `true` if anything (including a dangling symlink) occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is a directory (symlinks followed).
    fn is_dir(&self, path: &Path) -> bool;

    /// Return the immediate children of `path` with their kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be opened or read as a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Create a hard link at `link` referring to `original`.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::AlreadyExists`] when `link` is occupied,
    /// or with the underlying OS error otherwise.
    fn hard_link(&self, original: &Path, link: &Path) -> io::Result<()>;

    /// Move `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS error. Platform renames may replace an
    /// existing `to`; callers must check for occupation first.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        std::fs::read_dir(path)?
            .map(|entry| {
                let entry = entry?;
                let file_type = entry.file_type()?;
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_file() {
                    EntryKind::File
                } else if file_type.is_dir() {
                    EntryKind::Dir
                } else {
                    EntryKind::Other
                };
                Ok(DirEntry::new(entry.path(), kind))
            })
            .collect()
    }

    fn hard_link(&self, original: &Path, link: &Path) -> io::Result<()> {
        std::fs::hard_link(original, link)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// A mutating call recorded by `MockFileSystemOps`.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockWrite {
    /// `hard_link(original, link)` was attempted.
    HardLink(PathBuf, PathBuf),
    /// `rename(from, to)` was attempted.
    Rename(PathBuf, PathBuf),
}

/// Mock [`FileSystemOps`] for unit tests.
///
/// Pre-configure existing paths, directory listings and per-target failures
/// with the builder-style methods. Every attempted write is recorded and can
/// be inspected with [`writes`](Self::writes).
///
/// # Example
///
/// ```ignore
/// let fs = MockFileSystemOps::new()
///     .with_dir_entries("/src", vec![DirEntry::new("/src/a (z-lib.org).pdf", EntryKind::File)])
///     .with_dir("/dst")
///     .with_failure("/dst/a.pdf", std::io::ErrorKind::PermissionDenied);
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    existing: std::sync::Mutex<std::collections::HashSet<PathBuf>>,
    dirs: std::collections::HashMap<PathBuf, Vec<DirEntry>>,
    failures: std::collections::HashMap<PathBuf, io::ErrorKind>,
    writes: std::sync::Mutex<Vec<MockWrite>>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl MockFileSystemOps {
    /// Create an empty mock with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as occupied.
    #[must_use]
    pub fn with_existing(self, path: impl Into<PathBuf>) -> Self {
        self.existing
            .lock()
            .expect("mock existing set poisoned")
            .insert(path.into());
        self
    }

    /// Register an empty directory at `dir`.
    #[must_use]
    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.with_dir_entries(dir, Vec::new())
    }

    /// Set the entries returned by [`FileSystemOps::read_dir`] for `dir`.
    ///
    /// Marks `dir` and every entry path as existing.
    #[must_use]
    pub fn with_dir_entries(mut self, dir: impl Into<PathBuf>, entries: Vec<DirEntry>) -> Self {
        let dir = dir.into();
        {
            let mut existing = self.existing.lock().expect("mock existing set poisoned");
            existing.insert(dir.clone());
            existing.extend(entries.iter().map(|e| e.path.clone()));
        }
        self.dirs.insert(dir, entries);
        self
    }

    /// Make every write whose destination is `target` fail with `kind`.
    #[must_use]
    pub fn with_failure(mut self, target: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.insert(target.into(), kind);
        self
    }

    /// Every write attempted so far, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<MockWrite> {
        self.writes.lock().expect("mock writes poisoned").clone()
    }

    fn attempt(&self, write: MockWrite, target: &Path) -> io::Result<()> {
        self.writes.lock().expect("mock writes poisoned").push(write);
        if let Some(kind) = self.failures.get(target) {
            return Err(io::Error::from(*kind));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl FileSystemOps for MockFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        self.existing
            .lock()
            .expect("mock existing set poisoned")
            .contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains_key(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn hard_link(&self, original: &Path, link: &Path) -> io::Result<()> {
        self.attempt(
            MockWrite::HardLink(original.to_path_buf(), link.to_path_buf()),
            link,
        )?;
        let mut existing = self.existing.lock().expect("mock existing set poisoned");
        if !existing.insert(link.to_path_buf()) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.attempt(MockWrite::Rename(from.to_path_buf(), to.to_path_buf()), to)?;
        let mut existing = self.existing.lock().expect("mock existing set poisoned");
        existing.remove(from);
        existing.insert(to.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn system_read_dir_reports_kinds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("file.txt"), "x").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(dir.path().join("file.txt"), dir.path().join("link")).unwrap();

        let mut entries = SystemFileSystemOps.read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let kind_of = |name: &str| {
            entries
                .iter()
                .find(|e| e.path.file_name().is_some_and(|n| n == name))
                .map(|e| e.kind)
        };
        assert_eq!(kind_of("file.txt"), Some(EntryKind::File));
        assert_eq!(kind_of("sub"), Some(EntryKind::Dir));
        #[cfg(unix)]
        assert_eq!(kind_of("link"), Some(EntryKind::Symlink));
    }

    #[test]
    fn system_hard_link_reports_already_exists() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("a");
        let link = dir.path().join("b");
        std::fs::write(&original, "x").unwrap();
        std::fs::write(&link, "y").unwrap();

        let err = SystemFileSystemOps.hard_link(&original, &link).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn system_exists_sees_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("dangling");
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();
            assert!(SystemFileSystemOps.exists(&link));
        }
        assert!(!SystemFileSystemOps.exists(&dir.path().join("nothing")));
    }

    #[test]
    fn mock_hard_link_twice_is_already_exists() {
        let fs = MockFileSystemOps::new().with_dir("/dst");
        fs.hard_link(Path::new("/src/a"), Path::new("/dst/a")).unwrap();
        let err = fs
            .hard_link(Path::new("/src/a"), Path::new("/dst/a"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs.writes().len(), 2);
    }

    #[test]
    fn mock_injected_failure() {
        let fs = MockFileSystemOps::new().with_failure("/dst/a", io::ErrorKind::PermissionDenied);
        let err = fs
            .hard_link(Path::new("/src/a"), Path::new("/dst/a"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(!fs.exists(Path::new("/dst/a")));
    }

    #[test]
    fn mock_rename_moves_path() {
        let fs = MockFileSystemOps::new().with_existing("/src/a");
        fs.rename(Path::new("/src/a"), Path::new("/dst/b")).unwrap();
        assert!(!fs.exists(Path::new("/src/a")));
        assert!(fs.exists(Path::new("/dst/b")));
    }

    #[test]
    fn mock_unknown_dir_is_not_found() {
        let err = MockFileSystemOps::new()
            .read_dir(Path::new("/nowhere"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
