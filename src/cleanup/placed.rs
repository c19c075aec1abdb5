//! The set of originals that were durably placed elsewhere.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::resources::LinkOutcome;

/// Originals that are safe to trash, in the order they were first placed.
///
/// A path enters on its first [`LinkOutcome::Linked`] and leaves for good on
/// any [`LinkOutcome::Failed`]: one refused destination is enough to keep the
/// original. [`LinkOutcome::AlreadyExists`] changes nothing, so a rerun over
/// already-cleaned files yields an empty set.
#[derive(Debug, Default, Clone)]
pub struct PlacedSet {
    entries: Vec<PathBuf>,
    tainted: HashSet<PathBuf>,
}

impl PlacedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one link attempt of `source`.
    pub fn record(&mut self, source: &Path, outcome: &LinkOutcome) {
        match outcome {
            LinkOutcome::Linked => {
                if !self.tainted.contains(source) && !self.contains(source) {
                    self.entries.push(source.to_path_buf());
                }
            }
            LinkOutcome::Failed(_) => {
                self.entries.retain(|p| p != source);
                self.tainted.insert(source.to_path_buf());
            }
            LinkOutcome::AlreadyExists => {}
        }
    }

    /// Returns `true` if `source` is currently in the set.
    #[must_use]
    pub fn contains(&self, source: &Path) -> bool {
        self.entries.iter().any(|p| p == source)
    }

    /// Placed originals in insertion order.
    #[must_use]
    pub const fn paths(&self) -> &[PathBuf] {
        self.entries.as_slice()
    }

    /// Number of placed originals.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing was placed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::LinkFailure;
    use std::io;

    fn failed() -> LinkOutcome {
        LinkOutcome::Failed(LinkFailure::from(io::Error::from(
            io::ErrorKind::PermissionDenied,
        )))
    }

    #[test]
    fn linked_then_failed_is_removed() {
        let mut set = PlacedSet::new();
        let a = Path::new("/dl/a");
        set.record(a, &LinkOutcome::Linked);
        assert!(set.contains(a));
        set.record(a, &failed());
        assert!(set.is_empty());
    }

    #[test]
    fn failed_then_linked_stays_out() {
        let mut set = PlacedSet::new();
        let a = Path::new("/dl/a");
        set.record(a, &failed());
        set.record(a, &LinkOutcome::Linked);
        assert!(!set.contains(a));
    }

    #[test]
    fn already_exists_adds_nothing() {
        let mut set = PlacedSet::new();
        set.record(Path::new("/dl/a"), &LinkOutcome::AlreadyExists);
        assert!(set.is_empty());

        set.record(Path::new("/dl/b"), &LinkOutcome::Linked);
        set.record(Path::new("/dl/b"), &LinkOutcome::AlreadyExists);
        assert_eq!(set.paths(), &[PathBuf::from("/dl/b")]);
    }

    #[test]
    fn insertion_order_without_duplicates() {
        let mut set = PlacedSet::new();
        for name in ["/dl/c", "/dl/a", "/dl/c", "/dl/b"] {
            set.record(Path::new(name), &LinkOutcome::Linked);
        }
        assert_eq!(
            set.paths(),
            &[
                PathBuf::from("/dl/c"),
                PathBuf::from("/dl/a"),
                PathBuf::from("/dl/b")
            ]
        );
        assert_eq!(set.len(), 3);
    }
}
