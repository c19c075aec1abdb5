//! Link resource.
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{LinkFailure, LinkOutcome, TargetState};
use crate::operations::FileSystemOps;

/// How a clean copy is materialized at a destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkMode {
    /// Add a hard link; the original stays in place.
    #[default]
    HardLink,
    /// Move the original to its clean name (single destination only).
    Rename,
}

impl LinkMode {
    /// Verb used in log messages.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::HardLink => "link",
            Self::Rename => "rename",
        }
    }
}

/// A clean name to materialize for one source file in one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResource {
    /// The dirty file on disk.
    pub source: PathBuf,
    /// `destination/clean_name`.
    pub target: PathBuf,
    /// Link or rename.
    pub mode: LinkMode,
}

impl LinkResource {
    /// Plan the target for `clean_name` inside `destination`.
    #[must_use]
    pub fn plan(source: &Path, destination: &Path, clean_name: &str, mode: LinkMode) -> Self {
        Self {
            source: source.to_path_buf(),
            target: destination.join(clean_name),
            mode,
        }
    }

    /// Human-readable description of this resource.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.target.display())
    }

    /// Check whether the target is already occupied. Never mutates.
    #[must_use]
    pub fn current_state(&self, fs: &dyn FileSystemOps) -> TargetState {
        if fs.exists(&self.target) {
            TargetState::Occupied
        } else {
            TargetState::Vacant
        }
    }

    /// Materialize the target and classify the attempt.
    ///
    /// An occupied target is reported as [`LinkOutcome::AlreadyExists`] and is
    /// never overwritten. Renames check occupation first because platform
    /// renames silently replace existing files.
    #[must_use]
    pub fn apply(&self, fs: &dyn FileSystemOps) -> LinkOutcome {
        let result = match self.mode {
            LinkMode::HardLink => fs.hard_link(&self.source, &self.target),
            LinkMode::Rename => {
                if self.current_state(fs) == TargetState::Occupied {
                    return LinkOutcome::AlreadyExists;
                }
                fs.rename(&self.source, &self.target)
            }
        };
        match result {
            Ok(()) => LinkOutcome::Linked,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => LinkOutcome::AlreadyExists,
            Err(e) => LinkOutcome::Failed(LinkFailure::from(e)),
        }
    }
}
