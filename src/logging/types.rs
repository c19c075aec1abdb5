//! Core logging types: per-file entries, status, and the [`Log`] trait.
use std::fmt;

/// Outcome of one dirty file for summary reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Clean name (or the raw name when it was rejected).
    pub name: String,
    /// Final status of the file.
    pub status: FileStatus,
    /// Optional detail (rejection reason, failure cause, destination).
    pub message: Option<String>,
}

/// Status of a processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// A new clean name was created in at least one destination.
    Linked,
    /// Dry run; the clean name would have been created.
    Preview,
    /// Every destination already held the clean name.
    Homonym,
    /// The name could not be cleaned.
    Rejected,
    /// At least one link attempt failed.
    Failed,
    /// The original was handed to the trash.
    Trashed,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Linked => "linked",
            Self::Preview => "preview",
            Self::Homonym => "homonym",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
            Self::Trashed => "trashed",
        };
        f.write_str(label)
    }
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) implements it for real runs; reporters
/// and commands only see this trait.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a file outcome for the summary.
    fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>);
}
