//! Ordered event stream of a cleanup run and its renderers.
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::logging::{FileStatus, Log};
use crate::naming::Rejection;
use crate::resources::LinkFailure;

/// Why a file or a destination could not be cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCause {
    /// The clean name was refused by the validator.
    Rejected(Rejection),
    /// The OS refused the link or rename.
    Link(LinkFailure),
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "{rejection}"),
            Self::Link(failure) => write!(f, "{failure}"),
        }
    }
}

/// One step of a run, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An accepted dirty file is about to be processed.
    Source {
        /// The dirty file.
        path: PathBuf,
    },
    /// Dry run: the clean name would be created.
    LinkPreview {
        /// The dirty file.
        source: PathBuf,
        /// `destination/clean_name`.
        target: PathBuf,
    },
    /// The clean name was created.
    Linked {
        /// The dirty file.
        source: PathBuf,
        /// `destination/clean_name`.
        target: PathBuf,
    },
    /// The clean name already exists; nothing was changed.
    Homonym {
        /// The dirty file.
        source: PathBuf,
        /// The existing path.
        target: PathBuf,
    },
    /// The file was rejected or a destination failed.
    Error {
        /// The dirty file.
        source: PathBuf,
        /// The clean path that was refused or could not be created.
        target: PathBuf,
        /// Human-readable reason.
        cause: ErrorCause,
    },
    /// The original is about to be trashed.
    Trashing {
        /// The dirty file.
        path: PathBuf,
    },
    /// The trash call succeeded for the whole batch.
    Trashed {
        /// The originals now in the trash.
        paths: Vec<PathBuf>,
        /// Output of the trash tool.
        output: String,
    },
    /// The trash call failed; created links are kept and no original moved.
    TrashFailed {
        /// The originals that stay in place.
        paths: Vec<PathBuf>,
        /// Human-readable reason.
        cause: String,
    },
}

/// Receives the events of a run.
pub trait Reporter: Send + Sync {
    /// Handle one event.
    fn report(&self, event: &Event);
}

/// [`Reporter`] that renders through a [`Log`] and records per-file entries
/// for the summary.
///
/// With `quiet`, progress goes to the log file only (at debug level); errors
/// stay on the console.
pub struct LogReporter {
    log: Arc<dyn Log>,
    quiet: bool,
}

impl fmt::Debug for LogReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogReporter")
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

impl LogReporter {
    /// Create a reporter writing to `log`.
    #[must_use]
    pub fn new(log: Arc<dyn Log>, quiet: bool) -> Self {
        Self { log, quiet }
    }

    fn progress(&self, msg: &str) {
        if self.quiet {
            self.log.debug(msg);
        } else {
            self.log.info(msg);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn parent(path: &Path) -> String {
    path.parent()
        .map_or_else(String::new, |p| p.display().to_string())
}

impl Reporter for LogReporter {
    fn report(&self, event: &Event) {
        match event {
            Event::Source { path } => {
                let msg = format!("{} ({})", file_name(path), parent(path));
                if self.quiet {
                    self.log.debug(&msg);
                } else {
                    self.log.stage(&msg);
                }
            }
            Event::LinkPreview { target, .. } => {
                let msg = format!("would link {}", target.display());
                if self.quiet {
                    self.log.debug(&msg);
                } else {
                    self.log.dry_run(&msg);
                }
                self.log
                    .record_file(&file_name(target), FileStatus::Preview, Some(&parent(target)));
            }
            Event::Linked { target, .. } => {
                self.progress(&format!("linked {}", target.display()));
                self.log
                    .record_file(&file_name(target), FileStatus::Linked, Some(&parent(target)));
            }
            Event::Homonym { target, .. } => {
                self.progress(&format!("homonym {}", target.display()));
                self.log
                    .record_file(&file_name(target), FileStatus::Homonym, Some(&parent(target)));
            }
            Event::Error {
                source,
                target,
                cause,
            } => {
                self.log.error(&format!(
                    "{}\n\t{}\n\t{cause}",
                    source.display(),
                    file_name(target)
                ));
                let status = match cause {
                    ErrorCause::Rejected(_) => FileStatus::Rejected,
                    ErrorCause::Link(_) => FileStatus::Failed,
                };
                self.log
                    .record_file(&file_name(target), status, Some(&cause.to_string()));
            }
            Event::Trashing { path } => {
                self.progress(&format!("trashing {}", path.display()));
            }
            Event::Trashed { paths, output } => {
                self.progress(&format!("trashed {} file(s)", paths.len()));
                if !output.is_empty() {
                    self.log.debug(output);
                }
                for path in paths {
                    self.log.record_file(&file_name(path), FileStatus::Trashed, None);
                }
            }
            Event::TrashFailed { paths, cause } => {
                self.log.error(&format!("trashing failed: {cause}"));
                let message = format!("not trashed: {cause}");
                for path in paths {
                    self.log
                        .record_file(&file_name(path), FileStatus::Failed, Some(&message));
                }
            }
        }
    }
}

/// [`Reporter`] that keeps every event, for tests and library callers.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &Event) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
    }
}
