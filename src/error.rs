//! Domain-specific error types for the cleanup engine.
//!
//! Library modules return the typed errors below; command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! CleanupError
//! ├── Config(ConfigErrors)  invalid directories, incompatible flags
//! └── Scan(ScanError)       the source directory cannot be listed
//! ```
//!
//! [`TrashError`] is returned by the trash collaborator and reported as an
//! event; a failed trash leaves the created links in place and the run
//! still succeeds.
//!
//! Per-file rejections and per-destination link failures are *not* errors in
//! this sense: they are outcomes reported through the event stream and never
//! abort a run.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a cleanup run.
#[derive(Error, Debug)]
pub enum CleanupError {
    /// The job configuration is invalid; nothing was touched.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigErrors),

    /// The source directory could not be listed; no file was processed.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// A single job-configuration problem.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A directory argument is empty or whitespace only.
    #[error("invalid {role} directory: blank")]
    BlankDirectory {
        /// Which directory was blank (`"source"` or `"destination"`).
        role: &'static str,
    },

    /// A directory argument does not exist.
    #[error("{role} directory does not exist: {}", path.display())]
    MissingDirectory {
        /// Which directory was missing.
        role: &'static str,
        /// The path as given (made absolute).
        path: PathBuf,
    },

    /// A directory argument exists but is not a directory.
    #[error("{role} path is not a directory: {}", path.display())]
    NotADirectory {
        /// Which directory was wrong.
        role: &'static str,
        /// The offending path.
        path: PathBuf,
    },

    /// Two requested behaviours cannot be combined.
    #[error("incompatible options: {0}")]
    IncompatibleFlags(String),

    /// An I/O error occurred while reading the config file or resolving a path.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema.
    #[error("invalid config file {}: {message}", path.display())]
    Parse {
        /// Path to the config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Every problem found while validating a job configuration.
///
/// Validation collects all problems instead of stopping at the first so the
/// user can fix them in one go.
#[derive(Debug)]
pub struct ConfigErrors(pub Vec<ConfigError>);

impl ConfigErrors {
    /// Iterate over the collected problems.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.0.iter()
    }

    /// Number of collected problems.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no problem was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ConfigErrors {}

impl<'a> IntoIterator for &'a ConfigErrors {
    type Item = &'a ConfigError;
    type IntoIter = std::slice::Iter<'a, ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<ConfigError> for ConfigErrors {
    fn from(error: ConfigError) -> Self {
        Self(vec![error])
    }
}

/// Errors raised while listing the source directory.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The directory cannot be listed (missing, permission denied, ...).
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors raised by the trash collaborator.
#[derive(Error, Debug)]
pub enum TrashError {
    /// No trash backend exists for the running platform.
    #[error("trashing is not supported on {platform}")]
    Unsupported {
        /// Name of the platform.
        platform: String,
    },

    /// The trash command is missing, could not be started, or exited non-zero.
    #[error("trash command '{program}' failed: {message}")]
    CommandFailed {
        /// Program that was invoked.
        program: String,
        /// Captured output or launch error.
        message: String,
    },
}
