//! Job configuration: raw request, optional config file, validated job.
//!
//! A [`JobRequest`] holds what the user asked for (CLI flags merged over the
//! config file). [`JobConfig::resolve`] validates it once and produces the
//! immutable [`JobConfig`] passed down to the run; there is no global state.
pub mod toml_loader;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigErrors};
use crate::operations::FileSystemOps;
use crate::resources::LinkMode;

/// Contents of the optional `config.toml`.
///
/// Only defaults live here; the mutating switches (`run`, `trash`) must be
/// given on the command line every time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Default source directory.
    pub source: Option<String>,
    /// Default destination directories, in order.
    pub destinations: Vec<String>,
    /// Default for `--quiet`.
    pub quiet: bool,
    /// Default for `--summary`.
    pub summary: bool,
}

/// Unvalidated job parameters, as typed by the user.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JobRequest {
    /// Source directory; `None` falls back to the config file, then `~/Downloads`.
    pub source: Option<String>,
    /// Destination directories in declaration order; empty means "the source".
    pub destinations: Vec<String>,
    /// Perform filesystem mutations instead of previewing.
    pub execute: bool,
    /// Trash the originals that were fully placed.
    pub trash: bool,
    /// Report only files that fail cleanup.
    pub only_failed: bool,
    /// Suppress progress output.
    pub quiet: bool,
    /// Print per-file outcomes at the end.
    pub summary: bool,
    /// Rename instead of hard linking.
    pub rename: bool,
}

impl JobRequest {
    /// Fill unset values from `file`. Values already in the request win;
    /// destinations from the file are used only if none were requested.
    #[must_use]
    pub fn with_file_defaults(mut self, file: FileConfig) -> Self {
        if self.source.is_none() {
            self.source = file.source;
        }
        if self.destinations.is_empty() {
            self.destinations = file.destinations;
        }
        self.quiet |= file.quiet;
        self.summary |= file.summary;
        self
    }

    /// Use `default` as the source when none was given anywhere.
    #[must_use]
    pub fn with_default_source(mut self, default: Option<PathBuf>) -> Self {
        if self.source.is_none() {
            self.source = default.map(|p| p.to_string_lossy().into_owned());
        }
        self
    }
}

/// `$HOME/Downloads`, the usual landing place of dirty files.
#[must_use]
pub fn default_source() -> Option<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| PathBuf::from(home).join("Downloads"))
}

/// A validated, immutable job.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct JobConfig {
    source: PathBuf,
    destinations: Vec<PathBuf>,
    mode: LinkMode,
    execute: bool,
    trash_originals: bool,
    report_only_failures: bool,
    quiet: bool,
    summary: bool,
}

impl JobConfig {
    /// Validate `request` and build the job.
    ///
    /// Every problem is collected before returning so the user sees them all:
    /// incompatible switches, blank directories, directories that do not
    /// exist. Directories are made absolute; when no destination is given the
    /// source directory is used.
    ///
    /// # Errors
    ///
    /// Returns all [`ConfigError`]s found.
    pub fn resolve(request: &JobRequest, fs: &dyn FileSystemOps) -> Result<Self, ConfigErrors> {
        let mut errors = flag_errors(request);

        let source = resolve_dir("source", request.source.as_deref().unwrap_or(""), fs)
            .map_err(|e| errors.push(e))
            .ok();

        let destinations: Vec<PathBuf> = if request.destinations.is_empty() {
            source.iter().cloned().collect()
        } else {
            request
                .destinations
                .iter()
                .filter_map(|dir| {
                    resolve_dir("destination", dir, fs)
                        .map_err(|e| errors.push(e))
                        .ok()
                })
                .collect()
        };

        match source {
            Some(source) if errors.is_empty() => Ok(Self {
                source,
                destinations,
                mode: if request.rename {
                    LinkMode::Rename
                } else {
                    LinkMode::HardLink
                },
                execute: request.execute,
                trash_originals: request.trash,
                report_only_failures: request.only_failed,
                quiet: request.quiet,
                summary: request.summary,
            }),
            _ => Err(ConfigErrors(errors)),
        }
    }

    /// Absolute source directory.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Absolute destination directories, in declaration order. Never empty.
    #[must_use]
    pub fn destinations(&self) -> &[PathBuf] {
        &self.destinations
    }

    /// Link or rename.
    #[must_use]
    pub const fn mode(&self) -> LinkMode {
        self.mode
    }

    /// `true` for a preview run.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        !self.execute
    }

    /// `true` when fully placed originals are trashed at the end.
    #[must_use]
    pub const fn trash_originals(&self) -> bool {
        self.trash_originals
    }

    /// `true` when only failures are reported and nothing is linked.
    #[must_use]
    pub const fn report_only_failures(&self) -> bool {
        self.report_only_failures
    }

    /// `true` when progress output is suppressed.
    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    /// `true` when per-file outcomes are printed at the end.
    #[must_use]
    pub const fn summary(&self) -> bool {
        self.summary
    }

    /// Render the job as TOML for `--print-config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is not valid UTF-8.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

fn flag_errors(request: &JobRequest) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if request.execute && request.only_failed {
        errors.push(ConfigError::IncompatibleFlags(
            "either 'run' or 'only-failed' should be requested".to_string(),
        ));
    }
    if request.trash && !request.execute {
        errors.push(ConfigError::IncompatibleFlags(
            "'trash' makes sense only with 'run'".to_string(),
        ));
    }
    if request.rename && request.trash {
        errors.push(ConfigError::IncompatibleFlags(
            "'rename' leaves no original to trash".to_string(),
        ));
    }
    if request.rename && request.destinations.len() > 1 {
        errors.push(ConfigError::IncompatibleFlags(
            "'rename' accepts a single destination".to_string(),
        ));
    }
    errors
}

fn resolve_dir(
    role: &'static str,
    raw: &str,
    fs: &dyn FileSystemOps,
) -> Result<PathBuf, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::BlankDirectory { role });
    }
    let path = std::path::absolute(trimmed).map_err(|source| ConfigError::Io {
        path: PathBuf::from(trimmed),
        source,
    })?;
    if !fs.exists(&path) {
        return Err(ConfigError::MissingDirectory { role, path });
    }
    if !fs.is_dir(&path) {
        return Err(ConfigError::NotADirectory { role, path });
    }
    Ok(dunce::canonicalize(&path).unwrap_or(path))
}
