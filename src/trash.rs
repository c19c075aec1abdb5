//! Bulk trash of originals that were fully placed elsewhere.
//!
//! The trash is a platform service, reached by shelling out through
//! [`Executor`]: Finder via `osascript` on macOS, `gio trash` on Linux. The
//! call is all-or-nothing and never retried.
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::TrashError;
use crate::exec::{Executor, SystemExecutor};
use crate::platform::{Os, Platform};

/// Moves files to the platform trash.
#[cfg_attr(test, mockall::automock)]
pub trait Trasher: Send + Sync + fmt::Debug {
    /// Trash every path in one call and return the tool's output.
    ///
    /// # Errors
    ///
    /// Returns [`TrashError::Unsupported`] when the platform has no backend,
    /// or [`TrashError::CommandFailed`] when the command is missing, cannot be
    /// run, or exits non-zero.
    fn trash(&self, paths: &[PathBuf]) -> Result<String, TrashError>;
}

/// [`Trasher`] that runs the platform's trash command.
#[derive(Debug)]
pub struct CommandTrasher {
    platform: Platform,
    executor: Box<dyn Executor>,
}

impl CommandTrasher {
    /// Create a trasher for `platform` running commands through `executor`.
    #[must_use]
    pub fn new(platform: Platform, executor: Box<dyn Executor>) -> Self {
        Self { platform, executor }
    }

    /// Trasher for the running system.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Platform::detect(), Box::new(SystemExecutor))
    }

    /// Program and arguments that trash `paths` on this platform.
    fn command(&self, paths: &[PathBuf]) -> Result<(&'static str, Vec<String>), TrashError> {
        match self.platform.os {
            Os::MacOs => Ok(("osascript", vec!["-e".to_string(), finder_script(paths)])),
            Os::Linux => {
                let mut args = vec!["trash".to_string(), "--".to_string()];
                args.extend(paths.iter().map(|p| p.to_string_lossy().into_owned()));
                Ok(("gio", args))
            }
            os => Err(TrashError::Unsupported {
                platform: os.to_string(),
            }),
        }
    }
}

impl Trasher for CommandTrasher {
    fn trash(&self, paths: &[PathBuf]) -> Result<String, TrashError> {
        if paths.is_empty() {
            return Ok(String::new());
        }
        let (program, args) = self.command(paths)?;
        if !self.executor.which(program) {
            return Err(TrashError::CommandFailed {
                program: program.to_string(),
                message: "not found on PATH".to_string(),
            });
        }
        let result =
            self.executor
                .run_unchecked(program, &args)
                .map_err(|e| TrashError::CommandFailed {
                    program: program.to_string(),
                    message: format!("{e:#}"),
                })?;
        if !result.success {
            let output = if result.stderr.trim().is_empty() {
                result.stdout.trim()
            } else {
                result.stderr.trim()
            };
            return Err(TrashError::CommandFailed {
                program: program.to_string(),
                message: format!("exit {}: {output}", result.code.unwrap_or(-1)),
            });
        }
        Ok(result.stdout.trim().to_string())
    }
}

/// `tell application "Finder" to delete {POSIX file "…", …}`
fn finder_script(paths: &[PathBuf]) -> String {
    let files: Vec<String> = paths
        .iter()
        .map(|p| format!("POSIX file \"{}\"", applescript_escape(p)))
        .collect();
    format!(
        "tell application \"Finder\" to delete {{{}}}",
        files.join(", ")
    )
}

fn applescript_escape(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}
