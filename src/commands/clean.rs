//! Command: link (or rename) dirty files to their clean names.
use std::sync::Arc;

use anyhow::Result;

use crate::cleanup::{self, Context};
use crate::cli::CleanOpts;
use crate::config::toml_loader::{default_config_path, load_config};
use crate::config::{FileConfig, JobConfig, JobRequest, default_source};
use crate::error::{CleanupError, ConfigError};
use crate::logging::Logger;
use crate::operations::SystemFileSystemOps;
use crate::report::LogReporter;

impl From<&CleanOpts> for JobRequest {
    fn from(opts: &CleanOpts) -> Self {
        Self {
            source: opts.source.clone(),
            destinations: opts.destinations.clone(),
            execute: opts.run,
            trash: opts.trash,
            only_failed: opts.only_failed,
            quiet: opts.quiet,
            summary: opts.summary,
            rename: opts.rename,
        }
    }
}

/// Read the config file named by `--config`, or the default one if present.
///
/// # Errors
///
/// Returns an error if an explicitly named file is missing, or if any
/// config file cannot be read or parsed.
pub fn load_file_config(opts: &CleanOpts) -> Result<FileConfig, ConfigError> {
    match &opts.config {
        Some(path) if !path.exists() => Err(ConfigError::Io {
            path: path.clone(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }),
        Some(path) => load_config(path),
        None => default_config_path().map_or_else(|| Ok(FileConfig::default()), |p| load_config(&p)),
    }
}

/// Merge CLI flags over the config file and the default source.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded.
pub fn build_request(opts: &CleanOpts) -> Result<JobRequest, ConfigError> {
    let file = load_file_config(opts)?;
    Ok(JobRequest::from(opts)
        .with_file_defaults(file)
        .with_default_source(default_source()))
}

/// Write the resolved job to stdout as TOML.
#[allow(clippy::print_stdout)] // command output
fn print_config(config: &JobConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Run the clean command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the source directory
/// cannot be read. Per-file failures are reported but do not fail the command.
pub fn run(opts: &CleanOpts, log: &Arc<Logger>) -> Result<()> {
    let request = build_request(opts).map_err(|e| CleanupError::Config(e.into()))?;
    let config = JobConfig::resolve(&request, &SystemFileSystemOps).map_err(CleanupError::from)?;

    if opts.print_config {
        print_config(&config)?;
        return Ok(());
    }

    let header = if config.dry_run() {
        format!("Previewing {}", config.source().display())
    } else {
        format!("Cleaning {}", config.source().display())
    };
    if config.quiet() {
        log.debug(&header);
    } else {
        log.stage(&header);
    }

    let quiet = config.quiet();
    let show_summary = config.summary();
    let reporter = Arc::new(LogReporter::new(log.clone(), quiet));
    let ctx = Context::new(config, log.clone(), reporter);
    let summary = cleanup::run(&ctx).map_err(CleanupError::from)?;

    log.debug(&format!(
        "{} selected, {} rejected, {} failed, {} placed, {} trashed",
        summary.selected,
        summary.rejected,
        summary.failures,
        summary.placed.len(),
        summary.trashed
    ));
    if summary.selected == 0 && !quiet {
        log.info("Nothing to report");
    }
    if show_summary {
        log.print_summary();
    }
    let problems = log.failure_count();
    if problems > 0 {
        log.warn(&format!("{problems} file(s) could not be cleaned"));
    }
    Ok(())
}
