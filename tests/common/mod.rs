// Shared helpers for integration tests.
//
// Provides a temporary download directory with destination folders, a
// recording trash double and a silent logger so each integration test can
// run the real cleanup loop against the real filesystem in isolation.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use zl_cleanup::cleanup::{self, Context, RunSummary};
use zl_cleanup::config::{JobConfig, JobRequest};
use zl_cleanup::error::TrashError;
use zl_cleanup::logging::{FileStatus, Log};
use zl_cleanup::operations::SystemFileSystemOps;
use zl_cleanup::report::{Event, RecordingReporter};
use zl_cleanup::trash::Trasher;

/// A [`Log`] that discards everything.
#[derive(Debug, Default)]
pub struct NullLog;

impl Log for NullLog {
    fn stage(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn dry_run(&self, _msg: &str) {}
    fn record_file(&self, _name: &str, _status: FileStatus, _message: Option<&str>) {}
}

/// A [`Trasher`] that records every batch instead of trashing.
#[derive(Debug, Default)]
pub struct RecordingTrasher {
    batches: Mutex<Vec<Vec<PathBuf>>>,
}

impl RecordingTrasher {
    /// Every batch received so far.
    pub fn batches(&self) -> Vec<Vec<PathBuf>> {
        self.batches.lock().expect("batches poisoned").clone()
    }
}

impl Trasher for RecordingTrasher {
    fn trash(&self, paths: &[PathBuf]) -> Result<String, TrashError> {
        self.batches
            .lock()
            .expect("batches poisoned")
            .push(paths.to_vec());
        Ok(String::new())
    }
}

/// A download directory and two destinations inside one [`tempfile::TempDir`].
///
/// Layout:
/// - `downloads/`  source of dirty files
/// - `library/`    first destination
/// - `backup/`     second destination
pub struct Workspace {
    /// Temporary root, deleted on drop.
    pub root: tempfile::TempDir,
}

impl Workspace {
    /// Create the three directories.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        for dir in ["downloads", "library", "backup"] {
            std::fs::create_dir_all(root.path().join(dir)).expect("create dir");
        }
        Self { root }
    }

    /// `downloads/`.
    pub fn downloads(&self) -> PathBuf {
        self.root.path().join("downloads")
    }

    /// `library/`.
    pub fn library(&self) -> PathBuf {
        self.root.path().join("library")
    }

    /// `backup/`.
    pub fn backup(&self) -> PathBuf {
        self.root.path().join("backup")
    }

    /// Write a file named `name` with `content` into `downloads/`.
    pub fn download(&self, name: &str, content: &str) -> PathBuf {
        let path = self.downloads().join(name);
        std::fs::write(&path, content).expect("write download");
        path
    }

    /// A request for `downloads/` into the given destinations.
    pub fn request(&self, destinations: &[&Path], execute: bool) -> JobRequest {
        JobRequest {
            source: Some(self.downloads().to_string_lossy().into_owned()),
            destinations: destinations
                .iter()
                .map(|d| d.to_string_lossy().into_owned())
                .collect(),
            execute,
            ..JobRequest::default()
        }
    }
}

/// Result of [`run_job`].
pub struct JobRun {
    pub summary: RunSummary,
    pub events: Vec<Event>,
}

/// Resolve `request` and run it against the real filesystem.
pub fn run_job(request: &JobRequest, trasher: Arc<dyn Trasher>) -> JobRun {
    let config = JobConfig::resolve(request, &SystemFileSystemOps).expect("valid config");
    let reporter = Arc::new(RecordingReporter::new());
    let ctx = Context::new(config, Arc::new(NullLog), reporter.clone()).with_trasher(trasher);
    let summary = cleanup::run(&ctx).expect("run succeeds");
    JobRun {
        summary,
        events: reporter.events(),
    }
}

/// File names directly inside `dir`, sorted.
pub fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
