//! Structured logger with dry-run awareness and per-file summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{FileEntry, FileStatus, Log};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with dry-run awareness and summary collection.
///
/// Every message also lands in `<command>.log` under the log directory
/// through the file layer installed by
/// [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug)]
pub struct Logger {
    files: Mutex<Vec<FileEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger.
    ///
    /// Only remembers the log file path for the summary; the file itself is
    /// created by the subscriber's file layer.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            files: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Create a logger whose summary points at `path`.
    #[must_use]
    pub fn with_log_path(path: PathBuf) -> Self {
        Self {
            files: Mutex::new(Vec::new()),
            log_file: Some(path),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Return a clone of all recorded file entries.
    #[must_use]
    pub fn file_entries(&self) -> Vec<FileEntry> {
        self.files.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (console only when verbose, always in the file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }
}

impl Logger {
    /// Record a file outcome for the summary.
    pub fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.files.lock() {
            guard.push(FileEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the files that failed or were rejected.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.files.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|f| matches!(f.status, FileStatus::Failed | FileStatus::Rejected))
                .count()
        })
    }

    /// Print the per-file summary followed by totals.
    pub fn print_summary(&self) {
        let files = self.file_entries();
        self.stage("Summary");
        if files.is_empty() {
            self.info("Nothing to report");
            return;
        }

        let mut counts = [0u32; 6];
        for file in &files {
            let (slot, icon, color) = match file.status {
                FileStatus::Linked => (0, "✓", "\x1b[36m"),
                FileStatus::Preview => (1, "~", "\x1b[37m"),
                FileStatus::Homonym => (2, "=", "\x1b[34m"),
                FileStatus::Rejected => (3, "○", "\x1b[33m"),
                FileStatus::Failed => (4, "✗", "\x1b[31m"),
                FileStatus::Trashed => (5, "⌫", "\x1b[33m"),
            };
            if let Some(count) = counts.get_mut(slot) {
                *count += 1;
            }

            let suffix = file
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", file.name));
        }

        let [linked, preview, homonym, rejected, failed, trashed] = counts;
        self.info(&format!(
            "{} entries: \x1b[36m{linked} linked\x1b[0m, \x1b[37m{preview} preview\x1b[0m, \x1b[34m{homonym} homonym\x1b[0m, \x1b[33m{rejected} rejected\x1b[0m, \x1b[31m{failed} failed\x1b[0m, \x1b[33m{trashed} trashed\x1b[0m",
            files.len()
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>) {
        self.record_file(name, status, message);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::isolated_logger;
    use std::fs;

    fn log_contents(log: &Logger) -> String {
        let path = log.log_path().expect("log path should exist");
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn logger_new_has_no_entries() {
        let (log, _tmp, _guard) = isolated_logger();
        assert!(log.file_entries().is_empty());
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn record_file_keeps_order_and_message() {
        let (log, _tmp, _guard) = isolated_logger();
        log.record_file("a.pdf", FileStatus::Linked, None);
        log.record_file("b.pdf", FileStatus::Failed, Some("permission denied"));
        let entries = log.file_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.pdf");
        assert_eq!(entries[1].message.as_deref(), Some("permission denied"));
    }

    #[test]
    fn failure_count_includes_rejections() {
        let (log, _tmp, _guard) = isolated_logger();
        log.record_file("a", FileStatus::Linked, None);
        log.record_file("b", FileStatus::Failed, None);
        log.record_file("c", FileStatus::Rejected, Some("normalization made no change"));
        log.record_file("d", FileStatus::Homonym, None);
        assert_eq!(log.failure_count(), 2);
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let (log, _tmp, _guard) = isolated_logger();
        let log_ref: &dyn Log = &log;
        log_ref.record_file("via-trait", FileStatus::Preview, None);
        assert_eq!(log.file_entries().len(), 1);
    }

    #[test]
    fn debug_always_written_to_file() {
        let (log, _tmp, _guard) = isolated_logger();
        let marker = format!("debug-marker-{}", std::process::id());
        log.debug(&marker);
        let contents = log_contents(&log);
        assert!(contents.contains("[debug]"));
        assert!(contents.contains(&marker));
    }

    #[test]
    fn error_and_dry_run_are_tagged_in_file() {
        let (log, _tmp, _guard) = isolated_logger();
        log.error("cannot link");
        log.dry_run("link a -> b");
        let contents = log_contents(&log);
        assert!(contents.contains("[error] cannot link"));
        assert!(contents.contains("[dry run] link a -> b"));
    }

    #[test]
    fn summary_lists_entries_and_totals() {
        let (log, _tmp, _guard) = isolated_logger();
        log.record_file("Clean Title.pdf", FileStatus::Linked, Some("/dst"));
        log.record_file("Other.pdf", FileStatus::Homonym, None);
        log.print_summary();
        let contents = log_contents(&log);
        assert!(contents.contains("==> Summary"));
        assert!(contents.contains("✓ Clean Title.pdf (/dst)"));
        assert!(contents.contains("2 entries: 1 linked, 0 preview, 1 homonym"));
    }

    #[test]
    fn empty_summary_says_nothing_to_report() {
        let (log, _tmp, _guard) = isolated_logger();
        log.print_summary();
        assert!(log_contents(&log).contains("Nothing to report"));
    }
}
