//! Log file location, timestamps and escape-code stripping.
use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Overrides the directory holding the log files.
pub(super) const LOG_DIR_ENV: &str = "ZL_CLEANUP_LOG_DIR";

/// CSI sequences (`ESC [ ... final`) and two-byte `ESC x` escapes.
#[allow(clippy::expect_used)] // literal pattern
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|[@-Z\\-_])").expect("valid escape pattern")
});

/// Remove terminal escape codes so the log file stays plain text.
pub(super) fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Directory for log files, first match wins:
/// `$ZL_CLEANUP_LOG_DIR`, `$XDG_CACHE_HOME/zl-cleanup`, `~/.cache/zl-cleanup`.
fn log_dir(var: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = var(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let cache = var("XDG_CACHE_HOME").map_or_else(
        || {
            var("HOME")
                .or_else(|| var("USERPROFILE"))
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
                .join(".cache")
        },
        PathBuf::from,
    );
    cache.join("zl-cleanup")
}

/// `<log dir>/<command>.log`, creating the directory if needed.
///
/// Returns `None` when the directory cannot be created; logging then stays
/// console-only.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    let dir = log_dir(&|name| std::env::var(name).ok().filter(|v| !v.is_empty()));
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{command}.log")))
}

/// Timestamp for the run header.
pub(super) fn header_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Timestamp prefixed to every log line.
pub(super) fn line_timestamp(at: DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}
