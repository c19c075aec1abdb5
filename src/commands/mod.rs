//! Top-level subcommand orchestration (`clean`, `check`, `version`).
pub mod check;
pub mod clean;
pub mod version;

/// Version string: `ZL_CLEANUP_VERSION` from the build, else the crate version.
#[must_use]
pub fn version_string() -> &'static str {
    option_env!("ZL_CLEANUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
