//! Typed failure for a single link attempt.
//!
//! [`LinkFailure`] keeps the [`std::io::ErrorKind`] of the OS error together
//! with its message so outcomes stay `Clone + Eq` and can be compared in
//! tests, unlike [`std::io::Error`] itself.

use std::io;

use thiserror::Error;

/// A link or rename attempt that failed for a reason other than an existing
/// target (permission denied, cross-device, disk full, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LinkFailure {
    /// Kind of the underlying OS error.
    pub kind: io::ErrorKind,
    /// Human-readable cause.
    pub message: String,
}

impl From<io::Error> for LinkFailure {
    fn from(error: io::Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error_keeps_kind_and_message() {
        let failure = LinkFailure::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only volume",
        ));
        assert_eq!(failure.kind, io::ErrorKind::PermissionDenied);
        assert_eq!(failure.to_string(), "read-only volume");
    }

    #[test]
    fn link_failure_converts_to_anyhow() {
        let failure = LinkFailure::from(io::Error::from(io::ErrorKind::StorageFull));
        let _anyhow_err: anyhow::Error = failure.into();
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn link_failure_is_send_sync() {
        assert_send_sync::<LinkFailure>();
    }
}
