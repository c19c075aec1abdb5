use std::sync::Arc;

use crate::config::JobConfig;
use crate::logging::Log;
use crate::operations::{FileSystemOps, SystemFileSystemOps};
use crate::report::Reporter;
use crate::trash::{CommandTrasher, Trasher};

/// Everything a cleanup run needs, injected once.
pub struct Context {
    /// The validated job.
    pub config: JobConfig,
    /// Logger for stage and debug messages.
    pub log: Arc<dyn Log>,
    /// Receiver of the ordered event stream.
    pub reporter: Arc<dyn Reporter>,
    /// Filesystem operation abstraction (injectable for testing).
    pub fs_ops: Arc<dyn FileSystemOps>,
    /// Trash collaborator (injectable for testing).
    pub trasher: Arc<dyn Trasher>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("log", &"<dyn Log>")
            .field("reporter", &"<dyn Reporter>")
            .field("fs_ops", &self.fs_ops)
            .field("trasher", &self.trasher)
            .finish()
    }
}

impl Context {
    /// Creates a context backed by the real filesystem and platform trash.
    #[must_use]
    pub fn new(config: JobConfig, log: Arc<dyn Log>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            log,
            reporter,
            fs_ops: Arc::new(SystemFileSystemOps),
            trasher: Arc::new(CommandTrasher::system()),
        }
    }

    /// Replace the filesystem backend.
    #[must_use]
    pub fn with_fs_ops(mut self, fs_ops: Arc<dyn FileSystemOps>) -> Self {
        self.fs_ops = fs_ops;
        self
    }

    /// Replace the trash collaborator.
    #[must_use]
    pub fn with_trasher(mut self, trasher: Arc<dyn Trasher>) -> Self {
        self.trasher = trasher;
        self
    }
}
