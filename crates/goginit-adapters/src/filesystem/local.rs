//! Local filesystem adapter using std::fs.

use std::fs::File;
use std::io;
use std::path::Path;

use goginit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GoginitError, GoginitResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoginitResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GoginitResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_empty_file(&self, path: &Path) -> GoginitResult<()> {
        trace!(path = %path.display(), "create_empty_file");
        File::create(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GoginitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
