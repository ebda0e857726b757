//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `goginit-adapters` crate provides implementations.

use std::path::Path;

use crate::application::GenerationStep;
use crate::domain::RenderContext;
use crate::error::GoginitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `goginit_adapters::filesystem::LocalFilesystem` (production)
/// - `goginit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> GoginitResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> GoginitResult<()>;

    /// Create an empty file, truncating it if it exists.
    fn create_empty_file(&self, path: &Path) -> GoginitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the Go toolchain.
///
/// Every command runs with `dir` as its working directory; nothing here
/// changes the process-wide working directory.
///
/// Implemented by:
/// - `goginit_adapters::toolchain::GoToolchain`
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// `go mod init <module>`.
    fn init_module(&self, dir: &Path, module: &str) -> GoginitResult<()>;

    /// `go get <package>`.
    fn get(&self, dir: &Path, package: &str) -> GoginitResult<()>;

    /// `go mod tidy`.
    fn tidy(&self, dir: &Path) -> GoginitResult<()>;

    /// Installed toolchain version, e.g. `go1.22.4`.
    fn version(&self) -> GoginitResult<String>;

    /// `go run <source>` with the terminal attached. Returns once the
    /// program exits.
    fn run(&self, dir: &Path, source: &Path) -> GoginitResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `goginit_adapters::renderer::SimpleRenderer` (variable substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Substitute every `{{VARIABLE}}` in `source` from `context`.
    fn render(&self, source: &str, context: &RenderContext) -> GoginitResult<String>;
}

/// Progress callbacks emitted while a project is generated.
///
/// All methods default to doing nothing.
pub trait ScaffoldObserver {
    fn on_step_started(&self, _step: GenerationStep) {}

    fn on_step_completed(&self, _step: GenerationStep) {}

    /// Informational message produced by a step (skips, versions).
    fn on_notice(&self, _step: GenerationStep, _message: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}
