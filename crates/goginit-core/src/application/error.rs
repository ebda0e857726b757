//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the ports the
//! orchestration drives, not domain rule violations. Those are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by services and port implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external toolchain command exited unsuccessfully or could not start.
    #[error("`{command}` failed: {reason}")]
    ExternalTool { command: String, reason: String },

    /// Template substitution failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// `start` could not find the entry point to run.
    #[error("Entry point not found: {path}")]
    EntryPointMissing { path: PathBuf },

    /// Adapter-internal lock was poisoned.
    #[error("Adapter state is unavailable")]
    AdapterLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files created before the failure were left in place".into(),
            ],
            Self::ExternalTool { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure the Go toolchain is installed and on your PATH (go version)".into(),
                "Check your network connection and GOPROXY settings".into(),
                "Set toolchain.go_binary in the config to use a specific go binary".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "The database source template could not be rendered".into(),
                "This is likely a bug, please report it".into(),
            ],
            Self::EntryPointMissing { path } => vec![
                format!("Expected an entry point at {}", path.display()),
                "Run 'goginit start' from the project root".into(),
                "Or pass --dir <project-root>".into(),
            ],
            Self::AdapterLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::AdapterLockError => ErrorCategory::Internal,
            Self::ExternalTool { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::EntryPointMissing { .. } => ErrorCategory::NotFound,
        }
    }
}
