// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::registry;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside step failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("No {field} selected")]
    MissingSelection { field: &'static str },

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    #[error("unknown framework: {key}")]
    UnknownFramework { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name becomes both a directory and the Go module path".into(),
                "Examples: blog, shop-api, my_service".into(),
            ],
            Self::MissingSelection { field } => vec![
                format!("A {} must be chosen before generation can start", field),
                "Run 'goginit init' again and complete every step".into(),
            ],
            Self::UnknownFramework { key } => {
                let mut suggestions = vec![
                    format!("'{}' is not a supported framework", key),
                    "Supported frameworks:".into(),
                ];
                for known in registry::keys() {
                    suggestions.push(format!("  • {}", known));
                }
                suggestions.push("List them any time with: goginit list".into());
                suggestions
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::MissingSelection { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownFramework { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
