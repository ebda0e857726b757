//! Unified error handling for GoGinit Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, GenerationStep};
use crate::domain::DomainError;

/// Root error type for GoGinit Core operations.
///
/// This enum wraps all possible errors that can occur when using goginit-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GoginitError {
    /// Errors from the domain layer (validation, lookup).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (ports, orchestration).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// A generation step failed. Steps completed before it are not undone.
    #[error("Step '{step}' failed: {source}")]
    Step {
        step: GenerationStep,
        #[source]
        source: Box<GoginitError>,
    },
}

impl GoginitError {
    /// Wrap `source` as a failure of `step`.
    pub fn step(step: GenerationStep, source: impl Into<GoginitError>) -> Self {
        Self::Step {
            step,
            source: Box::new(source.into()),
        }
    }

    /// The step at which generation stopped, if this error came from one.
    pub fn failed_step(&self) -> Option<GenerationStep> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// The error with any step wrapping removed.
    pub fn root_cause(&self) -> &GoginitError {
        match self {
            Self::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the failure happened on the database bootstrap path, where
    /// every failure terminates the process. Generator-path failures are
    /// reported and the run ends normally.
    pub fn is_fatal(&self) -> bool {
        self.failed_step().is_some_and(GenerationStep::is_fatal)
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Step { step, source } => {
                let mut suggestions = source.suggestions();
                suggestions.push(format!(
                    "Generation stopped at '{}'; earlier files and directories were kept",
                    step
                ));
                suggestions
            }
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Step { source, .. } => source.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type GoginitResult<T> = Result<T, GoginitError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn step_wrapping_keeps_category_of_cause() {
        let err = GoginitError::step(
            GenerationStep::ResolveFramework,
            DomainError::UnknownFramework { key: "x".into() },
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.failed_step(), Some(GenerationStep::ResolveFramework));
        assert!(!err.is_fatal());
    }

    #[test]
    fn database_steps_are_fatal() {
        let err = GoginitError::step(
            GenerationStep::InstallDriver,
            ApplicationError::ExternalTool {
                command: "go get".into(),
                reason: "exit status 1".into(),
            },
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn root_cause_unwraps_steps() {
        let cause = ApplicationError::FilesystemError {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        };
        let err = GoginitError::step(GenerationStep::WriteStubs, cause.clone());
        assert_eq!(err.root_cause(), &GoginitError::Application(cause));
    }

    #[test]
    fn step_message_names_the_step() {
        let err = GoginitError::step(
            GenerationStep::FetchDependency,
            ApplicationError::ExternalTool {
                command: "go get github.com/gin-gonic/gin".into(),
                reason: "exit status 1".into(),
            },
        );
        assert!(err.to_string().contains("fetch framework dependency"));
    }

    #[test]
    fn tool_failures_are_internal() {
        let err = GoginitError::step(
            GenerationStep::FetchDependency,
            ApplicationError::ExternalTool {
                command: "go get github.com/gin-gonic/gin".into(),
                reason: "exit status 1".into(),
            },
        );
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_fatal());
    }
}
