//! Application layer for GoGinit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SkeletonService, DatabaseService, LaunchService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Report**: Generation steps and the summary of a successful run
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

// Re-export main services
pub use services::{DatabaseService, GeneratorOptions, LaunchService, SkeletonService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NoopObserver, ScaffoldObserver, TemplateRenderer, Toolchain};

pub use report::{DatabaseReport, GenerationReport, GenerationStep, ManifestOutcome};

pub use error::ApplicationError;
