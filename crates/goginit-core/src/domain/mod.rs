//! Core domain layer for GoGinit.
//!
//! This module contains pure logic with no I/O. Filesystem writes and
//! toolchain invocations are reached only through the ports defined in the
//! application layer.
//!
//! - **No I/O**: No filesystem, process, or terminal calls
//! - **Static data**: the framework registry and templates are `'static`
//! - **Pure state machine**: the wizard is `(state, event) -> state`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod registry;
pub mod templates;
pub mod value_objects;
pub mod wizard;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{LayoutOptions, RenderContext, SkeletonLayout, StubFile};

pub use error::{DomainError, ErrorCategory};

pub use registry::{FRAMEWORK_REGISTRY, FrameworkDescriptor};

pub use value_objects::{ProjectName, ProjectSpec};

pub use wizard::{
    DB_CHOICES, Wizard, WizardEvent, WizardOptions, WizardOutcome, WizardState, WizardStep,
    WizardView,
};

pub use validation::DomainValidator;
