//! GoGinit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the GoGinit
//! Go backend scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          goginit-cli (CLI)              │
//! │   (wizard driver, spinners, commands)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (SkeletonService, DatabaseService, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Toolchain, TemplateRenderer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    goginit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, GoToolchain, ...)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Wizard, registry, SkeletonLayout)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use goginit_core::prelude::*;
//!
//! // 1. Collect a spec (the wizard or flags)
//! let spec = ProjectSpec::new(ProjectName::parse("blog")?, "gin", false);
//!
//! // 2. Generate with injected adapters
//! let service = SkeletonService::new(filesystem, toolchain, renderer);
//! let report = service.generate(&spec, Path::new("."), &NoopObserver)?;
//! ```

// Domain layer (pure logic, static data)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DatabaseService, GenerationReport, GenerationStep, GeneratorOptions, LaunchService,
        ManifestOutcome, NoopObserver, SkeletonService,
        ports::{Filesystem, ScaffoldObserver, TemplateRenderer, Toolchain},
    };
    pub use crate::domain::{
        FRAMEWORK_REGISTRY, FrameworkDescriptor, LayoutOptions, ProjectName, ProjectSpec,
        RenderContext, SkeletonLayout, Wizard, WizardEvent, WizardOptions, WizardOutcome,
        WizardState, WizardView,
    };
    pub use crate::error::{GoginitError, GoginitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
